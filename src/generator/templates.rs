//! Hand-authored demo templates
//!
//! Each template is a fixed bundle of markup, styles and script used to
//! preview one family of animations. Class names carrying the `switch-` or
//! `checkbox-` prefix are re-triggered by the page script alongside the
//! top-level demo element.

use anyhow::Result;

use crate::catalog::to_slug;
use crate::generator::DemoConfig;

/// A static demo bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    pub demo_html: &'static str,
    pub keyframes: &'static str,
    pub animation_class: &'static str,
    pub extra_js: &'static str,
    pub demo_styles: &'static str,
}

impl Template {
    pub fn to_config(&self) -> DemoConfig {
        DemoConfig {
            demo_html: self.demo_html.to_string(),
            keyframes: self.keyframes.to_string(),
            animation_class: self.animation_class.to_string(),
            extra_js: self.extra_js.to_string(),
            demo_styles: self.demo_styles.to_string(),
        }
    }
}

pub const NAVIGATION_PUSH_POP: Template = Template {
    demo_html: r#"<div class="screen-container">
            <div class="screen screen-1">
                <div class="nav-bar">
                    <h3>Screen 1</h3>
                </div>
                <div class="screen-content">
                    <p>First Screen</p>
                    <button class="nav-button">Push Next →</button>
                </div>
            </div>
            <div class="screen screen-2">
                <div class="nav-bar">
                    <button class="back-btn">← Back</button>
                    <h3>Screen 2</h3>
                </div>
                <div class="screen-content">
                    <p>Second Screen</p>
                </div>
            </div>
        </div>"#,
    keyframes: r#"@keyframes slideInRight {
    from {
        transform: translateX(100%);
    }
    to {
        transform: translateX(0);
    }
}

@keyframes slideOutRight {
    from {
        transform: translateX(0);
    }
    to {
        transform: translateX(100%);
    }
}"#,
    animation_class: r#".screen-2.animate {
    animation: slideInRight 0.4s cubic-bezier(0.4, 0, 0.2, 1);
}"#,
    extra_js: "",
    demo_styles: r#".screen-container {
    position: relative;
    width: 300px;
    height: 500px;
    background: white;
    border-radius: 24px;
    overflow: hidden;
    box-shadow: 0 20px 60px rgba(0, 0, 0, 0.3);
}

.screen {
    position: absolute;
    top: 0;
    left: 0;
    width: 100%;
    height: 100%;
    background: white;
}

.screen-2 {
    transform: translateX(100%);
}

.nav-bar {
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    color: white;
    padding: 1.5rem;
    display: flex;
    align-items: center;
    gap: 1rem;
}

.nav-bar h3 {
    margin: 0;
    flex: 1;
}

.back-btn {
    background: rgba(255, 255, 255, 0.2);
    border: none;
    color: white;
    padding: 0.5rem 1rem;
    border-radius: 8px;
    cursor: pointer;
}

.screen-content {
    padding: 2rem;
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 1rem;
}

.nav-button {
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    color: white;
    border: none;
    padding: 1rem 2rem;
    border-radius: 12px;
    cursor: pointer;
    font-weight: 600;
}"#,
};

pub const PARALLAX: Template = Template {
    demo_html: r#"<div class="parallax-container">
            <div class="parallax-layer layer-1">Background</div>
            <div class="parallax-layer layer-2">Middle</div>
            <div class="parallax-layer layer-3">Foreground</div>
        </div>"#,
    keyframes: r#"@keyframes parallax1 {
    from { transform: translateY(-10px); }
    to { transform: translateY(10px); }
}

@keyframes parallax2 {
    from { transform: translateY(-20px); }
    to { transform: translateY(20px); }
}

@keyframes parallax3 {
    from { transform: translateY(-30px); }
    to { transform: translateY(30px); }
}"#,
    animation_class: r#".layer-1.animate { animation: parallax1 2s ease-in-out infinite alternate; }
.layer-2.animate { animation: parallax2 2s ease-in-out infinite alternate; }
.layer-3.animate { animation: parallax3 2s ease-in-out infinite alternate; }"#,
    extra_js: "",
    demo_styles: r#".parallax-container {
    position: relative;
    width: 300px;
    height: 400px;
    background: #1a1a2e;
    border-radius: 16px;
    overflow: hidden;
}

.parallax-layer {
    position: absolute;
    width: 100%;
    height: 33%;
    display: flex;
    align-items: center;
    justify-content: center;
    color: white;
    font-weight: 600;
}

.layer-1 {
    top: 0;
    background: rgba(102, 126, 234, 0.3);
}

.layer-2 {
    top: 33%;
    background: rgba(102, 126, 234, 0.6);
}

.layer-3 {
    top: 66%;
    background: rgba(102, 126, 234, 0.9);
}"#,
};

pub const MODAL_SHEET_SLIDE: Template = Template {
    demo_html: r#"<div class="modal-demo-container">
            <div class="modal-backdrop"></div>
            <div class="bottom-sheet">
                <div class="sheet-handle"></div>
                <div class="sheet-header">
                    <h3>Bottom Sheet</h3>
                </div>
                <div class="sheet-content">
                    <p>This is a bottom sheet with spring damping animation</p>
                    <button class="sheet-action">Action</button>
                </div>
            </div>
        </div>"#,
    keyframes: r#"@keyframes slideUpSpring {
    from {
        transform: translateY(100%);
    }
    to {
        transform: translateY(0);
    }
}

@keyframes fadeInBackdrop {
    from {
        opacity: 0;
    }
    to {
        opacity: 1;
    }
}"#,
    animation_class: r#".bottom-sheet.animate {
    animation: slideUpSpring 0.6s cubic-bezier(0.34, 1.2, 0.64, 1);
}

.modal-backdrop.animate {
    animation: fadeInBackdrop 0.3s ease-out;
}"#,
    extra_js: r#"
        // Animate backdrop too
        const backdrop = document.querySelector('.modal-backdrop');
        if (backdrop) {
            playBtn.addEventListener('click', () => {
                backdrop.classList.remove('animate');
                void backdrop.offsetWidth;
                backdrop.classList.add('animate');
            });

            window.addEventListener('load', () => {
                setTimeout(() => {
                    backdrop.classList.add('animate');
                }, 300);
            });
        }"#,
    demo_styles: r#".modal-demo-container {
    position: relative;
    width: 350px;
    height: 600px;
    background: #f0f0f0;
    border-radius: 24px;
    overflow: hidden;
}

.modal-backdrop {
    position: absolute;
    top: 0;
    left: 0;
    width: 100%;
    height: 100%;
    background: rgba(0, 0, 0, 0.5);
    opacity: 0;
}

.bottom-sheet {
    position: absolute;
    bottom: 0;
    left: 0;
    width: 100%;
    background: white;
    border-radius: 24px 24px 0 0;
    box-shadow: 0 -8px 32px rgba(0, 0, 0, 0.2);
    transform: translateY(100%);
}

.sheet-handle {
    width: 40px;
    height: 4px;
    background: #ddd;
    border-radius: 2px;
    margin: 12px auto;
}

.sheet-header {
    padding: 1rem 1.5rem;
    border-bottom: 1px solid #eee;
}

.sheet-header h3 {
    margin: 0;
}

.sheet-content {
    padding: 1.5rem;
}

.sheet-action {
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    color: white;
    border: none;
    padding: 0.75rem 1.5rem;
    border-radius: 12px;
    margin-top: 1rem;
    cursor: pointer;
}"#,
};

pub const BUTTON_PRESS_SQUISH: Template = Template {
    demo_html: r#"<button class="demo-press-button">
            <span class="material-icons-round">touch_app</span>
            Press Me
        </button>"#,
    keyframes: r#"@keyframes buttonPress {
    0% {
        transform: scale(1);
    }
    50% {
        transform: scale(0.97);
    }
    100% {
        transform: scale(1);
    }
}"#,
    animation_class: r#".demo-press-button.animate {
    animation: buttonPress 0.2s cubic-bezier(0.4, 0, 0.2, 1);
}"#,
    extra_js: "",
    demo_styles: r#".demo-press-button {
    display: inline-flex;
    align-items: center;
    gap: 0.75rem;
    padding: 1.25rem 2.5rem;
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    color: white;
    border: none;
    border-radius: 16px;
    font-size: 1.125rem;
    font-weight: 600;
    cursor: pointer;
    box-shadow: 0 4px 20px rgba(102, 126, 234, 0.4);
    transition: box-shadow 0.2s;
}

.demo-press-button:hover {
    box-shadow: 0 6px 24px rgba(102, 126, 234, 0.5);
}"#,
};

pub const SPRING_BOUNCE: Template = Template {
    demo_html: r#"<button class="demo-spring-button">
            <span class="material-icons-round">check_circle</span>
            Success!
        </button>"#,
    keyframes: r#"@keyframes springBounce {
    0%, 100% {
        transform: scale(1);
    }
    25% {
        transform: scale(1.15);
    }
    50% {
        transform: scale(0.95);
    }
    75% {
        transform: scale(1.05);
    }
}"#,
    animation_class: r#".demo-spring-button.animate {
    animation: springBounce 0.6s cubic-bezier(0.34, 1.56, 0.64, 1);
}"#,
    extra_js: "",
    demo_styles: r#".demo-spring-button {
    display: inline-flex;
    align-items: center;
    gap: 0.75rem;
    padding: 1.25rem 2.5rem;
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    color: white;
    border: none;
    border-radius: 16px;
    font-size: 1.125rem;
    font-weight: 600;
    cursor: pointer;
    box-shadow: 0 4px 20px rgba(102, 126, 234, 0.4);
}"#,
};

pub const SWITCH_TOGGLE: Template = Template {
    demo_html: r#"<div class="toggle-switch">
            <div class="switch-track">
                <div class="switch-thumb"></div>
            </div>
        </div>"#,
    keyframes: r#"@keyframes toggleOn {
    from {
        transform: translateX(0);
    }
    to {
        transform: translateX(28px);
    }
}

@keyframes trackColorChange {
    from {
        background: rgba(0, 0, 0, 0.1);
    }
    to {
        background: #667eea;
    }
}"#,
    animation_class: r#".switch-thumb.animate {
    animation: toggleOn 0.3s cubic-bezier(0.4, 0, 0.2, 1) forwards;
}

.switch-track.animate {
    animation: trackColorChange 0.3s ease-out forwards;
}"#,
    extra_js: r#"
        // Animate track too
        const track = document.querySelector('.switch-track');
        if (track) {
            playBtn.addEventListener('click', () => {
                track.classList.remove('animate');
                void track.offsetWidth;
                track.classList.add('animate');
            });

            window.addEventListener('load', () => {
                setTimeout(() => {
                    track.classList.add('animate');
                }, 300);
            });
        }"#,
    demo_styles: r#".toggle-switch {
    display: flex;
    align-items: center;
    justify-content: center;
}

.switch-track {
    width: 60px;
    height: 32px;
    background: rgba(0, 0, 0, 0.1);
    border-radius: 16px;
    position: relative;
    cursor: pointer;
}

.switch-thumb {
    width: 26px;
    height: 26px;
    background: white;
    border-radius: 50%;
    position: absolute;
    top: 3px;
    left: 3px;
    box-shadow: 0 2px 4px rgba(0, 0, 0, 0.2);
}"#,
};

pub const CHECKBOX_TICK: Template = Template {
    demo_html: r#"<div class="checkbox-demo">
            <svg width="50" height="50" viewBox="0 0 50 50">
                <rect class="checkbox-box" x="5" y="5" width="40" height="40" rx="8" />
                <path class="checkbox-check" d="M15 25 L22 32 L35 18" />
            </svg>
        </div>"#,
    keyframes: r#"@keyframes drawCheck {
    from {
        stroke-dashoffset: 60;
    }
    to {
        stroke-dashoffset: 0;
    }
}

@keyframes fillBox {
    from {
        fill: white;
    }
    to {
        fill: #667eea;
    }
}"#,
    animation_class: r#".checkbox-check.animate {
    animation: drawCheck 0.5s ease-out forwards;
}

.checkbox-box.animate {
    animation: fillBox 0.3s ease-out forwards;
}"#,
    extra_js: r#"
        // Animate both elements
        const checkboxBox = document.querySelector('.checkbox-box');
        const checkboxCheck = document.querySelector('.checkbox-check');

        playBtn.addEventListener('click', () => {
            checkboxBox.classList.remove('animate');
            checkboxCheck.classList.remove('animate');
            void checkboxBox.offsetWidth;
            checkboxBox.classList.add('animate');
            checkboxCheck.classList.add('animate');
        });

        window.addEventListener('load', () => {
            setTimeout(() => {
                checkboxBox.classList.add('animate');
                checkboxCheck.classList.add('animate');
            }, 300);
        });"#,
    demo_styles: r#".checkbox-demo {
    display: flex;
    align-items: center;
    justify-content: center;
}

.checkbox-box {
    fill: white;
    stroke: #667eea;
    stroke-width: 2;
}

.checkbox-check {
    fill: none;
    stroke: white;
    stroke-width: 4;
    stroke-linecap: round;
    stroke-linejoin: round;
    stroke-dasharray: 60;
    stroke-dashoffset: 60;
}"#,
};

pub const BLUR: Template = Template {
    demo_html: r#"<div class="blur-demo-card">
            <div class="blur-content">
                <span class="material-icons-round">blur_on</span>
                <h3>Dynamic Blur</h3>
                <p>Background blurs dynamically</p>
            </div>
        </div>"#,
    keyframes: r#"@keyframes dynamicBlur {
    0%, 100% {
        filter: blur(0px);
        opacity: 1;
    }
    50% {
        filter: blur(12px);
        opacity: 0.8;
    }
}"#,
    animation_class: r#".blur-demo-card.animate {
    animation: dynamicBlur 2s ease-in-out infinite;
}"#,
    extra_js: "",
    demo_styles: r#".blur-demo-card {
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    color: white;
    padding: 3rem 2rem;
    border-radius: 24px;
    width: 300px;
    text-align: center;
}

.blur-content .material-icons-round {
    font-size: 4rem;
    margin-bottom: 1rem;
}

.blur-content h3 {
    margin: 0.5rem 0;
}

.blur-content p {
    margin: 0.5rem 0 0;
    opacity: 0.9;
}"#,
};

pub const LIFT: Template = Template {
    demo_html: r#"<div class="lift-card">
            <span class="material-icons-round">layers</span>
            <h3>Elevation</h3>
            <p>Card lifts with shadow</p>
        </div>"#,
    keyframes: r#"@keyframes elevationLift {
    from {
        transform: translateY(0);
        box-shadow: 0 4px 12px rgba(0, 0, 0, 0.1);
    }
    to {
        transform: translateY(-12px);
        box-shadow: 0 24px 48px rgba(0, 0, 0, 0.25);
    }
}"#,
    animation_class: r#".lift-card.animate {
    animation: elevationLift 0.4s cubic-bezier(0.4, 0, 0.2, 1) forwards;
}"#,
    extra_js: "",
    demo_styles: r#".lift-card {
    background: white;
    padding: 2rem;
    border-radius: 20px;
    width: 250px;
    text-align: center;
    box-shadow: 0 4px 12px rgba(0, 0, 0, 0.1);
}

.lift-card .material-icons-round {
    font-size: 3rem;
    color: #667eea;
    margin-bottom: 1rem;
}

.lift-card h3 {
    margin: 0.5rem 0;
    color: #1c1b1f;
}

.lift-card p {
    margin: 0.5rem 0 0;
    color: #666;
}"#,
};

pub const PULSE: Template = Template {
    demo_html: r#"<div class="pulse-icon">
            <span class="material-icons-round">notifications_active</span>
        </div>"#,
    keyframes: r#"@keyframes pulseEffect {
    0%, 100% {
        transform: scale(1);
        opacity: 1;
    }
    50% {
        transform: scale(1.1);
        opacity: 0.8;
    }
}"#,
    animation_class: r#".pulse-icon.animate {
    animation: pulseEffect 1.5s ease-in-out infinite;
}"#,
    extra_js: "",
    demo_styles: r#".pulse-icon {
    width: 100px;
    height: 100px;
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    color: white;
}

.pulse-icon .material-icons-round {
    font-size: 3rem;
}"#,
};

const FALLBACK_STYLES: &str = r#".demo-box {
    display: flex;
    flex-direction: column;
    align-items: center;
    gap: 1rem;
    padding: 2rem 3rem;
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    color: white;
    border-radius: 16px;
    box-shadow: 0 8px 24px rgba(102, 126, 234, 0.3);
}

.demo-box .material-icons-round {
    font-size: 3rem;
}

.demo-text {
    font-size: 1.25rem;
    font-weight: 600;
}"#;

/// Generic fade and scale-in demo labeled with the animation's name
///
/// The keyframes are named after the name's slug so every fallback page
/// carries its own animation identifier.
pub fn fallback(animation_name: &str) -> Result<DemoConfig> {
    let slug = to_slug(animation_name)?;
    // Keyframe identifiers may not start with a digit or be empty
    let keyframe_name = match slug.chars().next() {
        Some(c) if c.is_ascii_alphabetic() => slug,
        _ => format!("anim-{slug}"),
    };
    let label = escape_html(animation_name);

    Ok(DemoConfig {
        demo_html: format!(
            r#"<div class="demo-box">
            <span class="material-icons-round">animation</span>
            <span class="demo-text">{label}</span>
        </div>"#
        ),
        keyframes: format!(
            r#"@keyframes {keyframe_name} {{
    from {{
        opacity: 0;
        transform: scale(0.95);
    }}
    to {{
        opacity: 1;
        transform: scale(1);
    }}
}}"#
        ),
        animation_class: format!(
            r#".animate {{
    animation: {keyframe_name} 0.5s cubic-bezier(0.4, 0, 0.2, 1);
}}"#
        ),
        extra_js: String::new(),
        demo_styles: FALLBACK_STYLES.to_string(),
    })
}

/// Escapes text for safe inclusion in HTML element content and attributes
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
