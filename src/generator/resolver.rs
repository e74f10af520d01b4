//! # Config Resolver
//!
//! Maps an animation's free-text name to a demo template using an ordered
//! decision list. The name is lower-cased and tested against each rule's
//! keyword matcher in declaration order; the first match wins and unmatched
//! names receive the generic fallback.
//!
//! Rules are not mutually exclusive. Multi-keyword rules must stay ahead of
//! any broader rule whose keywords they contain, otherwise the broader rule
//! would claim names meant for the specific template.

use anyhow::Result;

use crate::generator::templates::{self, Template};
use crate::generator::DemoConfig;

/// Keyword predicate over a lower-cased animation name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// Every keyword must appear as a substring
    All(&'static [&'static str]),
    /// At least one nested matcher must match
    AnyOf(&'static [Matcher]),
}

impl Matcher {
    pub fn matches(&self, lowered_name: &str) -> bool {
        match self {
            Matcher::All(keywords) => keywords.iter().all(|k| lowered_name.contains(k)),
            Matcher::AnyOf(matchers) => matchers.iter().any(|m| m.matches(lowered_name)),
        }
    }
}

/// One entry of the decision list
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub id: &'static str,
    pub matcher: Matcher,
    pub template: &'static Template,
}

/// The decision list, evaluated top to bottom
pub static RULES: &[Rule] = &[
    Rule {
        id: "navigation-push-pop",
        matcher: Matcher::All(&["navigation push/pop slide"]),
        template: &templates::NAVIGATION_PUSH_POP,
    },
    Rule {
        id: "parallax",
        matcher: Matcher::All(&["parallax"]),
        template: &templates::PARALLAX,
    },
    Rule {
        id: "modal-sheet-slide",
        matcher: Matcher::All(&["modal", "sheet", "slide"]),
        template: &templates::MODAL_SHEET_SLIDE,
    },
    Rule {
        id: "button-press-squish",
        matcher: Matcher::All(&["button", "press", "squish"]),
        template: &templates::BUTTON_PRESS_SQUISH,
    },
    Rule {
        id: "spring-bounce",
        matcher: Matcher::AnyOf(&[Matcher::All(&["spring"]), Matcher::All(&["bounce", "button"])]),
        template: &templates::SPRING_BOUNCE,
    },
    Rule {
        id: "switch-toggle",
        matcher: Matcher::All(&["switch", "toggle"]),
        template: &templates::SWITCH_TOGGLE,
    },
    Rule {
        id: "checkbox-tick",
        matcher: Matcher::All(&["checkbox", "tick"]),
        template: &templates::CHECKBOX_TICK,
    },
    Rule {
        id: "blur",
        matcher: Matcher::AnyOf(&[Matcher::All(&["blur"]), Matcher::All(&["liquid blur"])]),
        template: &templates::BLUR,
    },
    Rule {
        id: "lift",
        matcher: Matcher::AnyOf(&[Matcher::All(&["lift"]), Matcher::All(&["elevation"])]),
        template: &templates::LIFT,
    },
    Rule {
        id: "pulse",
        matcher: Matcher::All(&["pulse"]),
        template: &templates::PULSE,
    },
];

/// Identifier reported for names that no rule matches
pub const FALLBACK_ID: &str = "fallback";

/// Outcome of resolving one animation name
#[derive(Debug, Clone)]
pub struct Resolution {
    /// The winning rule, or `None` when the fallback was used
    pub rule: Option<&'static Rule>,
    pub config: DemoConfig,
}

impl Resolution {
    pub fn rule_id(&self) -> &'static str {
        self.rule.map_or(FALLBACK_ID, |r| r.id)
    }
}

/// Every rule matching `name`, in evaluation order
pub fn matching_rules(name: &str) -> Vec<&'static Rule> {
    let lowered = name.to_lowercase();
    RULES.iter().filter(|r| r.matcher.matches(&lowered)).collect()
}

/// Resolve `name` to its demo configuration
///
/// Every name resolves: names no rule matches get the generic fallback. The
/// category does not influence selection.
pub fn resolve(name: &str, _category: &str) -> Result<Resolution> {
    let lowered = name.to_lowercase();

    let resolution = match RULES.iter().find(|r| r.matcher.matches(&lowered)) {
        Some(rule) => Resolution {
            rule: Some(rule),
            config: rule.template.to_config(),
        },
        None => Resolution {
            rule: None,
            config: templates::fallback(name)?,
        },
    };
    Ok(resolution)
}

/// Convenience wrapper returning only the configuration
pub fn resolve_config(name: &str, category: &str) -> Result<DemoConfig> {
    Ok(resolve(name, category)?.config)
}
