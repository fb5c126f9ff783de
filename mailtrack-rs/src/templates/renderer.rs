//! Template rendering with placeholder substitution

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;

/// A `{placeholder}` token: braces around one-or-more non-`}` characters
static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{([^}]+)\}").unwrap());

/// Fills `{placeholder}` tokens in template bodies
pub struct TemplateRenderer;

impl TemplateRenderer {
    /// Substitute placeholder tokens from a variable map
    ///
    /// Tokens are found in a single left-to-right, non-overlapping scan.
    /// A token whose name is missing from the map is emitted verbatim,
    /// braces included. Replacement values are inserted literally and are
    /// never re-scanned, so a value containing braces does not expand.
    pub fn substitute(template: &str, variables: &HashMap<String, String>) -> String {
        if variables.is_empty() {
            return template.to_string();
        }

        PLACEHOLDER
            .replace_all(template, |caps: &Captures| {
                variables
                    .get(&caps[1])
                    .cloned()
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }

    /// Distinct placeholder names found in a template body
    pub fn placeholders(template: &str) -> Vec<String> {
        let mut names: Vec<String> = PLACEHOLDER
            .captures_iter(template)
            .map(|caps| caps[1].to_string())
            .collect();

        names.sort();
        names.dedup();
        names
    }
}
