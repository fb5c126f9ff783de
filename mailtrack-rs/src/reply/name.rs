//! Greeting name derivation from sender addresses

use crate::utils::email::local_part;

/// Derive a display name from an email address's local part
///
/// `john.doe@example.com` becomes `John Doe`. Addresses without an `@`
/// fall back to the literal `"there"`, so a greeting always reads
/// naturally ("Hi there,").
pub fn extract_name(email: &str) -> String {
    let Some(local) = local_part(email) else {
        return "there".to_string();
    };

    let words = local.replace(['.', '_', '-'], " ").to_lowercase();

    words
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dotted_local_part() {
        assert_eq!(extract_name("john.doe@example.com"), "John Doe");
    }

    #[test]
    fn test_mixed_separators() {
        assert_eq!(extract_name("A_B-c@x.com"), "A B C");
    }

    #[test]
    fn test_fallback_without_at() {
        assert_eq!(extract_name(""), "there");
        assert_eq!(extract_name("no-at-sign"), "there");
    }

    #[test]
    fn test_empty_local_part() {
        assert_eq!(extract_name("@example.com"), "");
    }

    #[test]
    fn test_single_word() {
        assert_eq!(extract_name("ALICE@example.com"), "Alice");
    }

    #[test]
    fn test_consecutive_separators() {
        assert_eq!(extract_name("jane..doe@example.com"), "Jane Doe");
    }
}
