//! Shared utility functions for code generation.

/// Lowercase the first character (e.g., "UserProfile" -> "userProfile").
///
/// Prisma client delegates are named this way, so `context.prisma.userProfile`
/// is derived from the model name `UserProfile`.
pub fn first_letter_lowercase(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Check whether a string is usable as a bare JavaScript identifier.
pub fn is_js_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_letter_lowercase() {
        assert_eq!(first_letter_lowercase("User"), "user");
        assert_eq!(first_letter_lowercase("UserProfile"), "userProfile");
        assert_eq!(first_letter_lowercase("user"), "user");
        assert_eq!(first_letter_lowercase("A"), "a");
        assert_eq!(first_letter_lowercase(""), "");
    }

    #[test]
    fn test_is_js_identifier() {
        assert!(is_js_identifier("User"));
        assert!(is_js_identifier("_private"));
        assert!(is_js_identifier("$all"));
        assert!(is_js_identifier("post2"));
        assert!(!is_js_identifier("2post"));
        assert!(!is_js_identifier("user-profile"));
        assert!(!is_js_identifier(""));
    }
}
