use crate::error::{Result, TrackError};

/// Basic email validation
pub fn validate_email(email: &str) -> Result<()> {
    if email.is_empty() {
        return Err(TrackError::Validation("Email is empty".to_string()));
    }

    if !email.contains('@') {
        return Err(TrackError::Validation(
            "Email must contain @".to_string(),
        ));
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return Err(TrackError::Validation("Invalid email format".to_string()));
    }

    let local = parts[0];
    let domain = parts[1];

    if local.is_empty() || domain.is_empty() {
        return Err(TrackError::Validation(
            "Email parts cannot be empty".to_string(),
        ));
    }

    if !domain.contains('.') {
        return Err(TrackError::Validation(
            "Domain must contain a dot".to_string(),
        ));
    }

    Ok(())
}

/// The portion of an address before the first `@`, if any
pub fn local_part(email: &str) -> Option<&str> {
    email.split_once('@').map(|(local, _)| local)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(validate_email("test@example.com").is_ok());
        assert!(validate_email("user.name@example.co.uk").is_ok());
    }

    #[test]
    fn test_invalid_email() {
        assert!(validate_email("").is_err());
        assert!(validate_email("test").is_err());
        assert!(validate_email("test@").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("test@domain").is_err());
    }

    #[test]
    fn test_local_part() {
        assert_eq!(local_part("john.doe@example.com"), Some("john.doe"));
        assert_eq!(local_part("no-at-sign"), None);
        assert_eq!(local_part("@example.com"), Some(""));
    }
}
