//! Input validation for registration and login

use regex::Regex;
use std::sync::OnceLock;

/// Validate a login name
pub fn validate_login_name(login_name: &str) -> Result<(), String> {
    if login_name.is_empty() {
        return Err("Login name is required".to_string());
    }

    if login_name.len() < 3 {
        return Err("Login name must be at least 3 characters long".to_string());
    }

    if login_name.len() > 32 {
        return Err("Login name must be at most 32 characters long".to_string());
    }

    static LOGIN_NAME_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex = LOGIN_NAME_REGEX.get_or_init(|| {
        Regex::new(r"^[a-z0-9_]+$").expect("Failed to compile login name regex")
    });

    if !regex.is_match(login_name) {
        return Err(
            "Login name can only contain lowercase letters, numbers, and underscores".to_string(),
        );
    }

    Ok(())
}

/// Validate a password
pub fn validate_password(password: &str) -> Result<(), String> {
    if password.is_empty() {
        return Err("Password is required".to_string());
    }

    if password.len() < 8 {
        return Err("Password must be at least 8 characters long".to_string());
    }

    if password.len() > 128 {
        return Err("Password must be at most 128 characters long".to_string());
    }

    Ok(())
}

/// Validate a profile name field (first or last name)
pub fn validate_name(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} is required", field));
    }

    if value.len() > 64 {
        return Err(format!("{} must be at most 64 characters long", field));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_name_rules() {
        assert!(validate_login_name("ianmalcolm").is_ok());
        assert!(validate_login_name("user_42").is_ok());

        assert!(validate_login_name("").is_err());
        assert!(validate_login_name("ab").is_err());
        assert!(validate_login_name("Has Spaces").is_err());
        assert!(validate_login_name("UPPER").is_err());
        assert!(validate_login_name(&"a".repeat(33)).is_err());
    }

    #[test]
    fn test_password_rules() {
        assert!(validate_password("correct horse").is_ok());

        assert!(validate_password("").is_err());
        assert!(validate_password("short").is_err());
        assert!(validate_password(&"p".repeat(129)).is_err());
    }

    #[test]
    fn test_name_rules() {
        assert!(validate_name("First name", "Ellen").is_ok());
        assert!(validate_name("First name", "  ").is_err());
        assert!(validate_name("Last name", &"x".repeat(65)).is_err());
    }
}
