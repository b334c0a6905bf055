//! Input validation helpers
//!
//! Centralized field validation for the CRUD handlers. Every check here
//! runs before any store access, so a rejected payload leaves no
//! partial side effects.

use crate::utils::AppError;

/// Notes, delivery descriptions
pub const MAX_NOTE_LEN: usize = 500;

/// Display names
pub const MAX_NAME_LEN: usize = 200;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MAX_PASSWORD_LEN: usize = 128;

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate a user display name (trimmed, at least 2 characters).
pub fn validate_name(name: &str) -> Result<(), AppError> {
    if name.trim().chars().count() < 2 {
        return Err(AppError::validation(
            "Name must be at least 2 characters".to_string(),
        ));
    }
    if name.len() > MAX_NAME_LEN {
        return Err(AppError::validation(format!(
            "Name is too long (max {MAX_NAME_LEN})"
        )));
    }
    Ok(())
}

/// Shallow email shape check: local part, one '@', dotted domain.
pub fn validate_email(email: &str) -> Result<(), AppError> {
    let valid = email.len() <= MAX_EMAIL_LEN
        && email
            .split_once('@')
            .is_some_and(|(local, domain)| {
                !local.is_empty()
                    && domain.contains('.')
                    && !domain.starts_with('.')
                    && !domain.ends_with('.')
                    && !domain.contains('@')
            });
    if !valid {
        return Err(AppError::validation("Invalid email address".to_string()));
    }
    Ok(())
}

/// Password policy: length, uppercase, digit, special character.
/// Each rule reports its own message so the client can explain the failure.
pub fn validate_password(password: &str) -> Result<(), AppError> {
    if password.len() < 8 {
        return Err(AppError::validation(
            "Password must be at least 8 characters".to_string(),
        ));
    }
    if password.len() > MAX_PASSWORD_LEN {
        return Err(AppError::validation(format!(
            "Password is too long (max {MAX_PASSWORD_LEN})"
        )));
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(AppError::validation(
            "Password must contain at least one uppercase letter".to_string(),
        ));
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(AppError::validation(
            "Password must contain at least one number".to_string(),
        ));
    }
    if password.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AppError::validation(
            "Password must contain at least one special character".to_string(),
        ));
    }
    Ok(())
}
