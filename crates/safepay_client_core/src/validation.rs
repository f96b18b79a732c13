//! Client-side form checks. These only block obviously bad input before a request
//! is made; the server remains the authority.

use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self { field, message: message.into() }
    }
}

pub fn validate_not_empty(value: &str, field: &'static str, label: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new(field, format!("{} is required", label)))
    } else {
        Ok(())
    }
}

/// `local@domain.tld` with no whitespace. Deliberately loose.
pub fn validate_email(email: &str, field: &'static str) -> Result<(), ValidationError> {
    let email = email.trim();
    let invalid = || ValidationError::new(field, "Please enter a valid email address");
    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) if !host.is_empty() && !tld.is_empty() => Ok(()),
        _ => Err(invalid()),
    }
}

/// At least 8 characters with one uppercase and one lowercase letter.
pub fn validate_password(password: &str, field: &'static str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::new(
            field,
            format!("Password must be at least {} characters", MIN_PASSWORD_LEN),
        ));
    }
    if !password.chars().any(char::is_uppercase) {
        return Err(ValidationError::new(field, "Password must contain an uppercase letter"));
    }
    if !password.chars().any(char::is_lowercase) {
        return Err(ValidationError::new(field, "Password must contain a lowercase letter"));
    }
    Ok(())
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignupForm {
    pub first_name: String,
    pub last_name: String,
    /// The service uses the email address as the username.
    pub username: String,
    pub password: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_not_empty(&self.first_name, "first_name", "First name")?;
        validate_not_empty(&self.last_name, "last_name", "Last name")?;
        validate_not_empty(&self.username, "username", "Email")?;
        validate_email(&self.username, "username")?;
        validate_password(&self.password, "password")
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SigninForm {
    pub username: String,
    pub password: String,
}

impl SigninForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_not_empty(&self.username, "username", "Email")?;
        validate_email(&self.username, "username")?;
        if self.password.is_empty() {
            return Err(ValidationError::new("password", "Password is required"));
        }
        Ok(())
    }
}
