//! Required-field checks run before anything is sent to the backend.

use api::RegisterRequest;

fn required(value: &str, label: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{label} is required"))
    } else {
        Ok(())
    }
}

fn check_email(email: &str) -> Result<(), String> {
    required(email, "Email")?;
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err("Please enter a valid email".to_string()),
    }
}

pub fn check_login(email: &str, password: &str) -> Result<(), String> {
    check_email(email)?;
    required(password, "Password")
}

/// Check a registration form. `confirm` must repeat the password.
pub fn check_registration(request: &RegisterRequest, confirm: &str) -> Result<(), String> {
    required(&request.name, "Name")?;
    check_email(&request.email)?;
    required(&request.phone, "Phone number")?;
    required(&request.password, "Password")?;
    if request.password != confirm {
        return Err("Passwords do not match".to_string());
    }
    Ok(())
}
