use crate::error::InputError;
use crate::storage::config::Profile;
use std::io::Write;

/// Environment variable consulted before falling back to an interactive
/// prompt. Keeps the password out of process arguments.
pub const PASSWORD_ENV: &str = "AVSTAT_DB_PASSWORD";

/// Resolve the database password for a profile: the profile value wins, then
/// the environment, then an interactive hidden prompt.
pub fn resolve_password(profile: &Profile) -> Result<String, InputError> {
    if let Some(password) = &profile.password {
        return Ok(password.clone());
    }

    if let Ok(password) = std::env::var(PASSWORD_ENV) {
        if !password.is_empty() {
            return Ok(password);
        }
    }

    prompt_password(profile)
}

fn prompt_password(profile: &Profile) -> Result<String, InputError> {
    print!("Password for {}@{}: ", profile.user, profile.host);
    std::io::stdout().flush()?;
    let password = rpassword::read_password()?;
    Ok(password.trim().to_string())
}
