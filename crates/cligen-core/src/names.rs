//! Package and command name validation

use crate::error::{Error, Result};

/// Normalize a command name to camelCase and validate it.
///
/// Words separated by `-` or `_` are joined with the first letter of each
/// following word upper-cased: `serve-http` becomes `serveHttp`. The result
/// must be a non-empty identifier that does not start with a digit.
pub fn command_name(input: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_name(input, "command name must not be empty"));
    }

    let mut words = trimmed.split(['-', '_']).filter(|w| !w.is_empty());
    let mut name = words.next().unwrap_or_default().to_string();
    for word in words {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            name.extend(first.to_uppercase());
            name.push_str(chars.as_str());
        }
    }

    if name.is_empty() {
        return Err(Error::invalid_name(input, "command name has no letters"));
    }
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(Error::invalid_name(input, "command name must not start with a digit"));
    }
    if let Some(bad) = name.chars().find(|c| !c.is_alphanumeric()) {
        return Err(Error::invalid_name(
            input,
            format!("invalid character {:?} in command name", bad),
        ));
    }
    Ok(name)
}

/// Validate a package / module name
pub fn package_name(input: &str) -> Result<&str> {
    let name = input.trim();
    if name.is_empty() {
        return Err(Error::invalid_name(input, "package name must not be empty"));
    }
    if name.chars().any(char::is_whitespace) {
        return Err(Error::invalid_name(input, "package name must not contain whitespace"));
    }
    if name.starts_with('/') || name.ends_with('/') || name.contains("//") {
        return Err(Error::invalid_name(input, "package name has an empty path segment"));
    }
    Ok(name)
}
