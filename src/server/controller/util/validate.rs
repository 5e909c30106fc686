use crate::server::error::Error;

/// Trims a required string field, rejecting missing-in-practice values.
pub fn require_trimmed(value: &str, field: &'static str) -> Result<String, Error> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(Error::Validation(format!("{} is required", field)));
    }

    Ok(trimmed.to_string())
}

/// Checks an enumerated field against its allowed values.
pub fn require_one_of(value: &str, allowed: &[&str], field: &'static str) -> Result<(), Error> {
    if !allowed.contains(&value) {
        return Err(Error::Validation(format!("invalid {}", field)));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{require_one_of, require_trimmed};

    #[test]
    fn test_require_trimmed_strips_whitespace() {
        assert_eq!(require_trimmed("  Acme ", "name").unwrap(), "Acme");
        assert!(require_trimmed("   ", "name").is_err());
    }

    #[test]
    fn test_require_one_of() {
        assert!(require_one_of("Bois", &["Bois", "Fer"], "type").is_ok());
        assert!(require_one_of("Verre", &["Bois", "Fer"], "type").is_err());
    }
}
