//! Postal code type.

use std::fmt;

use super::error::ValidationError;

/// A German postal code: exactly five ASCII digits.
///
/// The value is interpolated into the provider URL, so anything else is
/// rejected at the boundary.
///
/// # Examples
///
/// ```
/// use pollen_server::domain::PostalCode;
///
/// let plz = PostalCode::parse("53797").unwrap();
/// assert_eq!(plz.as_str(), "53797");
///
/// assert!(PostalCode::parse("5379").is_err());
/// assert!(PostalCode::parse("53797&x=1").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostalCode([u8; 5]);

impl PostalCode {
    /// Parse a postal code. Surrounding whitespace is not accepted.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let bytes: [u8; 5] = s
            .as_bytes()
            .try_into()
            .map_err(|_| ValidationError::PostalCode(s.to_string()))?;

        if !bytes.iter().all(u8::is_ascii_digit) {
            return Err(ValidationError::PostalCode(s.to_string()));
        }

        Ok(PostalCode(bytes))
    }

    /// Returns the postal code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII digits are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Debug for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PostalCode({})", self.as_str())
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid() {
        assert!(PostalCode::parse("53797").is_ok());
        assert!(PostalCode::parse("01067").is_ok());
        assert!(PostalCode::parse("99999").is_ok());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(PostalCode::parse("").is_err());
        assert!(PostalCode::parse("1234").is_err());
        assert!(PostalCode::parse("123456").is_err());
    }

    #[test]
    fn reject_non_digits() {
        assert!(PostalCode::parse("5379a").is_err());
        assert!(PostalCode::parse(" 5379").is_err());
        assert!(PostalCode::parse("53-97").is_err());
        assert!(PostalCode::parse("5379٣").is_err());
    }

    #[test]
    fn display_and_debug() {
        let plz = PostalCode::parse("01067").unwrap();
        assert_eq!(plz.to_string(), "01067");
        assert_eq!(format!("{plz:?}"), "PostalCode(01067)");
    }
}
