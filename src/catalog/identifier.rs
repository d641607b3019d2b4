use crate::error::GetError;
use std::fmt;

/// A validated catalog identifier (Steam app id). Only ASCII digits, never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    pub fn parse(raw: &str) -> Result<Self, GetError> {
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(raw.to_string()))
        } else {
            Err(GetError::InvalidIdentifier(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_digits() {
        assert_eq!(Identifier::parse("440").unwrap().as_str(), "440");
        assert_eq!(Identifier::parse("0").unwrap().to_string(), "0");
    }

    #[test]
    fn rejects_everything_else() {
        for bad in ["", " 440", "44a", "-1", "1.5", "٣", "730/../x"] {
            assert!(
                matches!(Identifier::parse(bad), Err(GetError::InvalidIdentifier(_))),
                "expected rejection for {bad:?}"
            );
        }
    }
}
