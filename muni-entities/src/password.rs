use std::str::FromStr;

use pwhash::bcrypt;
use thiserror::Error;

/// Hashed credential, opaque to all business logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Password(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid password")]
pub struct ParseError;

impl Password {
    const MIN_LEN: usize = 6;

    /// Wraps an already hashed credential, e.g. loaded from a store.
    pub fn from_hash(hash: String) -> Self {
        Self(hash)
    }

    pub fn verify(&self, password: &str) -> bool {
        bcrypt::verify(password, &self.0)
    }
}

impl FromStr for Password {
    type Err = ParseError;
    fn from_str(password: &str) -> Result<Self, Self::Err> {
        if password.len() < Self::MIN_LEN {
            return Err(ParseError);
        }
        bcrypt::hash(password).map(Self).map_err(|_| ParseError)
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
