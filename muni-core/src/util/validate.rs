use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

pub const MIN_NAME_LEN: usize = 3;
pub const MAX_NAME_LEN: usize = 25;

lazy_static! {
    // Alphanumerics, spaces, apostrophes and hyphens. Everything else
    // counts as a special character.
    static ref NAME_CHARS: Regex =
        Regex::new(r"^[A-Za-z0-9' -]+$").expect("valid name regex");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NameInvalidation {
    #[error("The name must be between {MIN_NAME_LEN} and {MAX_NAME_LEN} characters")]
    Length,
    #[error("The name must not contain special characters")]
    Characters,
}

pub fn element_name(name: &str) -> Result<(), NameInvalidation> {
    let len = name.chars().count();
    if !(MIN_NAME_LEN..=MAX_NAME_LEN).contains(&len) || name.trim().is_empty() {
        return Err(NameInvalidation::Length);
    }
    if !NAME_CHARS.is_match(name) {
        return Err(NameInvalidation::Characters);
    }
    Ok(())
}

pub fn is_non_empty_text(text: &str) -> bool {
    !text.trim().is_empty()
}
