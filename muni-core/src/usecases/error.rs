use thiserror::Error;

use crate::{catalog, util::validate::NameInvalidation};
use muni_entities::{content::ContentRefError, geo::TerritoryError, password};

#[derive(Debug, Error)]
pub enum Error {
    #[error("The name must be between 3 and 25 characters")]
    Name,
    #[error("The name must not contain special characters")]
    NameCharacters,
    #[error("The description must not be empty")]
    Description,
    #[error("The payload must not be empty")]
    Payload,
    #[error("Invalid URL")]
    Url,
    #[error("The coordinate lies outside the territory of the municipality")]
    OutsideTerritory,
    #[error("An itinerary requires at least one POI")]
    EmptyRoute,
    #[error("The route refers to an unknown POI")]
    PoiReference,
    #[error("The referred municipal element does not exist")]
    ElementReference,
    #[error(transparent)]
    ContentReferent(#[from] ContentRefError),
    #[error(transparent)]
    Territory(#[from] TerritoryError),
    #[error("The user already exists")]
    UserExists,
    #[error("The user does not exist")]
    UserDoesNotExist,
    #[error("Invalid password")]
    Password,
    #[error("This is not allowed")]
    Forbidden,
    #[error(transparent)]
    Catalog(#[from] catalog::Error),
}

impl From<NameInvalidation> for Error {
    fn from(err: NameInvalidation) -> Self {
        match err {
            NameInvalidation::Length => Self::Name,
            NameInvalidation::Characters => Self::NameCharacters,
        }
    }
}

impl From<password::ParseError> for Error {
    fn from(_: password::ParseError) -> Self {
        Self::Password
    }
}

impl From<url::ParseError> for Error {
    fn from(_: url::ParseError) -> Self {
        Self::Url
    }
}
