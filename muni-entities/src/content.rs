use strum::{EnumIter, EnumString};
use thiserror::Error;

use crate::{activity::*, id::*, status::*};

/// How the payload string of a content is to be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum ContentType {
    Description,
    Link,
    Photo,
}

/// The single municipal element a content is attached to.
///
/// Exactly one referent exists by construction; a content referring to
/// both a POI and an itinerary, or to neither, is unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContentRef {
    Poi(Id),
    Itinerary(Id),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContentRefError {
    #[error("A content must refer to a POI or an itinerary")]
    MissingReferent,
    #[error("A content must not refer to both a POI and an itinerary")]
    AmbiguousReferent,
}

impl ContentRef {
    /// Builds the referent from the optional ids of an incoming
    /// request, rejecting zero or two referents.
    pub fn from_options(
        poi: Option<Id>,
        itinerary: Option<Id>,
    ) -> Result<Self, ContentRefError> {
        match (poi, itinerary) {
            (Some(id), None) => Ok(Self::Poi(id)),
            (None, Some(id)) => Ok(Self::Itinerary(id)),
            (None, None) => Err(ContentRefError::MissingReferent),
            (Some(_), Some(_)) => Err(ContentRefError::AmbiguousReferent),
        }
    }

    pub fn element_id(&self) -> &Id {
        match self {
            Self::Poi(id) | Self::Itinerary(id) => id,
        }
    }
}

/// User-submitted content attached to a POI or an itinerary.
#[derive(Debug, Clone, PartialEq)]
pub struct Content {
    pub id: Id,
    pub name: String,
    pub content_type: ContentType,
    pub payload: String,
    pub author: Id,
    pub municipality: Id,
    pub status: ElementStatus,
    pub created: Activity,
    pub referred_to: ContentRef,
}
