use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive, ToPrimitive};
use strum::{EnumCount, EnumIter, EnumString};
use thiserror::Error;

/// Storage representation of [`ElementStatus`].
pub type ElementStatusPrimitive = i16;

/// Lifecycle of a municipal element.
///
/// The only transitions are `Pending -> Published` and
/// `Pending -> Rejected`; both target states are terminal.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, FromPrimitive, ToPrimitive, EnumIter, EnumCount, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum ElementStatus {
    Rejected  = -1,
    Pending   =  0,
    Published =  1,
}

impl ElementStatus {
    pub fn is_visible(self) -> bool {
        self == Self::Published
    }

    pub const fn default() -> Self {
        Self::Pending
    }
}

#[derive(Debug, Error)]
#[error("Invalid element status primitive: {0}")]
pub struct InvalidElementStatusPrimitive(ElementStatusPrimitive);

impl TryFrom<ElementStatusPrimitive> for ElementStatus {
    type Error = InvalidElementStatusPrimitive;
    fn try_from(from: ElementStatusPrimitive) -> Result<Self, Self::Error> {
        Self::from_i16(from).ok_or(InvalidElementStatusPrimitive(from))
    }
}

impl From<ElementStatus> for ElementStatusPrimitive {
    fn from(from: ElementStatus) -> Self {
        from.to_i16().expect("Element status primitive")
    }
}
