use crate::{
    geo::{Coordinate, Territory, TerritoryError},
    id::Id,
};

/// Root record of a municipality.
///
/// Created once at onboarding and never deleted. The mutable element
/// collections live in the per-municipality catalog, not here.
#[derive(Debug, Clone, PartialEq)]
pub struct Municipality {
    pub id: Id,
    pub name: String,
    pub territory: Territory,
}

impl Municipality {
    pub fn new(
        name: impl Into<String>,
        territory: Vec<Coordinate>,
    ) -> Result<Self, TerritoryError> {
        Ok(Self {
            id: Id::new(),
            name: name.into(),
            territory: Territory::new(territory)?,
        })
    }
}
