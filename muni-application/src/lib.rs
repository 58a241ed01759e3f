//! # muni-application
//!
//! Application flows: each flow pairs an in-memory catalog mutation
//! with the corresponding persistence calls. Callers own the
//! transaction boundary around a flow.

#[macro_use]
extern crate log;

mod moderate_element;
mod onboard_municipality;
mod register_user;
mod upload_content;
mod upload_itinerary;
mod upload_poi;

pub mod prelude {
    pub use super::{
        moderate_element::*, onboard_municipality::*, register_user::*, upload_content::*,
        upload_itinerary::*, upload_poi::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use self::error::AppError;
pub(crate) use muni_core::{
    catalog::{Element, ElementKind, MunicipalCatalog},
    entities::*,
    repositories::*,
    usecases,
};

#[cfg(test)]
pub(crate) mod tests;
