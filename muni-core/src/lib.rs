//! # muni-core
//!
//! Domain core of the municipal content backend.
//!
//! The centre piece is the [`catalog::MunicipalCatalog`]: the
//! per-municipality staging area for proposed elements together with
//! the published collections that approved elements are released into.
//! The [`usecases`] layer adds validation and authorization on top,
//! and [`repositories`] defines the persistence boundary.

pub mod catalog;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use muni_entities::{
        activity::*, content::*, element::*, geo::*, id::*, itinerary::*, municipality::*,
        password::*, poi::*, status::*, time::*, user::*,
    };
}
