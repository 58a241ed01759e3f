#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # muni-entities
//!
//! Reusable, agnostic domain entities for the municipal content backend.
//!
//! The entities only contain generic functionality and construction-time
//! invariants that do not reveal any application-specific business logic.

pub mod activity;
pub mod content;
pub mod element;
pub mod geo;
pub mod id;
pub mod itinerary;
pub mod municipality;
pub mod password;
pub mod poi;
pub mod status;
pub mod time;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
