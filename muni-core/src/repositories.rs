// Low-level persistence traits.
// Each repository is responsible for a single entity kind and its
// relationships. Related entities are only referenced by their id and
// never modified or loaded by another repository. Every record carries
// its status and the id of its owning municipality, so both the
// staging and the published view can be reconstructed from one table
// per entity kind plus a status filter.

use std::io;

use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait PoiRepo {
    fn create_poi(&self, poi: &Poi) -> Result<()>;
    fn update_poi(&self, poi: &Poi) -> Result<()>;
    fn get_poi(&self, id: &Id) -> Result<Poi>;
    fn pois_by_status(&self, status: ElementStatus) -> Result<Vec<Poi>>;
}

pub trait ItineraryRepo {
    fn create_itinerary(&self, itinerary: &Itinerary) -> Result<()>;
    fn update_itinerary(&self, itinerary: &Itinerary) -> Result<()>;
    fn get_itinerary(&self, id: &Id) -> Result<Itinerary>;
    fn itineraries_by_status(&self, status: ElementStatus) -> Result<Vec<Itinerary>>;
}

pub trait ContentRepo {
    fn create_content(&self, content: &Content) -> Result<()>;
    fn update_content(&self, content: &Content) -> Result<()>;
    fn get_content(&self, id: &Id) -> Result<Content>;
    fn contents_by_status(&self, status: ElementStatus) -> Result<Vec<Content>>;
}

pub trait UserRepo {
    fn create_user(&self, user: &User) -> Result<()>;
    fn get_user(&self, id: &Id) -> Result<User>;
    fn all_users(&self) -> Result<Vec<User>>;
}

pub trait MunicipalityRepo {
    fn create_municipality(&self, municipality: &Municipality) -> Result<()>;
    fn get_municipality(&self, id: &Id) -> Result<Municipality>;
}

pub trait Db: PoiRepo + ItineraryRepo + ContentRepo + UserRepo + MunicipalityRepo {}
