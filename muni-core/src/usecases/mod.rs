mod authorize;
mod create_municipality;
mod create_new_content;
mod create_new_itinerary;
mod create_new_poi;
mod error;
mod list_pending;
mod moderate_element;
mod register_new_user;


pub use self::{
    authorize::*, create_municipality::*, create_new_content::*, create_new_itinerary::*,
    create_new_poi::*, error::Error, list_pending::*, moderate_element::*, register_new_user::*,
};

mod prelude {
    pub use super::authorize::authorize_actor;
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        catalog::{Element, ElementKind, MunicipalCatalog},
        entities::*,
        util::validate,
    };
}
