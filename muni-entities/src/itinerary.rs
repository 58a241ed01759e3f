use crate::{activity::*, element::*, id::*, status::*};

/// An ordered route through the POIs of a single municipality.
///
/// The order of `route` is semantically meaningful and must survive
/// every state transition unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub route: Vec<Id>,
    pub author: Id,
    pub municipality: Id,
    pub status: ElementStatus,
    pub created: Activity,
    pub contents: Vec<Id>,
}

impl MunicipalElement for Itinerary {
    fn id(&self) -> &Id {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn status(&self) -> ElementStatus {
        self.status
    }

    fn attach_content(&mut self, content_id: Id) {
        if !self.contents.contains(&content_id) {
            self.contents.push(content_id);
        }
    }

    fn content_ids(&self) -> &[Id] {
        &self.contents
    }
}
