use strum::{EnumIter, EnumString};

use crate::{activity::*, element::*, geo::*, id::*, status::*};

/// Closed set of point-of-interest categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum PoiType {
    Park,
    Museum,
    Monument,
    Church,
    Theatre,
    Cinema,
    Restaurant,
    Venue,
}

/// A point of interest within its municipality's territory.
#[derive(Debug, Clone, PartialEq)]
pub struct Poi {
    pub id: Id,
    pub name: String,
    pub coordinate: Coordinate,
    pub poi_type: PoiType,
    pub author: Id,
    pub municipality: Id,
    pub status: ElementStatus,
    pub created: Activity,
    pub contents: Vec<Id>,
}

impl MunicipalElement for Poi {
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
