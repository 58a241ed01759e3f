use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewItinerary {
    pub name: String,
    pub description: String,
    pub pois: Vec<Id>,
    pub author: Id,
}

/// Validates and stages a new itinerary.
///
/// Every POI of the route must already exist in this municipality,
/// staged or published; the route order is preserved verbatim.
pub fn create_new_itinerary(catalog: &MunicipalCatalog, new_itinerary: NewItinerary) -> Result<Id> {
    let NewItinerary {
        name,
        description,
        pois,
        author,
    } = new_itinerary;
    let author = authorize_actor(catalog, &author, Capability::Propose)?;
    validate::element_name(&name)?;
    if !validate::is_non_empty_text(&description) {
        return Err(Error::Description);
    }
    if pois.is_empty() {
        return Err(Error::EmptyRoute);
    }
    for poi_id in &pois {
        if !catalog.contains_poi(poi_id) {
            return Err(Error::PoiReference);
        }
    }
    let self_publish = author.role.grants(Capability::SelfPublish);
    let itinerary = Itinerary {
        id: Id::new(),
        name,
        description,
        route: pois,
        author: author.id.clone(),
        municipality: catalog.id().clone(),
        status: ElementStatus::Pending,
        created: Activity::now(Some(author.id)),
        contents: vec![],
    };
    let id = if self_publish {
        let id = catalog.publish_itinerary(itinerary)?;
        log::debug!("Published itinerary {id} directly for a trusted author");
        id
    } else {
        let id = catalog.propose_itinerary(itinerary)?;
        log::debug!("Staged itinerary {id} for review");
        id
    };
    Ok(id)
}
