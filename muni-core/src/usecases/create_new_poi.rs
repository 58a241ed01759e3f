use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewPoi {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub poi_type: PoiType,
    pub author: Id,
}

/// Validates and stages a new POI.
///
/// All checks run before the entity is constructed; a failed upload
/// leaves no trace in the catalog. Authors with the self-publish
/// capability bypass the review queue.
pub fn create_new_poi(catalog: &MunicipalCatalog, new_poi: NewPoi) -> Result<Id> {
    let NewPoi {
        name,
        x,
        y,
        poi_type,
        author,
    } = new_poi;
    let author = authorize_actor(catalog, &author, Capability::Propose)?;
    validate::element_name(&name)?;
    let coordinate = Coordinate::new(x, y);
    if !catalog.territory().contains(coordinate) {
        return Err(Error::OutsideTerritory);
    }
    let self_publish = author.role.grants(Capability::SelfPublish);
    let poi = Poi {
        id: Id::new(),
        name,
        coordinate,
        poi_type,
        author: author.id.clone(),
        municipality: catalog.id().clone(),
        status: ElementStatus::Pending,
        created: Activity::now(Some(author.id)),
        contents: vec![],
    };
    let id = if self_publish {
        let id = catalog.publish_poi(poi)?;
        log::debug!("Published POI {id} directly for a trusted author");
        id
    } else {
        let id = catalog.propose_poi(poi)?;
        log::debug!("Staged POI {id} for review");
        id
    };
    Ok(id)
}
