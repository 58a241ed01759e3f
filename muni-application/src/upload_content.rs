use super::*;

pub fn upload_content<D: ContentRepo + PoiRepo + ItineraryRepo>(
    catalog: &MunicipalCatalog,
    db: &D,
    new_content: usecases::NewContent,
) -> Result<Id> {
    let id = usecases::create_new_content(catalog, new_content).map_err(|err| {
        warn!("Failed to upload content: {err}");
        err
    })?;
    let Some(Element::Content(content)) = catalog.element(&id) else {
        return Err(AppError::Internal(format!(
            "Content {id} vanished after upload"
        )));
    };
    db.create_content(&content)?;
    if content.status.is_visible() {
        // Self-published content is attached to its referent right
        // away, so the referent record changed as well.
        persist_referent(catalog, db, &content.referred_to)?;
    }
    Ok(id)
}

pub(crate) fn persist_referent<D: PoiRepo + ItineraryRepo>(
    catalog: &MunicipalCatalog,
    db: &D,
    referred_to: &ContentRef,
) -> Result<()> {
    match catalog.element(referred_to.element_id()) {
        Some(Element::Poi(poi)) => db.update_poi(&poi)?,
        Some(Element::Itinerary(itinerary)) => db.update_itinerary(&itinerary)?,
        _ => {
            return Err(AppError::Internal(format!(
                "Referent {} vanished",
                referred_to.element_id()
            )))
        }
    }
    Ok(())
}
