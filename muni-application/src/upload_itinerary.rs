use super::*;

pub fn upload_itinerary<R: ItineraryRepo>(
    catalog: &MunicipalCatalog,
    repo: &R,
    new_itinerary: usecases::NewItinerary,
) -> Result<Id> {
    let id = usecases::create_new_itinerary(catalog, new_itinerary).map_err(|err| {
        warn!("Failed to upload itinerary: {err}");
        err
    })?;
    match catalog.element(&id) {
        Some(Element::Itinerary(itinerary)) => repo.create_itinerary(&itinerary)?,
        _ => {
            return Err(AppError::Internal(format!(
                "Itinerary {id} vanished after upload"
            )))
        }
    }
    Ok(id)
}
