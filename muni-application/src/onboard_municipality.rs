use super::*;

pub fn onboard_municipality<R: MunicipalityRepo>(
    repo: &R,
    new: usecases::NewMunicipality,
) -> Result<MunicipalCatalog> {
    let catalog = usecases::create_municipality(new).map_err(|err| {
        warn!("Failed to onboard municipality: {err}");
        err
    })?;
    repo.create_municipality(catalog.municipality())?;
    Ok(catalog)
}
