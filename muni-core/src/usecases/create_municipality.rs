use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewMunicipality {
    pub name: String,
    pub territory: Vec<Coordinate>,
}

/// Onboards a municipality and hands out its catalog. Happens once per
/// municipality; deletion is not part of normal operation.
pub fn create_municipality(new: NewMunicipality) -> Result<MunicipalCatalog> {
    let NewMunicipality { name, territory } = new;
    validate::element_name(&name)?;
    let municipality = Municipality::new(name, territory)?;
    log::info!(
        "Onboarded municipality {} ({})",
        municipality.name,
        municipality.id
    );
    Ok(MunicipalCatalog::new(municipality))
}
