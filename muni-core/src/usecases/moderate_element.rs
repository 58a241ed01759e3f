use super::prelude::*;

/// Releases a staged element into the published collections.
///
/// Only registered users with the moderate capability may decide; an
/// unauthorized call fails without touching the staging collections.
pub fn approve_element(
    catalog: &MunicipalCatalog,
    actor: &Id,
    element: &Id,
) -> Result<ElementKind> {
    let actor = authorize_actor(catalog, actor, Capability::Moderate)?;
    let kind = catalog.approve(element)?;
    log::info!(
        "{} approved {kind:?} {element} in {}",
        actor.name,
        catalog.municipality().name
    );
    Ok(kind)
}

/// Discards a staged element permanently.
pub fn reject_element(
    catalog: &MunicipalCatalog,
    actor: &Id,
    element: &Id,
) -> Result<ElementKind> {
    let actor = authorize_actor(catalog, actor, Capability::Moderate)?;
    let kind = catalog.reject(element)?;
    log::info!(
        "{} rejected {kind:?} {element} in {}",
        actor.name,
        catalog.municipality().name
    );
    Ok(kind)
}
