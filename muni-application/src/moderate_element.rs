use super::*;
use crate::upload_content::persist_referent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Approve,
    Reject,
}

/// Applies a moderation decision and persists its outcome.
///
/// The in-memory transition is atomic on its own; the caller wraps the
/// flow in a transaction if the backing store requires one.
pub fn moderate_element<D: Db>(
    catalog: &MunicipalCatalog,
    db: &D,
    actor: &Id,
    element: &Id,
    decision: Decision,
) -> Result<ElementKind> {
    match decision {
        Decision::Approve => {
            let kind = usecases::approve_element(catalog, actor, element).map_err(|err| {
                warn!("Failed to approve element {element}: {err}");
                err
            })?;
            persist_approval(catalog, db, element)?;
            Ok(kind)
        }
        Decision::Reject => {
            // Snapshot the staged element before it is discarded, the
            // store keeps the rejected record for the status filter.
            let staged = catalog.get_pending(element);
            let kind = usecases::reject_element(catalog, actor, element).map_err(|err| {
                warn!("Failed to reject element {element}: {err}");
                err
            })?;
            if let Some(rejected) = staged {
                persist_rejection(db, rejected)?;
            }
            Ok(kind)
        }
    }
}

fn persist_approval<D: Db>(catalog: &MunicipalCatalog, db: &D, element: &Id) -> Result<()> {
    match catalog.element(element) {
        Some(Element::Poi(poi)) => db.update_poi(&poi)?,
        Some(Element::Itinerary(itinerary)) => db.update_itinerary(&itinerary)?,
        Some(Element::Content(content)) => {
            db.update_content(&content)?;
            // Approval attached the content to its referent.
            persist_referent(catalog, db, &content.referred_to)?;
        }
        None => {
            return Err(AppError::Internal(format!(
                "Element {element} vanished after approval"
            )))
        }
    }
    Ok(())
}

fn persist_rejection<D: Db>(db: &D, element: Element) -> Result<()> {
    match element {
        Element::Poi(mut poi) => {
            poi.status = ElementStatus::Rejected;
            db.update_poi(&poi)?;
        }
        Element::Itinerary(mut itinerary) => {
            itinerary.status = ElementStatus::Rejected;
            db.update_itinerary(&itinerary)?;
        }
        Element::Content(mut content) => {
            content.status = ElementStatus::Rejected;
            db.update_content(&content)?;
        }
    }
    Ok(())
}
