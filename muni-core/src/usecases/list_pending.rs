use super::prelude::*;

/// Snapshot of one staging collection in proposal order, for
/// moderation views.
pub fn list_pending(catalog: &MunicipalCatalog, kind: ElementKind) -> Vec<Element> {
    match kind {
        ElementKind::Poi => catalog
            .pending_pois()
            .into_iter()
            .map(Element::Poi)
            .collect(),
        ElementKind::Itinerary => catalog
            .pending_itineraries()
            .into_iter()
            .map(Element::Itinerary)
            .collect(),
        ElementKind::Content => catalog
            .pending_contents()
            .into_iter()
            .map(Element::Content)
            .collect(),
    }
}
