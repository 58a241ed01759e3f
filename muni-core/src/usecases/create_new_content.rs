use url::Url;

use super::prelude::*;

#[derive(Debug, Clone)]
pub struct NewContent {
    pub name: String,
    pub content_type: ContentType,
    pub payload: String,
    pub poi: Option<Id>,
    pub itinerary: Option<Id>,
    pub author: Id,
}

/// Validates and stages a new content.
///
/// The referent is built first: a request naming zero or two referents
/// never reaches the catalog. Link payloads must parse as URLs.
pub fn create_new_content(catalog: &MunicipalCatalog, new_content: NewContent) -> Result<Id> {
    let NewContent {
        name,
        content_type,
        payload,
        poi,
        itinerary,
        author,
    } = new_content;
    let referred_to = ContentRef::from_options(poi, itinerary)?;
    let author = authorize_actor(catalog, &author, Capability::Propose)?;
    validate::element_name(&name)?;
    if !validate::is_non_empty_text(&payload) {
        return Err(Error::Payload);
    }
    if content_type == ContentType::Link {
        payload.parse::<Url>()?;
    }
    if !catalog.contains_referent(&referred_to) {
        return Err(Error::ElementReference);
    }
    let self_publish = author.role.grants(Capability::SelfPublish);
    let content = Content {
        id: Id::new(),
        name,
        content_type,
        payload,
        author: author.id.clone(),
        municipality: catalog.id().clone(),
        status: ElementStatus::Pending,
        created: Activity::now(Some(author.id)),
        referred_to,
    };
    let id = if self_publish {
        let id = catalog.publish_content(content)?;
        log::debug!("Published content {id} directly for a trusted author");
        id
    } else {
        let id = catalog.propose_content(content)?;
        log::debug!("Staged content {id} for review");
        id
    };
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::{super::tests::fixtures::*, *};
    use crate::usecases::create_new_poi;

    fn staged_poi(fixture: &Fixture) -> Id {
        create_new_poi(&fixture.catalog, new_poi(&fixture.contributor)).unwrap()
    }

    fn new_description(fixture: &Fixture, poi: Id) -> NewContent {
        NewContent {
            name: "Some history".into(),
            content_type: ContentType::Description,
            payload: "Built on the old walls".into(),
            poi: Some(poi),
            itinerary: None,
            author: fixture.contributor.clone(),
        }
    }

    #[test]
    fn content_for_staged_referent_is_accepted() {
        let fixture = fixture();
        let poi = staged_poi(&fixture);
        let id =
            create_new_content(&fixture.catalog, new_description(&fixture, poi)).unwrap();
        assert_eq!(
            fixture.catalog.get_pending(&id).unwrap().status(),
            ElementStatus::Pending
        );
    }

    #[test]
    fn referent_must_exist() {
        let fixture = fixture();
        let new = new_description(&fixture, Id::new());
        assert!(matches!(
            create_new_content(&fixture.catalog, new),
            Err(Error::ElementReference)
        ));
    }

    #[test]
    fn referent_exclusivity_is_checked_first() {
        let fixture = fixture();
        let poi = staged_poi(&fixture);
        let mut both = new_description(&fixture, poi);
        both.itinerary = Some(Id::new());
        assert!(matches!(
            create_new_content(&fixture.catalog, both),
            Err(Error::ContentReferent(ContentRefError::AmbiguousReferent))
        ));
        let mut neither = new_description(&fixture, Id::new());
        neither.poi = None;
        assert!(matches!(
            create_new_content(&fixture.catalog, neither),
            Err(Error::ContentReferent(ContentRefError::MissingReferent))
        ));
        assert!(fixture.catalog.pending_contents().is_empty());
    }

    #[test]
    fn link_payload_must_be_a_url() {
        let fixture = fixture();
        let poi = staged_poi(&fixture);
        let mut link = new_description(&fixture, poi.clone());
        link.content_type = ContentType::Link;
        link.payload = "not a url".into();
        assert!(matches!(
            create_new_content(&fixture.catalog, link),
            Err(Error::Url)
        ));
        let mut link = new_description(&fixture, poi);
        link.content_type = ContentType::Link;
        link.payload = "https://camerino.example/rocca".into();
        assert!(create_new_content(&fixture.catalog, link).is_ok());
    }

    #[test]
    fn empty_payload_is_rejected() {
        let fixture = fixture();
        let poi = staged_poi(&fixture);
        let mut empty = new_description(&fixture, poi);
        empty.payload = "  ".into();
        assert!(matches!(
            create_new_content(&fixture.catalog, empty),
            Err(Error::Payload)
        ));
    }
}
