use super::*;

pub fn upload_poi<R: PoiRepo>(
    catalog: &MunicipalCatalog,
    repo: &R,
    new_poi: usecases::NewPoi,
) -> Result<Id> {
    let id = usecases::create_new_poi(catalog, new_poi).map_err(|err| {
        warn!("Failed to upload POI: {err}");
        err
    })?;
    match catalog.element(&id) {
        Some(Element::Poi(poi)) => repo.create_poi(&poi)?,
        _ => {
            return Err(AppError::Internal(format!(
                "POI {id} vanished after upload"
            )))
        }
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    // The end-to-end scenario: a contributor proposes a POI, a curator
    // publishes it.
    #[test]
    fn propose_and_approve_monteleone() {
        let fixture = BackendFixture::new();
        let mut new_poi = fixture.new_poi(&fixture.contributor);
        new_poi.name = "Monteleone".into();
        new_poi.x = 1.0;
        new_poi.y = 1.0;
        let id = flows::upload_poi(&fixture.catalog, &fixture.db, new_poi).unwrap();

        assert_eq!(
            fixture.catalog.get_pending(&id).unwrap().status(),
            ElementStatus::Pending
        );
        assert!(fixture.catalog.published_pois().is_empty());
        assert_eq!(fixture.db.get_poi(&id).unwrap().status, ElementStatus::Pending);

        flows::moderate_element(
            &fixture.catalog,
            &fixture.db,
            &fixture.curator,
            &id,
            Decision::Approve,
        )
        .unwrap();

        let published = fixture.catalog.find_poi_by_name("Monteleone").unwrap();
        assert_eq!(published.id, id);
        assert_eq!(published.status, ElementStatus::Published);
        assert!(fixture.catalog.get_pending(&id).is_none());
        assert_eq!(
            fixture.db.get_poi(&id).unwrap().status,
            ElementStatus::Published
        );
    }

    #[test]
    fn trusted_author_is_published_immediately() {
        let fixture = BackendFixture::new();
        let new_poi = fixture.new_poi(&fixture.authorized);
        let id = flows::upload_poi(&fixture.catalog, &fixture.db, new_poi).unwrap();
        assert!(fixture.catalog.get_pending(&id).is_none());
        assert_eq!(
            fixture.db.get_poi(&id).unwrap().status,
            ElementStatus::Published
        );
    }

    #[test]
    fn failed_validation_leaves_no_record() {
        let fixture = BackendFixture::new();
        let mut new_poi = fixture.new_poi(&fixture.contributor);
        new_poi.x = 100.0;
        assert!(flows::upload_poi(&fixture.catalog, &fixture.db, new_poi).is_err());
        assert!(fixture.catalog.pending_pois().is_empty());
        assert!(fixture.db.pois.borrow().is_empty());
    }
}
