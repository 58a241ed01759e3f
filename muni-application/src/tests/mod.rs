pub mod prelude {

    use std::cell::RefCell;

    pub use muni_core::{
        catalog::{Element, ElementKind, MunicipalCatalog},
        entities::*,
        repositories::{Error as RepoError, *},
        usecases,
    };

    pub use crate::{error::AppError, prelude as flows, prelude::Decision};

    type RepoResult<T> = std::result::Result<T, RepoError>;

    /// In-memory stand-in for the backing store.
    #[derive(Debug, Default)]
    pub struct MockDb {
        pub pois: RefCell<Vec<Poi>>,
        pub itineraries: RefCell<Vec<Itinerary>>,
        pub contents: RefCell<Vec<Content>>,
        pub users: RefCell<Vec<User>>,
        pub municipalities: RefCell<Vec<Municipality>>,
    }

    impl PoiRepo for MockDb {
        fn create_poi(&self, poi: &Poi) -> RepoResult<()> {
            if self.pois.borrow().iter().any(|p| p.id == poi.id) {
                return Err(RepoError::AlreadyExists);
            }
            self.pois.borrow_mut().push(poi.clone());
            Ok(())
        }

        fn update_poi(&self, poi: &Poi) -> RepoResult<()> {
            let mut pois = self.pois.borrow_mut();
            let existing = pois
                .iter_mut()
                .find(|p| p.id == poi.id)
                .ok_or(RepoError::NotFound)?;
            *existing = poi.clone();
            Ok(())
        }

        fn get_poi(&self, id: &Id) -> RepoResult<Poi> {
            self.pois
                .borrow()
                .iter()
                .find(|p| &p.id == id)
                .cloned()
                .ok_or(RepoError::NotFound)
        }

        fn pois_by_status(&self, status: ElementStatus) -> RepoResult<Vec<Poi>> {
            Ok(self
                .pois
                .borrow()
                .iter()
                .filter(|p| p.status == status)
                .cloned()
                .collect())
        }
    }

    impl ItineraryRepo for MockDb {
        fn create_itinerary(&self, itinerary: &Itinerary) -> RepoResult<()> {
            if self
                .itineraries
                .borrow()
                .iter()
                .any(|i| i.id == itinerary.id)
            {
                return Err(RepoError::AlreadyExists);
            }
            self.itineraries.borrow_mut().push(itinerary.clone());
            Ok(())
        }

        fn update_itinerary(&self, itinerary: &Itinerary) -> RepoResult<()> {
            let mut itineraries = self.itineraries.borrow_mut();
            let existing = itineraries
                .iter_mut()
                .find(|i| i.id == itinerary.id)
                .ok_or(RepoError::NotFound)?;
            *existing = itinerary.clone();
            Ok(())
        }

        fn get_itinerary(&self, id: &Id) -> RepoResult<Itinerary> {
            self.itineraries
                .borrow()
                .iter()
                .find(|i| &i.id == id)
                .cloned()
                .ok_or(RepoError::NotFound)
        }

        fn itineraries_by_status(&self, status: ElementStatus) -> RepoResult<Vec<Itinerary>> {
            Ok(self
                .itineraries
                .borrow()
                .iter()
                .filter(|i| i.status == status)
                .cloned()
                .collect())
        }
    }

    impl ContentRepo for MockDb {
        fn create_content(&self, content: &Content) -> RepoResult<()> {
            if self.contents.borrow().iter().any(|c| c.id == content.id) {
                return Err(RepoError::AlreadyExists);
            }
            self.contents.borrow_mut().push(content.clone());
            Ok(())
        }

        fn update_content(&self, content: &Content) -> RepoResult<()> {
            let mut contents = self.contents.borrow_mut();
            let existing = contents
                .iter_mut()
                .find(|c| c.id == content.id)
                .ok_or(RepoError::NotFound)?;
            *existing = content.clone();
            Ok(())
        }

        fn get_content(&self, id: &Id) -> RepoResult<Content> {
            self.contents
                .borrow()
                .iter()
                .find(|c| &c.id == id)
                .cloned()
                .ok_or(RepoError::NotFound)
        }

        fn contents_by_status(&self, status: ElementStatus) -> RepoResult<Vec<Content>> {
            Ok(self
                .contents
                .borrow()
                .iter()
                .filter(|c| c.status == status)
                .cloned()
                .collect())
        }
    }

    impl UserRepo for MockDb {
        fn create_user(&self, user: &User) -> RepoResult<()> {
            if self.users.borrow().iter().any(|u| u.id == user.id) {
                return Err(RepoError::AlreadyExists);
            }
            self.users.borrow_mut().push(user.clone());
            Ok(())
        }

        fn get_user(&self, id: &Id) -> RepoResult<User> {
            self.users
                .borrow()
                .iter()
                .find(|u| &u.id == id)
                .cloned()
                .ok_or(RepoError::NotFound)
        }

        fn all_users(&self) -> RepoResult<Vec<User>> {
            Ok(self.users.borrow().clone())
        }
    }

    impl MunicipalityRepo for MockDb {
        fn create_municipality(&self, municipality: &Municipality) -> RepoResult<()> {
            if self
                .municipalities
                .borrow()
                .iter()
                .any(|m| m.id == municipality.id)
            {
                return Err(RepoError::AlreadyExists);
            }
            self.municipalities.borrow_mut().push(municipality.clone());
            Ok(())
        }

        fn get_municipality(&self, id: &Id) -> RepoResult<Municipality> {
            self.municipalities
                .borrow()
                .iter()
                .find(|m| &m.id == id)
                .cloned()
                .ok_or(RepoError::NotFound)
        }
    }

    impl Db for MockDb {}

    /// One onboarded municipality, its store, and a user per role.
    pub struct BackendFixture {
        pub db: MockDb,
        pub catalog: MunicipalCatalog,
        pub tourist: Id,
        pub contributor: Id,
        pub authorized: Id,
        pub curator: Id,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let db = MockDb::default();
            let catalog = flows::onboard_municipality(
                &db,
                usecases::NewMunicipality {
                    name: "Camerino".into(),
                    territory: vec![
                        Coordinate::new(0.0, 0.0),
                        Coordinate::new(10.0, 0.0),
                        Coordinate::new(10.0, 10.0),
                        Coordinate::new(0.0, 10.0),
                    ],
                },
            )
            .unwrap();
            let tourist = Self::register(&catalog, &db, "gina", Role::Tourist);
            let contributor = Self::register(&catalog, &db, "marco", Role::Contributor);
            let authorized = Self::register(&catalog, &db, "sofia", Role::AuthorizedContributor);
            let curator = Self::register(&catalog, &db, "anna", Role::Curator);
            Self {
                db,
                catalog,
                tourist,
                contributor,
                authorized,
                curator,
            }
        }

        fn register(catalog: &MunicipalCatalog, db: &MockDb, name: &str, role: Role) -> Id {
            flows::register_user(
                catalog,
                db,
                usecases::NewUser {
                    name: name.into(),
                    password: "secret".into(),
                    role,
                },
            )
            .unwrap()
        }

        pub fn new_poi(&self, author: &Id) -> usecases::NewPoi {
            usecases::NewPoi {
                name: "Fonte delle Fate".into(),
                x: 5.0,
                y: 5.0,
                poi_type: PoiType::Park,
                author: author.clone(),
            }
        }

        pub fn published_poi(&self, name: &str, x: f64) -> Id {
            let mut new_poi = self.new_poi(&self.contributor);
            new_poi.name = name.into();
            new_poi.x = x;
            let id = flows::upload_poi(&self.catalog, &self.db, new_poi).unwrap();
            flows::moderate_element(
                &self.catalog,
                &self.db,
                &self.curator,
                &id,
                Decision::Approve,
            )
            .unwrap();
            id
        }
    }
}
