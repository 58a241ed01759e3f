pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{
    content_builder::*, itinerary_builder::*, poi_builder::*, user_builder::*,
};

pub mod poi_builder {

    use super::*;
    use crate::{activity::*, geo::*, id::*, poi::*, status::*};

    #[derive(Debug)]
    pub struct PoiBuild {
        poi: Poi,
    }

    impl PoiBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.poi.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.poi.name = name.into();
            self
        }
        pub fn pos(mut self, x: f64, y: f64) -> Self {
            self.poi.coordinate = Coordinate::new(x, y);
            self
        }
        pub fn poi_type(mut self, poi_type: PoiType) -> Self {
            self.poi.poi_type = poi_type;
            self
        }
        pub fn author(mut self, author: Id) -> Self {
            self.poi.author = author;
            self
        }
        pub fn municipality(mut self, municipality: Id) -> Self {
            self.poi.municipality = municipality;
            self
        }
        pub fn status(mut self, status: ElementStatus) -> Self {
            self.poi.status = status;
            self
        }
        pub fn finish(self) -> Poi {
            self.poi
        }
    }

    impl Builder for Poi {
        type Build = PoiBuild;
        fn build() -> Self::Build {
            Self::Build {
                poi: Poi {
                    id: Id::new(),
                    name: "".into(),
                    coordinate: Coordinate::default(),
                    poi_type: PoiType::Park,
                    author: Id::default(),
                    municipality: Id::default(),
                    status: ElementStatus::default(),
                    created: Activity::now(None),
                    contents: vec![],
                },
            }
        }
    }
}

pub mod itinerary_builder {

    use super::*;
    use crate::{activity::*, id::*, itinerary::*, status::*};

    #[derive(Debug)]
    pub struct ItineraryBuild {
        itinerary: Itinerary,
    }

    impl ItineraryBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.itinerary.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.itinerary.name = name.into();
            self
        }
        pub fn description(mut self, description: &str) -> Self {
            self.itinerary.description = description.into();
            self
        }
        pub fn route(mut self, route: Vec<Id>) -> Self {
            self.itinerary.route = route;
            self
        }
        pub fn author(mut self, author: Id) -> Self {
            self.itinerary.author = author;
            self
        }
        pub fn municipality(mut self, municipality: Id) -> Self {
            self.itinerary.municipality = municipality;
            self
        }
        pub fn status(mut self, status: ElementStatus) -> Self {
            self.itinerary.status = status;
            self
        }
        pub fn finish(self) -> Itinerary {
            self.itinerary
        }
    }

    impl Builder for Itinerary {
        type Build = ItineraryBuild;
        fn build() -> Self::Build {
            Self::Build {
                itinerary: Itinerary {
                    id: Id::new(),
                    name: "".into(),
                    description: "".into(),
                    route: vec![],
                    author: Id::default(),
                    municipality: Id::default(),
                    status: ElementStatus::default(),
                    created: Activity::now(None),
                    contents: vec![],
                },
            }
        }
    }
}

pub mod content_builder {

    use super::*;
    use crate::{activity::*, content::*, id::*, status::*};

    #[derive(Debug)]
    pub struct ContentBuild {
        content: Content,
    }

    impl ContentBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.content.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.content.name = name.into();
            self
        }
        pub fn content_type(mut self, content_type: ContentType) -> Self {
            self.content.content_type = content_type;
            self
        }
        pub fn payload(mut self, payload: &str) -> Self {
            self.content.payload = payload.into();
            self
        }
        pub fn author(mut self, author: Id) -> Self {
            self.content.author = author;
            self
        }
        pub fn municipality(mut self, municipality: Id) -> Self {
            self.content.municipality = municipality;
            self
        }
        pub fn status(mut self, status: ElementStatus) -> Self {
            self.content.status = status;
            self
        }
        pub fn referred_to(mut self, referred_to: ContentRef) -> Self {
            self.content.referred_to = referred_to;
            self
        }
        pub fn finish(self) -> Content {
            self.content
        }
    }

    impl Builder for Content {
        type Build = ContentBuild;
        fn build() -> Self::Build {
            Self::Build {
                content: Content {
                    id: Id::new(),
                    name: "".into(),
                    content_type: ContentType::Description,
                    payload: "".into(),
                    author: Id::default(),
                    municipality: Id::default(),
                    status: ElementStatus::default(),
                    created: Activity::now(None),
                    referred_to: ContentRef::Poi(Id::default()),
                },
            }
        }
    }
}

pub mod user_builder {

    use super::*;
    use crate::{id::*, password::*, user::*};

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.user.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.user.name = name.into();
            self
        }
        pub fn municipality(mut self, municipality: Id) -> Self {
            self.user.municipality = municipality;
            self
        }
        pub fn role(mut self, role: Role) -> Self {
            self.user.role = role;
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> Self::Build {
            Self::Build {
                user: User {
                    id: Id::new(),
                    name: "".into(),
                    password: Password::from_hash("".into()),
                    municipality: Id::default(),
                    role: Role::default(),
                },
            }
        }
    }
}
