use std::sync::{Mutex, MutexGuard, PoisonError};

use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("An element with this id has already been proposed")]
    DuplicateProposal,
    #[error("No staged element with this id")]
    NotFound,
}

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Poi,
    Itinerary,
    Content,
}

/// A staged or published element, cloned out of the catalog for
/// read-only consumers.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Poi(Poi),
    Itinerary(Itinerary),
    Content(Content),
}

impl Element {
    pub fn id(&self) -> &Id {
        match self {
            Self::Poi(poi) => &poi.id,
            Self::Itinerary(itinerary) => &itinerary.id,
            Self::Content(content) => &content.id,
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Poi(_) => ElementKind::Poi,
            Self::Itinerary(_) => ElementKind::Itinerary,
            Self::Content(_) => ElementKind::Content,
        }
    }

    pub fn status(&self) -> ElementStatus {
        match self {
            Self::Poi(poi) => poi.status,
            Self::Itinerary(itinerary) => itinerary.status,
            Self::Content(content) => content.status,
        }
    }
}

/// In-memory moderation state of a single municipality: the staged
/// proposals plus the published collections they are released into,
/// and the municipality's registered users.
///
/// All mutating operations lock the shared state for the whole
/// transition, so a decision can never leave an element in both or
/// neither collection. Concurrent decisions on the same id serialize
/// and the loser of the race observes [`Error::NotFound`].
#[derive(Debug)]
pub struct MunicipalCatalog {
    municipality: Municipality,
    state: Mutex<State>,
}

#[derive(Debug, Default)]
struct State {
    pending_pois: Vec<Poi>,
    pending_itineraries: Vec<Itinerary>,
    pending_contents: Vec<Content>,
    pois: Vec<Poi>,
    itineraries: Vec<Itinerary>,
    contents: Vec<Content>,
    users: Vec<User>,
}

impl State {
    fn contains_element_id(&self, id: &Id) -> bool {
        self.pending_pois.iter().any(|e| &e.id == id)
            || self.pending_itineraries.iter().any(|e| &e.id == id)
            || self.pending_contents.iter().any(|e| &e.id == id)
            || self.pois.iter().any(|e| &e.id == id)
            || self.itineraries.iter().any(|e| &e.id == id)
            || self.contents.iter().any(|e| &e.id == id)
    }

    fn find_element_mut<'a, E: MunicipalElement>(
        published: &'a mut [E],
        pending: &'a mut [E],
        id: &Id,
    ) -> Option<&'a mut E> {
        published
            .iter_mut()
            .chain(pending.iter_mut())
            .find(|e| e.id() == id)
    }

    /// Appends the content id to the attachment list of its referent.
    /// The referent may still be staged; attachment order is kept.
    fn attach_to_referent(&mut self, referred_to: &ContentRef, content_id: Id) {
        match referred_to {
            ContentRef::Poi(id) => {
                if let Some(poi) =
                    Self::find_element_mut(&mut self.pois, &mut self.pending_pois, id)
                {
                    poi.attach_content(content_id);
                }
            }
            ContentRef::Itinerary(id) => {
                if let Some(itinerary) = Self::find_element_mut(
                    &mut self.itineraries,
                    &mut self.pending_itineraries,
                    id,
                ) {
                    itinerary.attach_content(content_id);
                }
            }
        }
    }
}

impl MunicipalCatalog {
    pub fn new(municipality: Municipality) -> Self {
        Self {
            municipality,
            state: Mutex::new(State::default()),
        }
    }

    pub fn municipality(&self) -> &Municipality {
        &self.municipality
    }

    pub fn id(&self) -> &Id {
        &self.municipality.id
    }

    pub fn territory(&self) -> &Territory {
        &self.municipality.territory
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ----------------------------------------------- staging (propose)

    pub fn propose_poi(&self, poi: Poi) -> Result<Id> {
        debug_assert_eq!(poi.status, ElementStatus::Pending);
        let mut state = self.state();
        if state.contains_element_id(&poi.id) {
            return Err(Error::DuplicateProposal);
        }
        let id = poi.id.clone();
        state.pending_pois.push(poi);
        Ok(id)
    }

    pub fn propose_itinerary(&self, itinerary: Itinerary) -> Result<Id> {
        debug_assert_eq!(itinerary.status, ElementStatus::Pending);
        let mut state = self.state();
        if state.contains_element_id(&itinerary.id) {
            return Err(Error::DuplicateProposal);
        }
        let id = itinerary.id.clone();
        state.pending_itineraries.push(itinerary);
        Ok(id)
    }

    pub fn propose_content(&self, content: Content) -> Result<Id> {
        debug_assert_eq!(content.status, ElementStatus::Pending);
        let mut state = self.state();
        if state.contains_element_id(&content.id) {
            return Err(Error::DuplicateProposal);
        }
        let id = content.id.clone();
        state.pending_contents.push(content);
        Ok(id)
    }

    // ------------------------------------- self-publish (trusted path)

    pub fn publish_poi(&self, mut poi: Poi) -> Result<Id> {
        let mut state = self.state();
        if state.contains_element_id(&poi.id) {
            return Err(Error::DuplicateProposal);
        }
        poi.status = ElementStatus::Published;
        let id = poi.id.clone();
        state.pois.push(poi);
        Ok(id)
    }

    pub fn publish_itinerary(&self, mut itinerary: Itinerary) -> Result<Id> {
        let mut state = self.state();
        if state.contains_element_id(&itinerary.id) {
            return Err(Error::DuplicateProposal);
        }
        itinerary.status = ElementStatus::Published;
        let id = itinerary.id.clone();
        state.itineraries.push(itinerary);
        Ok(id)
    }

    pub fn publish_content(&self, mut content: Content) -> Result<Id> {
        let mut state = self.state();
        if state.contains_element_id(&content.id) {
            return Err(Error::DuplicateProposal);
        }
        content.status = ElementStatus::Published;
        let id = content.id.clone();
        let referred_to = content.referred_to.clone();
        state.contents.push(content);
        state.attach_to_referent(&referred_to, id.clone());
        Ok(id)
    }

    // --------------------------------------------- moderation decisions

    /// Releases a staged element into the published collections.
    ///
    /// Removing from staging, inserting into the published collection
    /// and (for contents) relinking the referent happen under one lock.
    pub fn approve(&self, id: &Id) -> Result<ElementKind> {
        let mut state = self.state();
        if let Some(pos) = state.pending_pois.iter().position(|e| &e.id == id) {
            let mut poi = state.pending_pois.remove(pos);
            poi.status = ElementStatus::Published;
            state.pois.push(poi);
            return Ok(ElementKind::Poi);
        }
        if let Some(pos) = state.pending_itineraries.iter().position(|e| &e.id == id) {
            let mut itinerary = state.pending_itineraries.remove(pos);
            itinerary.status = ElementStatus::Published;
            state.itineraries.push(itinerary);
            return Ok(ElementKind::Itinerary);
        }
        if let Some(pos) = state.pending_contents.iter().position(|e| &e.id == id) {
            let mut content = state.pending_contents.remove(pos);
            content.status = ElementStatus::Published;
            let referred_to = content.referred_to.clone();
            let content_id = content.id.clone();
            state.contents.push(content);
            state.attach_to_referent(&referred_to, content_id);
            return Ok(ElementKind::Content);
        }
        Err(Error::NotFound)
    }

    /// Discards a staged element permanently. Rejection is terminal:
    /// the id becomes invalid for all further catalog operations.
    pub fn reject(&self, id: &Id) -> Result<ElementKind> {
        let mut state = self.state();
        if let Some(pos) = state.pending_pois.iter().position(|e| &e.id == id) {
            state.pending_pois.remove(pos);
            return Ok(ElementKind::Poi);
        }
        if let Some(pos) = state.pending_itineraries.iter().position(|e| &e.id == id) {
            state.pending_itineraries.remove(pos);
            return Ok(ElementKind::Itinerary);
        }
        if let Some(pos) = state.pending_contents.iter().position(|e| &e.id == id) {
            state.pending_contents.remove(pos);
            return Ok(ElementKind::Content);
        }
        Err(Error::NotFound)
    }

    // --------------------------------------------------- read snapshots

    pub fn get_pending(&self, id: &Id) -> Option<Element> {
        let state = self.state();
        state
            .pending_pois
            .iter()
            .find(|e| &e.id == id)
            .cloned()
            .map(Element::Poi)
            .or_else(|| {
                state
                    .pending_itineraries
                    .iter()
                    .find(|e| &e.id == id)
                    .cloned()
                    .map(Element::Itinerary)
            })
            .or_else(|| {
                state
                    .pending_contents
                    .iter()
                    .find(|e| &e.id == id)
                    .cloned()
                    .map(Element::Content)
            })
    }

    /// Looks the id up anywhere, staged or published.
    pub fn element(&self, id: &Id) -> Option<Element> {
        self.get_pending(id).or_else(|| {
            let state = self.state();
            state
                .pois
                .iter()
                .find(|e| &e.id == id)
                .cloned()
                .map(Element::Poi)
                .or_else(|| {
                    state
                        .itineraries
                        .iter()
                        .find(|e| &e.id == id)
                        .cloned()
                        .map(Element::Itinerary)
                })
                .or_else(|| {
                    state
                        .contents
                        .iter()
                        .find(|e| &e.id == id)
                        .cloned()
                        .map(Element::Content)
                })
        })
    }

    pub fn pending_pois(&self) -> Vec<Poi> {
        self.state().pending_pois.clone()
    }

    pub fn pending_itineraries(&self) -> Vec<Itinerary> {
        self.state().pending_itineraries.clone()
    }

    pub fn pending_contents(&self) -> Vec<Content> {
        self.state().pending_contents.clone()
    }

    pub fn published_pois(&self) -> Vec<Poi> {
        self.state().pois.clone()
    }

    pub fn published_itineraries(&self) -> Vec<Itinerary> {
        self.state().itineraries.clone()
    }

    pub fn published_contents(&self) -> Vec<Content> {
        self.state().contents.clone()
    }

    pub fn find_poi(&self, id: &Id) -> Option<Poi> {
        self.state().pois.iter().find(|e| &e.id == id).cloned()
    }

    pub fn find_poi_by_name(&self, name: &str) -> Option<Poi> {
        self.state().pois.iter().find(|e| e.name == name).cloned()
    }

    pub fn find_itinerary(&self, id: &Id) -> Option<Itinerary> {
        self.state()
            .itineraries
            .iter()
            .find(|e| &e.id == id)
            .cloned()
    }

    pub fn find_content(&self, id: &Id) -> Option<Content> {
        self.state().contents.iter().find(|e| &e.id == id).cloned()
    }

    /// Whether a POI with this id exists in this municipality,
    /// staged or published. Used to validate itinerary routes.
    pub fn contains_poi(&self, id: &Id) -> bool {
        let state = self.state();
        state.pois.iter().any(|e| &e.id == id)
            || state.pending_pois.iter().any(|e| &e.id == id)
    }

    /// Whether the referent of a content exists in this municipality,
    /// staged or published.
    pub fn contains_referent(&self, referred_to: &ContentRef) -> bool {
        let state = self.state();
        match referred_to {
            ContentRef::Poi(id) => {
                state.pois.iter().any(|e| &e.id == id)
                    || state.pending_pois.iter().any(|e| &e.id == id)
            }
            ContentRef::Itinerary(id) => {
                state.itineraries.iter().any(|e| &e.id == id)
                    || state.pending_itineraries.iter().any(|e| &e.id == id)
            }
        }
    }

    /// Published contents of a published element, in attachment order.
    ///
    /// Contents approved while their referent was still pending stay
    /// invisible here until the referent itself is published.
    pub fn visible_contents_of(&self, element_id: &Id) -> Vec<Content> {
        let state = self.state();
        let content_ids: Vec<Id> = state
            .pois
            .iter()
            .find(|e| &e.id == element_id)
            .map(|poi| poi.contents.clone())
            .or_else(|| {
                state
                    .itineraries
                    .iter()
                    .find(|e| &e.id == element_id)
                    .map(|itinerary| itinerary.contents.clone())
            })
            .unwrap_or_default();
        content_ids
            .iter()
            .filter_map(|content_id| {
                state
                    .contents
                    .iter()
                    .find(|content| &content.id == content_id)
                    .cloned()
            })
            .collect()
    }

    // -------------------------------------------------- registered users

    pub fn register_user(&self, user: User) -> Result<Id> {
        let mut state = self.state();
        if state
            .users
            .iter()
            .any(|u| u.id == user.id || u.name == user.name)
        {
            return Err(Error::DuplicateProposal);
        }
        let id = user.id.clone();
        state.users.push(user);
        Ok(id)
    }

    pub fn user(&self, id: &Id) -> Option<User> {
        self.state().users.iter().find(|u| &u.id == id).cloned()
    }

    pub fn user_by_name(&self, name: &str) -> Option<User> {
        self.state().users.iter().find(|u| u.name == name).cloned()
    }

    pub fn users(&self) -> Vec<User> {
        self.state().users.clone()
    }

    // ------------------------------------------- back-reference lookups

    /// Authored POIs, staged and published, rebuilt from the owning
    /// collections.
    pub fn authored_pois(&self, author: &Id) -> Vec<Poi> {
        let state = self.state();
        state
            .pois
            .iter()
            .chain(state.pending_pois.iter())
            .filter(|e| &e.author == author)
            .cloned()
            .collect()
    }

    pub fn authored_itineraries(&self, author: &Id) -> Vec<Itinerary> {
        let state = self.state();
        state
            .itineraries
            .iter()
            .chain(state.pending_itineraries.iter())
            .filter(|e| &e.author == author)
            .cloned()
            .collect()
    }

    pub fn authored_contents(&self, author: &Id) -> Vec<Content> {
        let state = self.state();
        state
            .contents
            .iter()
            .chain(state.pending_contents.iter())
            .filter(|e| &e.author == author)
            .cloned()
            .collect()
    }
}
