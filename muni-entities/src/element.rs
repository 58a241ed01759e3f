use crate::{id::Id, status::ElementStatus};

/// Shared contract of the content-holding municipal elements.
///
/// POIs and itineraries implement this independently; there is no
/// common base type. Attached contents are referenced by id, the
/// owning collection keeps the content records themselves.
pub trait MunicipalElement {
    fn id(&self) -> &Id;
    fn name(&self) -> &str;
    fn status(&self) -> ElementStatus;
    fn attach_content(&mut self, content_id: Id);
    fn content_ids(&self) -> &[Id];
}
