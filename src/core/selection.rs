//! View-local selection state: which entity, if any, is shown in the modal

use crate::core::entity::Entity;

/// Selection owned by a single view
///
/// `Idle` means the modal is closed; `Detail` holds the entity whose detail
/// modal is open. Clicking an entity opens it, closing the modal returns to
/// `Idle`. Nothing else changes the state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection<T> {
    #[default]
    Idle,
    Detail(T),
}

impl<T> Selection<T> {
    /// Select an entity; replaces any previous selection
    pub fn open(&mut self, entity: T) {
        *self = Selection::Detail(entity);
    }

    /// Close the modal
    pub fn close(&mut self) {
        *self = Selection::Idle;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Selection::Detail(_))
    }

    pub fn current(&self) -> Option<&T> {
        match self {
            Selection::Idle => None,
            Selection::Detail(entity) => Some(entity),
        }
    }
}

impl<T: Entity> Selection<&T> {
    /// URL fragment representing this state in the generated site
    pub fn fragment(&self) -> String {
        match self {
            Selection::Idle => "#".to_string(),
            Selection::Detail(entity) => format!("#{}", entity.anchor()),
        }
    }
}
