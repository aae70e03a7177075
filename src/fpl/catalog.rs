//! Player id resolution against the bootstrap player catalog.

use crate::{
    cli::types::{PlayerId, Position},
    fpl::types::Element,
    Result,
};

/// Returned in place of a name or position when an id is not in the catalog.
pub const ID_NOT_FOUND: &str = "ID not found";

/// Label for a catalog entry whose `element_type` is outside 1-4.
pub const INVALID_POSITION: &str = "Unknown";

/// League-wide player list, valid for the duration of one aggregation.
#[derive(Debug, Clone, Default)]
pub struct PlayerCatalog {
    elements: Vec<Element>,
}

impl PlayerCatalog {
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Linear scan by id.
    pub fn find(&self, id: PlayerId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// "First Second" name, or [`ID_NOT_FOUND`].
    pub fn display_name(&self, id: PlayerId) -> String {
        self.find(id)
            .map(|e| format!("{} {}", e.first_name, e.second_name))
            .unwrap_or_else(|| ID_NOT_FOUND.to_string())
    }

    /// Position of a player; `Ok(None)` when the id is absent.
    ///
    /// Fails only when the catalog carries an `element_type` outside 1-4.
    pub fn position(&self, id: PlayerId) -> Result<Option<Position>> {
        self.find(id)
            .map(|e| Position::try_from(e.element_type))
            .transpose()
    }

    /// Position label such as "MID", or [`ID_NOT_FOUND`].
    pub fn position_label(&self, id: PlayerId) -> Result<String> {
        Ok(self
            .position(id)?
            .map(|p| p.to_string())
            .unwrap_or_else(|| ID_NOT_FOUND.to_string()))
    }
}
