//! State for the "add item" surface.

use crate::model::{display_label, CreateItemCommand, ImageReference, ItemCategory};
use crate::ui::mvi::UiState;

/// Live draft of an item being created.
///
/// `Default` is the empty form a freshly opened surface starts with.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreationState {
    pub name: String,
    pub description: String,
    pub category: Option<ItemCategory>,
    /// At most one photo; a new capture replaces it.
    pub image: Option<ImageReference>,
    /// Set between an accepted submit and its completion. Freezes the form.
    pub is_submitting: bool,
    /// Whether the category picker is open.
    pub category_picker_expanded: bool,
}

impl UiState for CreationState {}

impl CreationState {
    /// Submit is enabled only with a non-blank name, a category and no
    /// submission in flight.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting && !self.name.trim().is_empty() && self.category.is_some()
    }

    pub fn inputs_enabled(&self) -> bool {
        !self.is_submitting
    }

    /// The camera tile is shown only while no photo is attached.
    pub fn can_launch_camera(&self) -> bool {
        self.inputs_enabled() && self.image.is_none()
    }

    pub fn category_label(&self) -> Option<&'static str> {
        self.category.map(display_label)
    }

    /// Build the creation command this state would submit, if submittable.
    ///
    /// The name is passed through as typed; blankness is only a gate.
    pub fn submission(&self) -> Option<CreateItemCommand> {
        if !self.can_submit() {
            return None;
        }
        let category = self.category?;
        Some(CreateItemCommand {
            name: self.name.clone(),
            description: self.description.clone(),
            category,
            image: self.image.clone(),
        })
    }
}
