//! Intents for the "add item" surface.

use crate::model::{ImageReference, ItemCategory, ProductInfo};
use crate::ui::mvi::Intent;

/// Free-text form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Description,
}

/// Everything that can change a creation draft, in arrival order.
#[derive(Debug, Clone)]
pub enum CreateItemIntent {
    /// User typed into a text field.
    FieldEdited { field: FormField, value: String },

    /// Product lookup resolved. Overwrites name, description and category.
    ProductInfoArrived(ProductInfo),

    /// Camera returned a photo.
    ImageCaptured(ImageReference),

    /// User removed the attached photo.
    ImageCleared,

    /// User tapped the category field.
    CategoryPickerToggled,

    /// Picker dismissed without a choice.
    CategoryPickerDismissed,

    /// User picked a category. Closes the picker.
    CategorySelected(ItemCategory),

    /// User pressed the create button.
    SubmitRequested,

    /// Item repository finished the create call.
    SubmissionCompleted { ok: bool },
}

impl Intent for CreateItemIntent {}
