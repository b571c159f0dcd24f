//! Reducer for the "add item" surface.

use crate::ui::mvi::Reducer;

use super::intent::{CreateItemIntent, FormField};
use super::state::CreationState;

/// Reducer for creation draft transitions.
///
/// Pure function. Building the create command, calling the repository and
/// emitting the dismissal effect are done by `CreateItemStore` around the
/// dispatch call.
pub struct CreateItemReducer;

impl Reducer for CreateItemReducer {
    type State = CreationState;
    type Intent = CreateItemIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        // The form is frozen while a submission is in flight. Only its
        // completion gets through; everything else is dropped, not queued.
        if state.is_submitting && !matches!(intent, CreateItemIntent::SubmissionCompleted { .. })
        {
            return state;
        }

        match intent {
            CreateItemIntent::FieldEdited { field, value } => {
                match field {
                    FormField::Name => state.name = value,
                    FormField::Description => state.description = value,
                }
                state
            }

            // Last arrival wins, even over manual edits.
            CreateItemIntent::ProductInfoArrived(info) => {
                state.name = info.name;
                state.description = info.description;
                state.category = Some(info.category);
                state
            }

            CreateItemIntent::ImageCaptured(image) => {
                state.image = Some(image);
                state
            }

            CreateItemIntent::ImageCleared => {
                state.image = None;
                state
            }

            CreateItemIntent::CategoryPickerToggled => {
                state.category_picker_expanded = !state.category_picker_expanded;
                state
            }

            CreateItemIntent::CategoryPickerDismissed => {
                state.category_picker_expanded = false;
                state
            }

            CreateItemIntent::CategorySelected(category) => {
                state.category = Some(category);
                state.category_picker_expanded = false;
                state
            }

            CreateItemIntent::SubmitRequested => {
                if state.can_submit() {
                    state.is_submitting = true;
                    state.category_picker_expanded = false;
                }
                state
            }

            CreateItemIntent::SubmissionCompleted { ok: true } => CreationState::default(),

            CreateItemIntent::SubmissionCompleted { ok: false } => {
                // Keep the draft so the user can retry without retyping.
                state.is_submitting = false;
                state
            }
        }
    }
}
