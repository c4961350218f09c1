//! Selection tracking
//!
//! The selection is never cached: every read goes back to the container and
//! decodes the value payload of each checked checkbox.

use crate::interface::{Container, NoHook, SelectionHook};
use crate::model::SelectedClass;

/// Decodes the checked classes of `container`, in document order.
///
/// Payloads that fail to decode are logged and left out. A container that
/// cannot be read yields an empty selection.
pub fn get_selected_classes<C>(container: &C) -> Vec<SelectedClass>
where
    C: Container + ?Sized,
{
    let values = match container.checked_values() {
        Ok(values) => values,
        Err(e) => {
            log::error!("Error reading checked master classes: {}", e);
            return Vec::new();
        }
    };

    values
        .iter()
        .filter_map(|value| match serde_json::from_str::<SelectedClass>(value) {
            Ok(selected) => Some(selected),
            Err(e) => {
                log::error!("Error parsing class info from checkbox: {} ({})", e, value);
                None
            }
        })
        .collect()
}

/// Change handler shared by every class checkbox
#[derive(Debug, Clone, Default)]
pub struct SelectionTracker<H = NoHook> {
    hook: H,
}

impl<H: SelectionHook> SelectionTracker<H> {
    pub fn new(hook: H) -> Self {
        Self { hook }
    }

    /// Re-reads the selection, logs it and passes it to the hook
    pub fn handle_selection_change<C>(&self, container: &C) -> Vec<SelectedClass>
    where
        C: Container + ?Sized,
    {
        let selected = get_selected_classes(container);
        log::info!("Selected Master Classes: {:?}", selected);
        self.hook.on_selection_change(&selected);
        selected
    }
}
