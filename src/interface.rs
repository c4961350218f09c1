#![allow(async_fn_in_trait)] // 允许在内部 trait 中使用 async fn

use crate::error::Result;
use crate::model::{ClassRecord, SelectedClass};
use crate::render::RenderNode;

/// Where the master class list comes from
pub trait ClassSource {
    /// Fetch and decode the whole class list in one request
    async fn fetch_classes(&self) -> Result<Vec<ClassRecord>>;
}

/// The element the selection is rendered into
pub trait Container {
    /// Drop every existing child and materialise `nodes` in order
    fn replace_children(&mut self, nodes: &[RenderNode]) -> Result<()>;

    /// Values of the checked class checkboxes, in document order
    fn checked_values(&self) -> Result<Vec<String>>;
}

/// Called with the current selection every time a checkbox changes
pub trait SelectionHook {
    fn on_selection_change(&self, selected: &[SelectedClass]);
}

/// Hook that does nothing beyond the tracker's own logging
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHook;

impl SelectionHook for NoHook {
    fn on_selection_change(&self, _selected: &[SelectedClass]) {}
}

impl<F> SelectionHook for F
where
    F: Fn(&[SelectedClass]),
{
    fn on_selection_change(&self, selected: &[SelectedClass]) {
        self(selected)
    }
}
