use std::fmt;

use crate::config::{CONTAINER_ID, LOADING_MESSAGE};
use crate::error::Result;
use crate::interface::Container;
use crate::render::{ClassItem, RenderNode};

/// In-memory stand-in for the selection container element
#[derive(Debug, Clone)]
pub struct MemoryContainer {
    id: String,
    children: Vec<RenderNode>,
    /// One flag per checkbox, in document order
    checked: Vec<bool>,
}

impl MemoryContainer {
    /// A container in the loading phase, showing only the loading notice
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            children: vec![RenderNode::Notice(LOADING_MESSAGE.to_string())],
            checked: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn children(&self) -> &[RenderNode] {
        &self.children
    }

    pub fn day_sections(&self) -> impl Iterator<Item = &RenderNode> {
        self.children.iter().filter(|node| node.is_day_section())
    }

    pub fn errors(&self) -> impl Iterator<Item = &RenderNode> {
        self.children.iter().filter(|node| node.is_error())
    }

    /// Every checkbox, in document order
    pub fn checkboxes(&self) -> impl Iterator<Item = &ClassItem> {
        self.children
            .iter()
            .filter_map(|node| match node {
                RenderNode::DaySection { items, .. } => Some(items),
                _ => None,
            })
            .flatten()
    }

    fn position(&self, checkbox_id: &str) -> Option<usize> {
        self.checkboxes().position(|item| item.checkbox_id == checkbox_id)
    }

    /// Simulates the user toggling a checkbox.
    ///
    /// Like `getElementById`, only the first checkbox with that id is
    /// toggled. Returns `false` when no checkbox has that id.
    pub fn set_checked(&mut self, checkbox_id: &str, checked: bool) -> bool {
        match self.position(checkbox_id) {
            Some(index) => {
                self.checked[index] = checked;
                true
            }
            None => false,
        }
    }

    /// State of the first checkbox with that id
    pub fn is_checked(&self, checkbox_id: &str) -> bool {
        self.position(checkbox_id).is_some_and(|index| self.checked[index])
    }
}

impl Default for MemoryContainer {
    fn default() -> Self {
        Self::new(CONTAINER_ID)
    }
}

impl Container for MemoryContainer {
    fn replace_children(&mut self, nodes: &[RenderNode]) -> Result<()> {
        self.children = nodes.to_vec();
        self.checked = vec![false; self.checkboxes().count()];
        Ok(())
    }

    fn checked_values(&self) -> Result<Vec<String>> {
        Ok(self
            .checkboxes()
            .zip(&self.checked)
            .filter(|(_, checked)| **checked)
            .map(|(item, _)| item.value.clone())
            .collect())
    }
}

/// Plain-text view of the rendered tree, one line per element
impl fmt::Display for MemoryContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut marks = self.checked.iter();
        for node in &self.children {
            match node {
                RenderNode::Notice(text) => writeln!(f, "{text}")?,
                RenderNode::Error(text) => writeln!(f, "error: {text}")?,
                RenderNode::DaySection { heading, items } => {
                    writeln!(f, "{heading}")?;
                    for item in items {
                        let mark = if marks.next().copied().unwrap_or(false) { 'x' } else { ' ' };
                        writeln!(f, "  [{mark}] {}  ({})", item.label, item.checkbox_id)?;
                    }
                }
            }
        }
        Ok(())
    }
}
