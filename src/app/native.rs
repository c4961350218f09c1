//! No-WASM application implementation
//!
//! Drives the same load/render/select pipeline as the browser build against
//! an in-memory container, plus the catalog builder commands.

use std::path::Path;

use crate::catalog::{self, PopulateReport};
use crate::client::NativeSource;
use crate::config::AppConfig;
use crate::container::MemoryContainer;
use crate::error::{ErrorKind, Result};
use crate::interface::SelectionHook;
use crate::model::{decode_class_list, ClassRecord, SelectedClass};
use crate::selection::SelectionTracker;

use super::fetch_master_classes;

/// Result of [`show`]: the rendered container and the selection read back from it
#[derive(Debug, Clone)]
pub struct ShowOutcome {
    pub container: MemoryContainer,
    pub classes: Vec<ClassRecord>,
    pub selected: Vec<SelectedClass>,
}

/// Loads the class list from `config.resource_url`, renders it, checks the
/// given checkbox ids and reads the selection back through the tracker.
pub async fn show<H>(config: &AppConfig, check: &[String], hook: H) -> Result<ShowOutcome>
where
    H: SelectionHook,
{
    let source = NativeSource::from_location(&config.resource_url)?;
    let mut container = MemoryContainer::new(config.container_id.as_str());
    let tracker = SelectionTracker::new(hook);

    let classes = fetch_master_classes(&source, Some(&mut container)).await;

    for checkbox_id in check {
        if container.set_checked(checkbox_id, true) {
            tracker.handle_selection_change(&container);
        } else {
            log::warn!("No checkbox with id {}", checkbox_id);
        }
    }
    let selected = tracker.handle_selection_change(&container);

    Ok(ShowOutcome {
        container,
        classes,
        selected,
    })
}

/// Parses the schedule page at `html_path` and writes the class list to
/// `output`, every class starting with an empty wine list.
pub fn parse_schedule(html_path: &Path, output: &Path) -> Result<Vec<ClassRecord>> {
    if !html_path.is_file() {
        return Err(ErrorKind::ParseError(format!("{} not found", html_path.display())).into());
    }

    let html = std::fs::read_to_string(html_path)?;
    let mut classes = catalog::parse_html_classes(&html)?;
    if classes.is_empty() {
        return Err(ErrorKind::ParseError(format!(
            "no master class data was extracted from {}",
            html_path.display()
        ))
        .into());
    }

    for class in &mut classes {
        class.wines = Some(Vec::new());
    }
    write_classes(output, &classes)?;
    log::info!("Saved {} classes to {}", classes.len(), output.display());
    Ok(classes)
}

/// Reads `json_path`, fills in wines from the pages in `pages_dir` and writes
/// the list back.
pub fn populate_wines(json_path: &Path, pages_dir: &Path) -> Result<PopulateReport> {
    let body = std::fs::read_to_string(json_path)?;
    let mut classes = decode_class_list(&body)?;

    let report = catalog::populate_wines(&mut classes, pages_dir);
    write_classes(json_path, &classes)?;
    log::info!(
        "Updated {} classes with wines, saved to {}",
        report.updated,
        json_path.display()
    );
    Ok(report)
}

fn write_classes(path: &Path, classes: &[ClassRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(classes)?;
    std::fs::write(path, json)?;
    Ok(())
}
