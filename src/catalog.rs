//! Catalog builder - produces `master_classes.json` from the festival pages
//!
//! The schedule page lists every class per day as
//! `HH:MM – Presenter: <a href="link">Title</a>`; each class then has its
//! own page with the list of champagnes poured.

use regex::Regex;

use crate::error::Result;
use crate::model::ClassRecord;

const DAY_SECTION_PATTERN: &str = r#"(?is)<div class="fusion-menu-anchor" id="mc(torstai|perjantai|lauantai)"></div>.*?<h3><strong>(.*?)</strong></h3>.*?<div class="fusion-text.*?">(.*?)</div>"#;
const LINKED_CLASS_PATTERN: &str = r#"(?is)(\d{2}:\d{2})\s*–\s*(.*?):\s*<a href="(.*?)">(.*?)</a>"#;
const PLAIN_CLASS_PATTERN: &str = r"(\d{2}:\d{2})\s*–\s*(.*?):\s*(.*)";
const WINE_LIST_PATTERN: &str = r"(?is)(?:<p><strong>Maisteltavat samppanjat:</strong></p>|<p><strong>Champagnes:</strong></p>).*?<ul>(.*?)</ul>";

/// Compiled patterns for the schedule page
struct SchedulePatterns {
    day_section: Regex,
    paragraph: Regex,
    line_break: Regex,
    linked_class: Regex,
    plain_class: Regex,
    clock: Regex,
    tag: Regex,
}

impl SchedulePatterns {
    fn new() -> Result<Self> {
        Ok(Self {
            day_section: Regex::new(DAY_SECTION_PATTERN)?,
            paragraph: Regex::new(r"(?is)<p>(.*?)</p>")?,
            line_break: Regex::new(r"(?i)\s*<br\s*/?>\s*")?,
            linked_class: Regex::new(LINKED_CLASS_PATTERN)?,
            plain_class: Regex::new(PLAIN_CLASS_PATTERN)?,
            clock: Regex::new(r"\d{2}:\d{2}")?,
            tag: Regex::new(r"<.*?>")?,
        })
    }

    fn strip_tags(&self, text: &str) -> String {
        self.tag.replace_all(text, "").trim().to_string()
    }

    /// Lines that are sold out, commented out or carry no time are not classes
    fn is_skippable(&self, line: &str) -> bool {
        line.to_uppercase().contains("SOLD OUT")
            || line.starts_with("//")
            || !self.clock.is_match(line)
    }

    fn parse_line(&self, day: &str, line: &str) -> Option<ClassRecord> {
        if let Some(caps) = self.linked_class.captures(line) {
            return Some(ClassRecord {
                day: Some(day.to_string()),
                time: Some(caps[1].trim().to_string()),
                presenter: Some(self.strip_tags(&caps[2])),
                title: Some(self.strip_tags(&caps[4])),
                link: Some(caps[3].trim().to_string()),
                ..Default::default()
            });
        }

        if self.is_skippable(line) {
            return None;
        }

        match self.plain_class.captures(line) {
            Some(caps) => Some(ClassRecord {
                day: Some(day.to_string()),
                time: Some(caps[1].trim().to_string()),
                presenter: Some(self.strip_tags(&caps[2])),
                title: Some(self.strip_tags(&caps[3])),
                link: None,
                ..Default::default()
            }),
            None => {
                let preview: String = line.chars().take(100).collect();
                log::warn!("Could not parse line in {} section: {}...", day, preview);
                None
            }
        }
    }
}

/// Extracts every master class from the schedule page HTML.
///
/// Returns an empty list when the page has no recognisable day sections.
pub fn parse_html_classes(html: &str) -> Result<Vec<ClassRecord>> {
    let patterns = SchedulePatterns::new()?;
    let mut classes = Vec::new();
    let mut found_section = false;

    for section in patterns.day_section.captures_iter(html) {
        found_section = true;
        let day = section[2].trim();
        log::info!("Processing day section: {} (tag: {})", day, &section[1]);

        let mut paragraphs = patterns.paragraph.captures_iter(&section[3]).peekable();
        if paragraphs.peek().is_none() {
            log::warn!("No paragraphs found for {}", day);
            continue;
        }

        for paragraph in paragraphs {
            for line in patterns.line_break.split(paragraph[1].trim()) {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                if let Some(class) = patterns.parse_line(day, line) {
                    classes.push(class);
                }
            }
        }
    }

    if !found_section {
        log::warn!("Could not find day sections in the schedule page");
    }
    log::info!("Found {} potential classes", classes.len());
    Ok(classes)
}

/// Extracts the champagnes listed on a single master class page
pub fn extract_wines(html: &str) -> Result<Vec<String>> {
    let wine_list = Regex::new(WINE_LIST_PATTERN)?;
    let list_item = Regex::new(r"(?is)<li.*?>(.*?)</li>")?;
    let tag = Regex::new(r"<.*?>")?;

    let Some(list) = wine_list.captures(html) else {
        return Ok(Vec::new());
    };

    Ok(list_item
        .captures_iter(&list[1])
        .map(|item| {
            tag.replace_all(&item[1], "")
                .trim()
                .replace("&amp;", "&")
                .replace("&#8211;", "–")
        })
        .filter(|wine| !wine.is_empty())
        .collect())
}

/// Class detail page named after the 1-based position of the class in the list
pub fn page_file_name(index: usize) -> String {
    format!("master_class_{}.html", index + 1)
}

/// A class whose detail page has not been downloaded yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingPage {
    pub file_name: String,
    pub link: String,
}

impl MissingPage {
    pub fn download_command(&self) -> String {
        format!("curl -L -o \"{}\" \"{}\"", self.file_name, self.link)
    }
}

/// Outcome of [`populate_wines`]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PopulateReport {
    pub updated: usize,
    pub missing: Vec<MissingPage>,
}

#[cfg(feature = "no-wasm")]
pub use populate::populate_wines;

#[cfg(feature = "no-wasm")]
mod populate {
    use std::path::Path;

    use super::{extract_wines, page_file_name, MissingPage, PopulateReport};
    use crate::error::Result;
    use crate::model::ClassRecord;

    /// Fills in `wines` from the downloaded class pages in `pages_dir`.
    ///
    /// Classes that already have wines are left alone. Every class ends up
    /// with a wine list, empty when its page is missing or unreadable; pages
    /// that are missing but have a link are reported for download.
    pub fn populate_wines(classes: &mut [ClassRecord], pages_dir: &Path) -> PopulateReport {
        let mut report = PopulateReport::default();

        for (index, class) in classes.iter_mut().enumerate() {
            let file_name = page_file_name(index);
            let path = pages_dir.join(&file_name);
            let title = class.title.clone().unwrap_or_else(|| format!("Class {}", index + 1));

            if !path.is_file() {
                class.wines.get_or_insert_with(Vec::new);
                if let Some(link) = class.link.as_deref().filter(|l| !l.is_empty()) {
                    log::info!("Missing file: {} for '{}'", file_name, title);
                    report.missing.push(MissingPage {
                        file_name,
                        link: link.to_string(),
                    });
                }
                continue;
            }

            if class.wines.as_ref().is_some_and(|w| !w.is_empty()) {
                continue;
            }

            match read_wines(&path) {
                Ok(wines) if wines.is_empty() => {
                    log::info!("No wine list found in {} for '{}'", file_name, title);
                    class.wines = Some(wines);
                }
                Ok(wines) => {
                    log::info!("Found {} wines in {} for '{}'", wines.len(), file_name, title);
                    class.wines = Some(wines);
                    report.updated += 1;
                }
                Err(e) => {
                    log::error!("Error processing {}: {}", file_name, e);
                    class.wines = Some(Vec::new());
                }
            }
        }

        report
    }

    fn read_wines(path: &Path) -> Result<Vec<String>> {
        let html = std::fs::read_to_string(path)?;
        extract_wines(&html)
    }
}
