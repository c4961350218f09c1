//! Render instructions for the master class selection
//!
//! The renderer never touches a document directly. It turns day groups into
//! a list of [`RenderNode`]s which a [`Container`](crate::interface::Container)
//! then materialises, either as DOM nodes in the browser or in memory.

use regex::Regex;

use crate::error::Result;
use crate::schedule::DayGroup;

pub const CHECKBOX_ID_PREFIX: &str = "mc-checkbox";

/// Top-level child of the selection container
#[derive(Debug, Clone, PartialEq)]
pub enum RenderNode {
    /// Placeholder text shown while the class list is loading
    Notice(String),
    /// Message shown when loading failed
    Error(String),
    /// `div.day-section` with an `h3` heading and a `ul.master-class-list`
    DaySection { heading: String, items: Vec<ClassItem> },
}

/// One checkbox and its label inside a day section
#[derive(Debug, Clone, PartialEq)]
pub struct ClassItem {
    pub checkbox_id: String,
    pub label: String,
    /// Reduced identity payload (`{title, presenter, link}` as JSON)
    pub value: String,
    /// Whole record as JSON, kept for features built on top of the selection
    pub class_info: String,
}

impl RenderNode {
    pub fn is_day_section(&self) -> bool {
        matches!(self, RenderNode::DaySection { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, RenderNode::Error(_))
    }
}

/// Builds one day section per group, preserving group and class order
pub fn render_day_sections(groups: &[DayGroup<'_>]) -> Result<Vec<RenderNode>> {
    let whitespace = Regex::new(r"\s+")?;

    groups
        .iter()
        .map(|group| -> Result<RenderNode> {
            let slug = whitespace.replace_all(&group.day, "-");
            let items = group
                .classes
                .iter()
                .enumerate()
                .map(|(index, class)| -> Result<ClassItem> {
                    Ok(ClassItem {
                        checkbox_id: format!("{CHECKBOX_ID_PREFIX}-{slug}-{index}"),
                        label: class.label(),
                        value: serde_json::to_string(&class.identity())?,
                        class_info: serde_json::to_string(class)?,
                    })
                })
                .collect::<Result<Vec<_>>>()?;

            Ok(RenderNode::DaySection {
                heading: group.day.clone(),
                items,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClassRecord, SelectedClass};
    use crate::schedule::group_by_day;

    fn class(day: &str, time: &str, presenter: &str, title: &str, link: &str) -> ClassRecord {
        ClassRecord {
            day: Some(day.into()),
            time: Some(time.into()),
            presenter: Some(presenter.into()),
            title: Some(title.into()),
            link: Some(link.into()),
            ..Default::default()
        }
    }

    #[test]
    fn sections_follow_day_and_time_order() {
        let classes = vec![
            class("Mon", "10:00", "A", "X", "l1"),
            class("Mon", "09:00", "B", "Y", "l2"),
            class("Tue", "08:00", "C", "Z", "l3"),
        ];

        let nodes = render_day_sections(&group_by_day(&classes)).unwrap();
        let summary: Vec<(String, Vec<String>)> = nodes
            .iter()
            .map(|node| match node {
                RenderNode::DaySection { heading, items } => (
                    heading.clone(),
                    items.iter().map(|i| i.label.clone()).collect(),
                ),
                other => panic!("unexpected node {other:?}"),
            })
            .collect();

        assert_eq!(
            summary,
            vec![
                (
                    "Mon".to_string(),
                    vec!["09:00 - B: Y".to_string(), "10:00 - A: X".to_string()]
                ),
                ("Tue".to_string(), vec!["08:00 - C: Z".to_string()]),
            ]
        );
    }

    #[test]
    fn checkbox_ids_replace_whitespace_in_day_names() {
        let classes = vec![
            class("Friday  25 April", "12:00", "A", "X", "l1"),
            class("Friday  25 April", "13:00", "B", "Y", "l2"),
        ];

        let nodes = render_day_sections(&group_by_day(&classes)).unwrap();
        let RenderNode::DaySection { items, .. } = &nodes[0] else {
            panic!("expected a day section");
        };
        assert_eq!(items[0].checkbox_id, "mc-checkbox-Friday-25-April-0");
        assert_eq!(items[1].checkbox_id, "mc-checkbox-Friday-25-April-1");
    }

    #[test]
    fn items_carry_identity_and_full_record() {
        let mut record = class("Mon", "10:00", "A", "X", "l1");
        record.wines = Some(vec!["Brut Réserve".into()]);
        let classes = vec![record.clone()];

        let nodes = render_day_sections(&group_by_day(&classes)).unwrap();
        let RenderNode::DaySection { items, .. } = &nodes[0] else {
            panic!("expected a day section");
        };

        let identity: SelectedClass = serde_json::from_str(&items[0].value).unwrap();
        assert_eq!(identity, record.identity());
        let info: ClassRecord = serde_json::from_str(&items[0].class_info).unwrap();
        assert_eq!(info, record);
    }
}
