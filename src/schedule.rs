//! Grouping of master classes into day sections

use std::collections::BTreeMap;

use crate::model::ClassRecord;

/// All classes of one day, ordered by start time
#[derive(Debug, Clone, PartialEq)]
pub struct DayGroup<'a> {
    pub day: String,
    pub classes: Vec<&'a ClassRecord>,
}

/// Partitions `classes` by day.
///
/// Groups come back in ascending order of day name. Inside a group classes
/// are sorted by their time string; the sort is stable, so classes sharing a
/// time keep the order they were fetched in.
pub fn group_by_day(classes: &[ClassRecord]) -> Vec<DayGroup<'_>> {
    let mut by_day: BTreeMap<&str, Vec<&ClassRecord>> = BTreeMap::new();
    for class in classes {
        by_day.entry(class.day_or_default()).or_default().push(class);
    }

    by_day
        .into_iter()
        .map(|(day, mut classes)| {
            classes.sort_by(|a, b| a.time_or_default().cmp(b.time_or_default()));
            DayGroup {
                day: day.to_string(),
                classes,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UNKNOWN_DAY;

    fn class(day: Option<&str>, time: Option<&str>, title: &str) -> ClassRecord {
        ClassRecord {
            day: day.map(str::to_string),
            time: time.map(str::to_string),
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    fn titles<'a>(group: &DayGroup<'a>) -> Vec<&'a str> {
        group
            .classes
            .iter()
            .map(|c| c.title.as_deref().unwrap_or_default())
            .collect()
    }

    #[test]
    fn groups_by_day_and_sorts_by_time() {
        let classes = vec![
            class(Some("Mon"), Some("10:00"), "X"),
            class(Some("Mon"), Some("09:00"), "Y"),
            class(Some("Tue"), Some("08:00"), "Z"),
        ];

        let groups = group_by_day(&classes);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].day, "Mon");
        assert_eq!(titles(&groups[0]), vec!["Y", "X"]);
        assert_eq!(groups[1].day, "Tue");
        assert_eq!(titles(&groups[1]), vec!["Z"]);
    }

    #[test]
    fn days_come_out_alphabetically() {
        let classes = vec![
            class(Some("Torstai"), Some("12:00"), "a"),
            class(Some("Lauantai"), Some("12:00"), "b"),
            class(Some("Perjantai"), Some("12:00"), "c"),
            class(Some("Lauantai"), Some("11:00"), "d"),
        ];

        let days: Vec<_> = group_by_day(&classes)
            .into_iter()
            .map(|g| g.day)
            .collect();
        assert_eq!(days, vec!["Lauantai", "Perjantai", "Torstai"]);
    }

    #[test]
    fn missing_day_and_time_use_defaults() {
        let classes = vec![
            class(None, Some("15:00"), "late"),
            class(None, None, "untimed"),
            class(Some("Mon"), Some("01:00"), "early"),
        ];

        let groups = group_by_day(&classes);
        assert_eq!(groups[0].day, "Mon");
        assert_eq!(groups[1].day, UNKNOWN_DAY);
        assert_eq!(titles(&groups[1]), vec!["untimed", "late"]);
    }

    #[test]
    fn equal_times_keep_fetch_order() {
        let classes = vec![
            class(Some("Mon"), Some("10:00"), "first"),
            class(Some("Mon"), Some("09:00"), "before"),
            class(Some("Mon"), Some("10:00"), "second"),
        ];

        let groups = group_by_day(&classes);
        assert_eq!(titles(&groups[0]), vec!["before", "first", "second"]);
    }

    #[test]
    fn empty_input_has_no_groups() {
        assert!(group_by_day(&[]).is_empty());
    }
}
