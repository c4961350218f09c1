use serde::{Deserialize, Serialize};

/// Identity payload stored as the value of each class checkbox.
///
/// Missing fields are written as `null`, so every payload has all three keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SelectedClass {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub presenter: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}
