use gpui::SharedString;
use serde::{Deserialize, Serialize};

use super::CheckboxGroupStatus;
use crate::{Error, components::LabelMode};

/// Everything a checkbox group renders apart from its children.
///
/// Field names follow the camelCase form used by form definitions, e.g.
/// `{"labelText": "Pick options", "groupStatus": "error"}`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CheckboxGroupConfig {
    pub label_text: SharedString,
    #[serde(default, rename = "groupHintText")]
    pub hint_text: Option<SharedString>,
    #[serde(default, rename = "groupStatus")]
    pub status: CheckboxGroupStatus,
    #[serde(default, rename = "groupStatusText")]
    pub status_text: Option<SharedString>,
    #[serde(default)]
    pub label_mode: LabelMode,
    #[serde(default)]
    pub optional_text: Option<SharedString>,
    #[serde(default)]
    pub id: Option<SharedString>,
}

impl CheckboxGroupConfig {
    pub fn new(label_text: impl Into<SharedString>) -> Self {
        Self {
            label_text: label_text.into(),
            ..Default::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(Error::Config)
    }

    /// Status text with surrounding content, if any.
    pub fn non_empty_status_text(&self) -> Option<&SharedString> {
        self.status_text.as_ref().filter(|text| !text.is_empty())
    }

    pub fn non_empty_hint_text(&self) -> Option<&SharedString> {
        self.hint_text.as_ref().filter(|text| !text.is_empty())
    }
}
