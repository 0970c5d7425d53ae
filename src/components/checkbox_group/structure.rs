use gpui::SharedString;

use super::{CheckboxGroupConfig, CheckboxGroupContext, CheckboxGroupStatus};
use crate::{
    components::LabelMode,
    utils::{AccessibilityLink, status_text_id},
};

/// The regions a checkbox group renders, resolved from its configuration.
///
/// ```text
/// wrapper (id)
/// ├── field group
/// │   ├── legend: label, hint text?, status link?
/// │   └── content: children inside the status provider
/// └── status text (id-statusText when non-empty)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CheckboxGroupStructure {
    pub id: SharedString,
    pub legend: LegendRegion,
    pub context: CheckboxGroupContext,
    pub status_text: StatusTextRegion,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendRegion {
    pub label: LabelRegion,
    pub hint_text: Option<SharedString>,
    pub status_link: Option<AccessibilityLink>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelRegion {
    pub text: SharedString,
    pub optional_text: Option<SharedString>,
    pub mode: LabelMode,
    /// The id of the element this label describes.
    pub for_id: SharedString,
}

impl LabelRegion {
    pub fn is_visually_hidden(&self) -> bool {
        self.mode == LabelMode::Hidden
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StatusTextRegion {
    pub id: Option<SharedString>,
    pub text: Option<SharedString>,
    pub status: CheckboxGroupStatus,
}

impl StatusTextRegion {
    pub fn has_content(&self) -> bool {
        self.text.as_ref().is_some_and(|text| !text.is_empty())
    }
}

impl CheckboxGroupStructure {
    pub fn resolve(config: &CheckboxGroupConfig, id: SharedString) -> Self {
        let status_text = config.non_empty_status_text().cloned();
        let status_text_id = status_text.as_ref().map(|_| status_text_id(&id));

        Self {
            legend: LegendRegion {
                label: LabelRegion {
                    text: config.label_text.clone(),
                    optional_text: config.optional_text.clone(),
                    mode: config.label_mode,
                    for_id: id.clone(),
                },
                hint_text: config.non_empty_hint_text().cloned(),
                status_link: AccessibilityLink::labelled_by([status_text_id.as_ref()]),
            },
            context: CheckboxGroupContext::new(config.status),
            status_text: StatusTextRegion {
                id: status_text_id,
                text: status_text,
                status: config.status,
            },
            id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(json: &str) -> CheckboxGroupConfig {
        CheckboxGroupConfig::from_json(json).unwrap()
    }

    #[test]
    fn test_without_status_text() {
        let structure = CheckboxGroupStructure::resolve(
            &config(r#"{ "labelText": "Pick options" }"#),
            "auto-id-3".into(),
        );

        assert_eq!(&*structure.legend.label.text, "Pick options");
        assert!(!structure.legend.label.is_visually_hidden());
        assert_eq!(structure.legend.hint_text, None);
        assert_eq!(structure.legend.status_link, None);
        assert_eq!(structure.status_text.id, None);
        assert!(!structure.status_text.has_content());
        assert_eq!(
            structure.context,
            CheckboxGroupContext::new(CheckboxGroupStatus::Default)
        );
    }

    #[test]
    fn test_error_with_status_text() {
        let structure = CheckboxGroupStructure::resolve(
            &config(
                r#"{
                    "labelText": "Pick options",
                    "groupStatus": "error",
                    "groupStatusText": "Required",
                    "id": "g1"
                }"#,
            ),
            "g1".into(),
        );

        assert_eq!(structure.status_text.id.as_deref(), Some("g1-statusText"));
        assert_eq!(
            structure.legend.status_link,
            Some(AccessibilityLink {
                labelled_by: "g1-statusText".into()
            })
        );
        assert_eq!(structure.status_text.text.as_deref(), Some("Required"));
        assert_eq!(structure.status_text.status, CheckboxGroupStatus::Error);
        assert_eq!(structure.context.status, Some(CheckboxGroupStatus::Error));
    }

    #[test]
    fn test_empty_status_text_is_not_linked() {
        let structure = CheckboxGroupStructure::resolve(
            &config(r#"{ "labelText": "Pick options", "groupStatusText": "" }"#),
            "g2".into(),
        );

        assert_eq!(structure.status_text.id, None);
        assert_eq!(structure.legend.status_link, None);
    }

    #[test]
    fn test_link_always_targets_status_text_id() {
        for id in ["a", "group-7", "auto-id-42"] {
            let mut config = CheckboxGroupConfig::new("Label");
            config.status_text = Some("Something went wrong".into());

            let structure = CheckboxGroupStructure::resolve(&config, id.into());
            let link = structure.legend.status_link.expect("status text is present");

            assert_eq!(Some(link.labelled_by), structure.status_text.id);
            assert_eq!(
                structure.status_text.id.as_deref(),
                Some(format!("{id}-statusText").as_str())
            );
        }
    }

    #[test]
    fn test_hidden_label_stays_in_structure() {
        let structure = CheckboxGroupStructure::resolve(
            &config(r#"{ "labelText": "Pick options", "labelMode": "hidden" }"#),
            "g3".into(),
        );

        assert!(structure.legend.label.is_visually_hidden());
        assert_eq!(&*structure.legend.label.text, "Pick options");
        assert_eq!(&*structure.legend.label.for_id, "g3");
    }

    #[test]
    fn test_hint_and_optional_text() {
        let structure = CheckboxGroupStructure::resolve(
            &config(
                r#"{
                    "labelText": "Pick options",
                    "groupHintText": "Choose any",
                    "optionalText": "optional"
                }"#,
            ),
            "g4".into(),
        );

        assert_eq!(structure.legend.hint_text.as_deref(), Some("Choose any"));
        assert_eq!(
            structure.legend.label.optional_text.as_deref(),
            Some("optional")
        );
    }
}
