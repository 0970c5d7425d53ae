use gpui::{
    App, ElementId, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div,
    prelude::FluentBuilder,
};
use serde::{Deserialize, Serialize};

use crate::{
    primitives::visually_hidden,
    theme::{ThemeExt, ThemeFontExt, ThemeTextSizeKind},
};

/// Whether a label is drawn or only kept for assistive technology.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelMode {
    #[default]
    Visible,
    Hidden,
}

/// A form control label with an optional "(optional)" marker.
///
/// A hidden label is never removed; it is rendered inside a visually hidden
/// wrapper instead.
#[derive(IntoElement)]
pub struct Label {
    text: SharedString,
    optional_text: Option<SharedString>,
    mode: LabelMode,
    for_id: Option<SharedString>,
}

impl Label {
    pub fn new(text: impl Into<SharedString>) -> Self {
        Self {
            text: text.into(),
            optional_text: None,
            mode: LabelMode::Visible,
            for_id: None,
        }
    }

    /// Text shown in parentheses after the label.
    pub fn optional_text(mut self, optional_text: Option<impl Into<SharedString>>) -> Self {
        self.optional_text = optional_text.map(Into::into);
        self
    }

    pub fn label_mode(mut self, mode: LabelMode) -> Self {
        self.mode = mode;
        self
    }

    /// The id of the control this label describes.
    pub fn for_id(mut self, for_id: impl Into<SharedString>) -> Self {
        self.for_id = Some(for_id.into());
        self
    }

    fn optional_marker(&self) -> Option<SharedString> {
        self.optional_text
            .as_ref()
            .filter(|text| !text.is_empty())
            .map(|text| format!("({text})").into())
    }
}

impl RenderOnce for Label {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let text_color = cx.get_theme().variants.active(cx).colors.text.primary;
        let optional_marker = self.optional_marker();

        let content = div()
            .flex()
            .flex_wrap()
            .items_center()
            .gap_1()
            .theme_font(cx)
            .text_color(text_color)
            .child(
                div()
                    .text_size(ThemeTextSizeKind::Label.resolve(cx))
                    .font_weight(ThemeTextSizeKind::Label.weight(cx))
                    .child(self.text),
            )
            .when_some(optional_marker, |this, marker| {
                this.child(
                    div()
                        .text_size(ThemeTextSizeKind::Body.resolve(cx))
                        .font_weight(ThemeTextSizeKind::Body.weight(cx))
                        .child(marker),
                )
            });

        match self.mode {
            LabelMode::Visible => content.into_any_element(),
            LabelMode::Hidden => {
                let id = match self.for_id {
                    Some(for_id) => ElementId::Name(format!("{for_id}-label").into()),
                    None => ElementId::Name("label".into()),
                };

                visually_hidden().id(id).child(content).into_any_element()
            }
        }
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use gpui::TestAppContext;

    #[gpui::test]
    fn test_label_defaults(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let label = Label::new("Pick options");
            assert_eq!(&*label.text, "Pick options");
            assert_eq!(label.mode, LabelMode::Visible);
            assert!(label.optional_marker().is_none());
        });
    }

    #[gpui::test]
    fn test_optional_text_is_wrapped_in_parentheses(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let label = Label::new("Pick options").optional_text(Some("optional"));
            assert_eq!(label.optional_marker().as_deref(), Some("(optional)"));

            let label = Label::new("Pick options").optional_text(Some(""));
            assert!(label.optional_marker().is_none());
        });
    }

    #[gpui::test]
    fn test_label_mode_serde(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            let mode: LabelMode = serde_json::from_str("\"hidden\"").unwrap();
            assert_eq!(mode, LabelMode::Hidden);
        });
    }
}
