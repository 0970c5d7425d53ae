use gpui::{
    App, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString,
    Styled, Window, div, prelude::FluentBuilder,
};

use crate::{
    components::CheckboxGroupStatus,
    theme::{ThemeFontExt, ThemeGapKind, ThemeTextSizeKind},
};

/// Status text rendered under a form control.
///
/// The region is always rendered so the layout does not jump when a message
/// appears. Only non-empty text gets an id.
#[derive(IntoElement)]
pub struct StatusText {
    id: Option<SharedString>,
    text: Option<SharedString>,
    status: CheckboxGroupStatus,
}

impl StatusText {
    pub fn new() -> Self {
        Self {
            id: None,
            text: None,
            status: CheckboxGroupStatus::Default,
        }
    }

    pub fn id(mut self, id: Option<SharedString>) -> Self {
        self.id = id;
        self
    }

    pub fn text(mut self, text: Option<SharedString>) -> Self {
        self.text = text;
        self
    }

    pub fn status(mut self, status: CheckboxGroupStatus) -> Self {
        self.status = status;
        self
    }

    pub fn has_content(&self) -> bool {
        self.text.as_ref().is_some_and(|text| !text.is_empty())
    }
}

impl Default for StatusText {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOnce for StatusText {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let has_content = self.has_content();
        let text_color = self.status.text_color(cx);

        let text = div()
            .theme_font(cx)
            .text_size(ThemeTextSizeKind::Caption.resolve(cx))
            .font_weight(ThemeTextSizeKind::Caption.weight(cx))
            .text_color(text_color)
            .when(has_content, |this| this.mt(ThemeGapKind::Sm.resolve(cx)))
            .when_some(self.text.filter(|_| has_content), |this, text| {
                this.child(text)
            });

        match self.id.filter(|_| has_content) {
            Some(id) => text.id(ElementId::Name(id)).into_any_element(),
            None => text.into_any_element(),
        }
    }
}
