use gpui::{App, IntoElement, ParentElement, RenderOnce, SharedString, Styled, Window, div};

use crate::theme::{ThemeExt, ThemeFontExt, ThemeTextSizeKind};

/// Secondary helper text shown under a label. Empty text renders nothing.
#[derive(IntoElement)]
pub struct HintText {
    text: SharedString,
}

impl HintText {
    pub fn new(text: impl Into<SharedString>) -> Self {
        Self { text: text.into() }
    }
}

impl RenderOnce for HintText {
    fn render(self, _window: &mut Window, cx: &mut App) -> impl IntoElement {
        let text_color = cx.get_theme().variants.active(cx).colors.text.secondary;

        (!self.text.is_empty()).then(|| {
            div()
                .theme_font(cx)
                .text_size(ThemeTextSizeKind::Caption.resolve(cx))
                .font_weight(ThemeTextSizeKind::Caption.weight(cx))
                .text_color(text_color)
                .child(self.text)
        })
    }
}
