use gpui::{ElementId, FocusHandle, IntoElement, Pixels, RenderOnce, div, prelude::*, px};
use gpui_squircle::{SquircleStyled, squircle};

use crate::{
    theme::ThemeExt,
    utils::{RgbaExt, focus_transition},
};

const SIZE_SCALE_FACTOR: f32 = 8.;

/// An animated ring drawn around a focused control.
///
/// The ring grows in from a larger outline and fades in as focus arrives.
#[derive(IntoElement)]
pub struct FocusRing {
    id: ElementId,
    focus_handle: FocusHandle,
    corner_radius: Pixels,
}

impl FocusRing {
    pub fn new(id: impl Into<ElementId>, focus_handle: FocusHandle) -> Self {
        Self {
            id: id.into(),
            focus_handle,
            corner_radius: px(8.),
        }
    }

    pub fn rounded(mut self, corner_radius: Pixels) -> Self {
        self.corner_radius = corner_radius;
        self
    }
}

impl RenderOnce for FocusRing {
    fn render(self, window: &mut gpui::Window, cx: &mut gpui::App) -> impl IntoElement {
        let border_focus_color = cx.get_theme().variants.active(cx).colors.accent.primary;
        let is_focused = self.focus_handle.is_focused(window);

        let ring_progress = focus_transition(self.id.clone(), window, cx, is_focused);
        let delta = *ring_progress.evaluate(window, cx);
        let size_factor = (1. - delta) * SIZE_SCALE_FACTOR;

        div()
            .absolute()
            .top(px(-size_factor))
            .bottom(px(-size_factor))
            .left(px(-size_factor))
            .right(px(-size_factor))
            .child(
                squircle()
                    .absolute_expand()
                    .rounded(self.corner_radius + px(size_factor + 1.))
                    .border(px(3.))
                    .border_outside()
                    .border_color(border_focus_color.alpha(delta * 0.3)),
            )
    }
}
