use gpui::{
    App, CursorStyle, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce,
    SharedString, StatefulInteractiveElement, Styled, Window, div,
    prelude::FluentBuilder, px, relative, svg,
};
use gpui_squircle::{SquircleStyled, squircle};
use gpui_transitions::Lerp;

use crate::{
    FormsIconKind,
    components::{CheckboxGroupContext, CheckboxGroupStatus, GroupStatusConsumer},
    primitives::FocusRing,
    theme::{ThemeExt, ThemeFontExt, ThemeGapKind, ThemeLayerKind, ThemeTextSizeKind},
    utils::{
        BorderPalette, ElementIdExt, InteractionState, RgbaExt, border_transition,
        checked_transition, disabled_transition,
    },
};

/// A checkable item, usually placed inside a [`CheckboxGroup`](crate::components::CheckboxGroup).
///
/// Without an explicit [`status`](Self::status) the checkbox adopts the status of
/// the group it is rendered in.
#[derive(IntoElement)]
pub struct Checkbox {
    id: ElementId,
    icon: SharedString,
    label: Option<SharedString>,
    layer: ThemeLayerKind,
    checked: bool,
    disabled: bool,
    status: Option<CheckboxGroupStatus>,
    on_click: Option<Box<dyn Fn(&bool, &mut Window, &mut App) + 'static>>,
}

impl Checkbox {
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            icon: FormsIconKind::Checkmark.into(),
            label: None,
            layer: ThemeLayerKind::Tertiary,
            checked: false,
            disabled: false,
            status: None,
            on_click: None,
        }
    }

    pub fn icon(mut self, icon: impl Into<SharedString>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn layer(mut self, layer: ThemeLayerKind) -> Self {
        self.layer = layer;
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Fixes the status, ignoring the enclosing group's status.
    pub fn status(mut self, status: CheckboxGroupStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn on_click(mut self, on_click: impl Fn(&bool, &mut Window, &mut App) + 'static) -> Self {
        self.on_click = Some(Box::new(on_click));
        self
    }

    fn handle_on_click(
        window: &mut Window,
        cx: &mut App,
        checked: bool,
        on_click: Option<&Box<dyn Fn(&bool, &mut Window, &mut App) + 'static>>,
    ) {
        if let Some(on_click) = on_click {
            (on_click)(&checked, window, cx)
        }
    }
}

impl GroupStatusConsumer for Checkbox {
    fn consume_group_status(mut self, context: &CheckboxGroupContext) -> Self {
        self.status = context.resolve(self.status);
        self
    }
}

impl RenderOnce for Checkbox {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let size = cx.get_theme().layout.size.md;
        let corner_radius = cx.get_theme().layout.corner_radii.sm;
        let primary_accent_color = cx.get_theme().variants.active(cx).colors.accent.primary;
        let primary_text_color = cx.get_theme().variants.active(cx).colors.text.primary;
        let status = self.status.unwrap_or_default();
        let background_color = self.layer.resolve(cx);
        let border_color = status.border_color(cx, self.layer.next().resolve(cx));
        let border_palette = BorderPalette {
            idle: border_color,
            hover: border_color.lerp(&primary_text_color, 0.07),
            click_down: border_color.lerp(&primary_text_color, 0.16),
            focus: primary_accent_color,
        };

        let checked_transition = checked_transition(self.id.clone(), window, cx, self.checked);

        let is_disabled = self.disabled;

        let is_hover_state =
            window.use_keyed_state(self.id.with_suffix("state:hover"), cx, |_window, _cx| false);
        let is_hover = *is_hover_state.read(cx);

        let is_click_down_state = window.use_keyed_state(
            self.id.with_suffix("state:click_down"),
            cx,
            |_window, _cx| false,
        );
        let is_click_down = *is_click_down_state.read(cx);

        let focus_handle = window
            .use_keyed_state(
                self.id.with_suffix("state:focus_handle"),
                cx,
                |_window, cx| cx.focus_handle().tab_stop(true),
            )
            .read(cx)
            .clone();
        let is_focus = focus_handle.is_focused(window);

        let disabled_transition = disabled_transition(self.id.clone(), window, cx, is_disabled);

        if is_focus && is_disabled {
            window.blur();
        }

        let border_color_transition = border_transition(
            self.id.clone(),
            window,
            cx,
            &border_palette,
            InteractionState {
                focused: is_focus,
                click_down: is_click_down,
                hovered: is_hover,
            },
        );

        let checked_delta = *checked_transition.evaluate(window, cx);

        let check_box = div()
            .relative()
            .size(size)
            .min_w(size)
            .min_h(size)
            .flex()
            .items_center()
            .justify_center()
            .child(
                FocusRing::new(self.id.with_suffix("focus_ring"), focus_handle.clone())
                    .rounded(corner_radius),
            )
            .child(
                squircle()
                    .absolute_expand()
                    .rounded(corner_radius)
                    .bg(background_color)
                    .border(px(1.))
                    .border_inside()
                    .border_color(*border_color_transition.evaluate(window, cx)),
            )
            .child(
                squircle()
                    .absolute_expand()
                    .rounded(corner_radius)
                    .bg(primary_accent_color.alpha(checked_delta)),
            )
            .child(
                svg()
                    .size(relative(0.48))
                    .text_color(primary_text_color.alpha(checked_delta))
                    .path(self.icon.clone()),
            );

        div()
            .id(self.id.clone())
            .cursor(if is_disabled {
                CursorStyle::OperationNotAllowed
            } else {
                CursorStyle::PointingHand
            })
            .flex()
            .items_center()
            .gap(ThemeGapKind::Md.resolve(cx))
            .opacity(*disabled_transition.evaluate(window, cx))
            .child(check_box)
            .when_some(self.label.clone(), |this, label| {
                this.child(
                    div()
                        .theme_font(cx)
                        .text_size(ThemeTextSizeKind::Body.resolve(cx))
                        .font_weight(ThemeTextSizeKind::Body.weight(cx))
                        .text_color(primary_text_color)
                        .child(label),
                )
            })
            .when(!is_disabled, |this| {
                let is_hover_state_on_hover = is_hover_state.clone();
                let is_click_down_state_on_mouse_down = is_click_down_state.clone();
                let is_click_down_state_on_click = is_click_down_state.clone();

                this.on_hover(move |hover, _window, cx| {
                    is_hover_state_on_hover.update(cx, |this, _cx| *this = *hover);
                    cx.notify(is_hover_state_on_hover.entity_id());
                })
                .on_mouse_down(gpui::MouseButton::Left, move |_, window, cx| {
                    // Prevents focus ring from appearing when clicked.
                    window.prevent_default();

                    is_click_down_state_on_mouse_down.update(cx, |this, _cx| *this = true);
                    cx.notify(is_click_down_state_on_mouse_down.entity_id());
                })
                .on_click({
                    move |_, window, cx| {
                        window.prevent_default();

                        if !is_focus {
                            // We only want to blur if something else may be focused.
                            window.blur();
                        }

                        is_click_down_state_on_click.update(cx, |this, _cx| *this = false);
                        cx.notify(is_click_down_state_on_click.entity_id());

                        Self::handle_on_click(window, cx, !self.checked, self.on_click.as_ref());
                    }
                })
                .on_mouse_up_out(gpui::MouseButton::Left, move |_event, _window, cx| {
                    // Clean up when the mouse goes down on the checkbox, leaves it, then goes up.
                    is_hover_state.update(cx, |this, _cx| *this = false);
                    cx.notify(is_hover_state.entity_id());

                    is_click_down_state.update(cx, |this, _cx| *this = false);
                    cx.notify(is_click_down_state.entity_id());
                })
                .track_focus(&focus_handle)
            })
    }
}
