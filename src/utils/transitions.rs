use std::time::Duration;

use gpui::{App, ElementId, Rgba, Window, ease_out_quint};
use gpui_transitions::{Transition, WindowUseTransition};

use crate::ElementIdExt;

const STATE_DURATION: Duration = Duration::from_millis(365);
const CHECKED_DURATION: Duration = Duration::from_millis(285);
const DISABLED_OPACITY: f32 = 0.45;

// Restarts the keyed transition whenever the goal it is heading for changes.
macro_rules! towards_goal {
    ($id:expr, $window:expr, $cx:expr, $duration:expr, $goal:expr) => {{
        let goal = $goal;

        let transition = $window
            .use_keyed_transition($id, $cx, $duration, move |_window, _cx| goal)
            .with_easing(ease_out_quint());

        if transition.read_goal($cx) != &goal {
            transition.update($cx, |this, _cx| *this = goal);
            $cx.notify(transition.entity_id());
        }

        transition
    }};
}

/// Pointer and focus state of an interactive control.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InteractionState {
    pub focused: bool,
    pub click_down: bool,
    pub hovered: bool,
}

/// The border colors a control settles on for each interaction state.
///
/// `idle` already carries the validation status, so an errored control keeps its
/// error border until it is hovered, pressed or focused.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderPalette {
    pub idle: Rgba,
    pub hover: Rgba,
    pub click_down: Rgba,
    pub focus: Rgba,
}

impl BorderPalette {
    /// Focus beats click-down, which beats hover.
    pub fn pick(&self, state: InteractionState) -> Rgba {
        if state.focused {
            self.focus
        } else if state.click_down {
            self.click_down
        } else if state.hovered {
            self.hover
        } else {
            self.idle
        }
    }
}

pub fn disabled_transition(
    base_id: impl Into<ElementId>,
    window: &mut Window,
    cx: &mut App,
    is_disabled: bool,
) -> Transition<f32> {
    towards_goal!(
        base_id.into().with_suffix("state:transition:disabled"),
        window,
        cx,
        STATE_DURATION,
        if is_disabled { DISABLED_OPACITY } else { 1_f32 }
    )
}

pub fn checked_transition(
    base_id: impl Into<ElementId>,
    window: &mut Window,
    cx: &mut App,
    is_checked: bool,
) -> Transition<f32> {
    towards_goal!(
        base_id.into().with_suffix("state:checked"),
        window,
        cx,
        CHECKED_DURATION,
        if is_checked { 1_f32 } else { 0_f32 }
    )
}

pub fn focus_transition(
    id: impl Into<ElementId>,
    window: &mut Window,
    cx: &mut App,
    is_focused: bool,
) -> Transition<f32> {
    towards_goal!(
        id.into(),
        window,
        cx,
        STATE_DURATION,
        if is_focused { 1_f32 } else { 0_f32 }
    )
}

pub fn border_transition(
    base_id: impl Into<ElementId>,
    window: &mut Window,
    cx: &mut App,
    palette: &BorderPalette,
    state: InteractionState,
) -> Transition<Rgba> {
    towards_goal!(
        base_id.into().with_suffix("state:transition:border_color"),
        window,
        cx,
        STATE_DURATION,
        palette.pick(state)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::rgba;

    fn palette() -> BorderPalette {
        BorderPalette {
            idle: rgba(0xff0000ff),
            hover: rgba(0x00ff00ff),
            click_down: rgba(0x0000ffff),
            focus: rgba(0xffffffff),
        }
    }

    #[test]
    fn test_idle_border_keeps_status_color() {
        assert_eq!(palette().pick(InteractionState::default()), rgba(0xff0000ff));
    }

    #[test]
    fn test_border_priority() {
        let palette = palette();

        let hovered = InteractionState {
            hovered: true,
            ..Default::default()
        };
        assert_eq!(palette.pick(hovered), palette.hover);

        let pressed = InteractionState {
            click_down: true,
            ..hovered
        };
        assert_eq!(palette.pick(pressed), palette.click_down);

        let focused = InteractionState {
            focused: true,
            ..pressed
        };
        assert_eq!(palette.pick(focused), palette.focus);
    }
}
