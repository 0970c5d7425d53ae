#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::{App, IntoElement, Rgba};
use serde::{Deserialize, Serialize};

use crate::theme::ThemeExt;

/// Validation status shared by a checkbox group and its items.
#[derive(Assoc, Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[func(pub fn text_color(&self, cx: &App) -> Rgba)]
pub enum CheckboxGroupStatus {
    #[default]
    #[assoc(text_color = cx.get_theme().variants.active(cx).colors.text.secondary)]
    Default,
    #[assoc(text_color = cx.get_theme().variants.active(cx).colors.accent.destructive)]
    Error,
}

impl CheckboxGroupStatus {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }

    /// The border an item should draw, given its neutral border color.
    pub fn border_color(&self, cx: &App, fallback: Rgba) -> Rgba {
        match self {
            Self::Default => fallback,
            Self::Error => cx.get_theme().variants.active(cx).colors.accent.destructive,
        }
    }
}

/// The value a checkbox group publishes to its items.
///
/// `Default` is the unset value seen by items rendered outside any group.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CheckboxGroupContext {
    pub status: Option<CheckboxGroupStatus>,
}

impl CheckboxGroupContext {
    pub fn new(status: CheckboxGroupStatus) -> Self {
        Self {
            status: Some(status),
        }
    }

    /// The status an item adopts when it was not given one explicitly.
    pub fn resolve(&self, own: Option<CheckboxGroupStatus>) -> Option<CheckboxGroupStatus> {
        own.or(self.status)
    }
}

/// An element that reads the status published by the nearest enclosing group.
///
/// A group calls [`consume_group_status`](Self::consume_group_status) once per
/// render, before the element is laid out.
pub trait GroupStatusConsumer: IntoElement {
    fn consume_group_status(self, context: &CheckboxGroupContext) -> Self;
}
