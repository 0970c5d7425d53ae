//! Checkbox groups: a labelled set of checkboxes sharing one validation status.

mod config;
pub use config::*;

mod context;
pub use context::*;

mod structure;
pub use structure::*;

use std::panic::Location;

use gpui::{
    AnyElement, App, ElementId, SharedString, StyleRefinement, Window, div, prelude::*,
};
use smallvec::SmallVec;

use crate::{
    components::{HintText, Label, LabelMode, StatusText},
    primitives::visually_hidden,
    theme::ThemeGapKind,
    utils::{ElementIdExt, use_auto_id},
};

enum GroupChild {
    Element(AnyElement),
    Consumer(Box<dyn FnOnce(&CheckboxGroupContext) -> AnyElement>),
}

/// Groups related checkboxes under a shared label, hint and status text.
///
/// The group publishes its status to every child registered with
/// [`item`](Self::item) or [`child_with_status`](Self::child_with_status).
/// Children added through [`ParentElement`] are rendered as they are.
///
/// Without an explicit [`id`](Self::id) an identifier is generated on first
/// render and kept for as long as the group stays on screen. Groups built at one
/// call site, e.g. in a loop, each get their own identifier in render order.
#[derive(IntoElement)]
pub struct CheckboxGroup {
    config: CheckboxGroupConfig,
    key: ElementId,
    children: SmallVec<[GroupChild; 4]>,
    style: StyleRefinement,
}

impl CheckboxGroup {
    #[track_caller]
    pub fn new(label_text: impl Into<SharedString>) -> Self {
        Self::from_config(CheckboxGroupConfig::new(label_text))
    }

    #[track_caller]
    pub fn from_config(config: CheckboxGroupConfig) -> Self {
        Self {
            config,
            key: ElementId::CodeLocation(*Location::caller()),
            children: SmallVec::new(),
            style: StyleRefinement::default(),
        }
    }

    pub fn id(mut self, id: impl Into<SharedString>) -> Self {
        self.config.id = Some(id.into());
        self
    }

    pub fn hint_text(mut self, hint_text: impl Into<SharedString>) -> Self {
        self.config.hint_text = Some(hint_text.into());
        self
    }

    pub fn status(mut self, status: CheckboxGroupStatus) -> Self {
        self.config.status = status;
        self
    }

    pub fn status_text(mut self, status_text: impl Into<SharedString>) -> Self {
        self.config.status_text = Some(status_text.into());
        self
    }

    pub fn label_mode(mut self, label_mode: LabelMode) -> Self {
        self.config.label_mode = label_mode;
        self
    }

    /// Marks the selection as optional, e.g. `"optional"` renders as `(optional)`.
    pub fn optional_text(mut self, optional_text: impl Into<SharedString>) -> Self {
        self.config.optional_text = Some(optional_text.into());
        self
    }

    pub fn config(&self) -> &CheckboxGroupConfig {
        &self.config
    }

    /// Adds an item that adopts the group's status.
    pub fn item(mut self, item: impl GroupStatusConsumer + 'static) -> Self {
        self.children.push(GroupChild::Consumer(Box::new(move |context: &CheckboxGroupContext| {
            item.consume_group_status(context).into_any_element()
        })));
        self
    }

    pub fn items<I>(mut self, items: impl IntoIterator<Item = I>) -> Self
    where
        I: GroupStatusConsumer + 'static,
    {
        for item in items {
            self = self.item(item);
        }
        self
    }

    /// Adds a child built from the status the group publishes.
    pub fn child_with_status<E: IntoElement>(
        mut self,
        build: impl FnOnce(&CheckboxGroupContext) -> E + 'static,
    ) -> Self {
        self.children.push(GroupChild::Consumer(Box::new(move |context: &CheckboxGroupContext| {
            build(context).into_any_element()
        })));
        self
    }

    fn provide(
        children: SmallVec<[GroupChild; 4]>,
        context: &CheckboxGroupContext,
    ) -> SmallVec<[AnyElement; 4]> {
        children
            .into_iter()
            .map(|child| match child {
                GroupChild::Element(element) => element,
                GroupChild::Consumer(build) => build(context),
            })
            .collect()
    }
}

impl ParentElement for CheckboxGroup {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children
            .extend(elements.into_iter().map(GroupChild::Element));
    }
}

impl Styled for CheckboxGroup {
    fn style(&mut self) -> &mut StyleRefinement {
        &mut self.style
    }
}

impl RenderOnce for CheckboxGroup {
    fn render(self, window: &mut Window, cx: &mut App) -> impl IntoElement {
        let id = use_auto_id(window, cx, self.key.clone(), self.config.id.clone());
        let structure = CheckboxGroupStructure::resolve(&self.config, id);
        let element_id = ElementId::Name(structure.id.clone());

        let CheckboxGroupStructure {
            legend,
            context,
            status_text,
            ..
        } = structure;

        let label = Label::new(legend.label.text)
            .optional_text(legend.label.optional_text)
            .label_mode(legend.label.mode)
            .for_id(legend.label.for_id);

        let legend = div()
            .flex()
            .flex_col()
            .gap(ThemeGapKind::Sm.resolve(cx))
            .child(label)
            .when_some(legend.hint_text, |this, hint_text| {
                this.child(HintText::new(hint_text))
            })
            .when_some(legend.status_link, |this, link| {
                this.child(
                    visually_hidden()
                        .id(element_id.with_suffix("status_link"))
                        .link(Some(link)),
                )
            });

        let content = div()
            .flex()
            .flex_col()
            .gap(ThemeGapKind::Md.resolve(cx))
            .children(Self::provide(self.children, &context));

        let field_group = div()
            .relative()
            .flex()
            .flex_col()
            .gap(ThemeGapKind::Md.resolve(cx))
            .child(legend)
            .child(content);

        div()
            .id(element_id)
            .flex()
            .flex_col()
            .map(|mut this| {
                this.style().refine(&self.style);
                this
            })
            .child(field_group)
            .child(
                StatusText::new()
                    .id(status_text.id)
                    .text(status_text.text)
                    .status(status_text.status),
            )
    }
}
