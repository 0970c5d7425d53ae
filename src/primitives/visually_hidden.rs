use gpui::{
    AnyElement, ElementId, IntoElement, ParentElement, RenderOnce, SharedString, div, prelude::*,
    px,
};
use smallvec::SmallVec;

use crate::utils::{AccessibilityLink, ElementIdExt};

/// Keeps content in the element tree while hiding it visually.
///
/// The content is taken out of flow, clipped to a single pixel and kept on one
/// line, so assistive technology and tests still find it.
#[derive(IntoElement)]
pub struct VisuallyHidden {
    id: Option<ElementId>,
    link: Option<AccessibilityLink>,
    children: SmallVec<[AnyElement; 1]>,
}

impl VisuallyHidden {
    pub fn new() -> Self {
        Self {
            id: None,
            link: None,
            children: SmallVec::new(),
        }
    }

    pub fn id(mut self, id: impl Into<ElementId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Points this element at the elements that label it.
    pub fn link(mut self, link: Option<AccessibilityLink>) -> Self {
        self.link = link;
        self
    }

    pub fn labelled_by(&self) -> Option<&SharedString> {
        self.link.as_ref().map(|link| &link.labelled_by)
    }

    /// A linked element without an explicit id is named after the element it
    /// points at, nested so it never collides with that element's own id.
    fn element_id(&self) -> ElementId {
        match (&self.id, &self.link) {
            (Some(id), _) => id.clone(),
            (None, Some(link)) => ElementId::Name(link.labelled_by.clone()).with_suffix("link"),
            (None, None) => ElementId::Name("visually-hidden".into()),
        }
    }
}

impl Default for VisuallyHidden {
    fn default() -> Self {
        Self::new()
    }
}

impl ParentElement for VisuallyHidden {
    fn extend(&mut self, elements: impl IntoIterator<Item = AnyElement>) {
        self.children.extend(elements);
    }
}

impl RenderOnce for VisuallyHidden {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        div()
            .id(self.element_id())
            .absolute()
            .w(px(1.))
            .h(px(1.))
            .p_0()
            .border_0()
            .overflow_hidden()
            .whitespace_nowrap()
            .children(self.children)
    }
}

/// Creates a new [`VisuallyHidden`] element.
pub fn visually_hidden() -> VisuallyHidden {
    VisuallyHidden::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_is_exposed() {
        let hidden = visually_hidden().link(Some(AccessibilityLink {
            labelled_by: "g1-statusText".into(),
        }));

        assert_eq!(
            hidden.labelled_by().map(|id| &**id),
            Some("g1-statusText")
        );
    }

    #[test]
    fn test_without_link() {
        assert!(visually_hidden().labelled_by().is_none());
    }

    #[test]
    fn test_linked_id_does_not_collide_with_target() {
        let target: SharedString = "g1-statusText".into();
        let hidden = visually_hidden().link(Some(AccessibilityLink {
            labelled_by: target.clone(),
        }));

        let id = hidden.element_id();
        assert_ne!(id, ElementId::Name(target.clone()));
        assert_eq!(id, ElementId::Name(target).with_suffix("link"));
    }

    #[test]
    fn test_explicit_id_keeps_link() {
        let hidden = visually_hidden()
            .id("g1-status_link")
            .link(Some(AccessibilityLink {
                labelled_by: "g1-statusText".into(),
            }));

        assert_eq!(hidden.element_id(), ElementId::from("g1-status_link"));
        assert_eq!(hidden.labelled_by().map(|id| &**id), Some("g1-statusText"));
    }
}
