use gpui::SharedString;

/// Suffix appended to a component id to address its status text.
pub const STATUS_TEXT_SUFFIX: &str = "-statusText";

/// Derives the id of the status text region that belongs to `id`.
pub fn status_text_id(id: &str) -> SharedString {
    format!("{id}{STATUS_TEXT_SUFFIX}").into()
}

/// Joins the present ids into a single space separated reference list.
///
/// Returns `None` when nothing is present so callers omit the reference instead
/// of emitting an empty one.
pub fn conditional_aria_ids<'a>(
    ids: impl IntoIterator<Item = Option<&'a SharedString>>,
) -> Option<SharedString> {
    let joined = ids
        .into_iter()
        .flatten()
        .filter(|id| !id.is_empty())
        .map(|id| &**id)
        .collect::<Vec<&str>>()
        .join(" ");

    (!joined.is_empty()).then(|| joined.into())
}

/// A reference from an invisible element to the elements that label it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessibilityLink {
    pub labelled_by: SharedString,
}

impl AccessibilityLink {
    pub fn labelled_by<'a>(
        ids: impl IntoIterator<Item = Option<&'a SharedString>>,
    ) -> Option<Self> {
        conditional_aria_ids(ids).map(|labelled_by| Self { labelled_by })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text_id() {
        assert_eq!(&*status_text_id("g1"), "g1-statusText");
    }

    #[test]
    fn test_conditional_aria_ids_skips_missing() {
        let a: SharedString = "a".into();
        let b: SharedString = "b".into();

        assert_eq!(
            conditional_aria_ids([Some(&a), None, Some(&b)]).as_deref(),
            Some("a b")
        );
        assert_eq!(conditional_aria_ids([None, None]), None);
    }

    #[test]
    fn test_empty_ids_produce_no_link() {
        let empty = SharedString::default();
        assert_eq!(AccessibilityLink::labelled_by([Some(&empty)]), None);
    }
}
