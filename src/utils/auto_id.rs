use std::{
    cell::OnceCell,
    sync::atomic::{AtomicUsize, Ordering},
};

use gpui::{App, ElementId, SharedString, Window};

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

/// Returns a new identifier that is unique for the lifetime of the process.
pub fn next_generated_id() -> SharedString {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    tracing::trace!(id, "generated element identifier");
    format!("auto-id-{id}").into()
}

/// An identifier that is either supplied by the caller or generated on first use.
///
/// Once generated the identifier never changes, so an `AutoId` kept alive across
/// renders keeps producing the same value.
#[derive(Debug, Default)]
pub struct AutoId {
    explicit: Option<SharedString>,
    generated: OnceCell<SharedString>,
}

impl AutoId {
    pub fn new(explicit: Option<SharedString>) -> Self {
        Self {
            explicit,
            generated: OnceCell::new(),
        }
    }

    pub fn get(&self) -> SharedString {
        match &self.explicit {
            Some(explicit) => explicit.clone(),
            None => self.generated.get_or_init(next_generated_id).clone(),
        }
    }

    /// Hands the resolved identifier to a render callback.
    pub fn render_with<R>(&self, render: impl FnOnce(SharedString) -> R) -> R {
        render(self.get())
    }
}

/// The generated identifiers claimed under one window-state key.
///
/// Several instances can render under the same key in one frame, e.g. when they
/// are built in a loop. Each claim in a frame takes the next slot, so the k-th
/// instance keeps the k-th identifier across frames.
#[derive(Debug, Default)]
pub struct AutoIdSlots {
    slots: Vec<AutoId>,
    cursor: usize,
}

impl AutoIdSlots {
    pub fn claim(&mut self) -> SharedString {
        if self.cursor == self.slots.len() {
            self.slots.push(AutoId::default());
        }

        let id = self.slots[self.cursor].get();
        self.cursor += 1;
        id
    }

    /// Starts a new frame; the next claim returns the first identifier again.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }
}

/// Resolves the identifier of a rendered instance.
///
/// Explicit identifiers are returned as-is. Otherwise the generated identifier is
/// kept in window state under `key`, so re-renders of the same instance observe
/// the same value. Instances sharing a key within a frame get distinct values.
pub fn use_auto_id(
    window: &mut Window,
    cx: &mut App,
    key: impl Into<ElementId>,
    explicit: Option<SharedString>,
) -> SharedString {
    if let Some(explicit) = explicit {
        return explicit;
    }

    let slots = window.use_keyed_state(key, cx, |_window, _cx| AutoIdSlots::default());
    let (id, first_claim) = slots.update(cx, |slots, _cx| {
        let first_claim = slots.cursor == 0;
        (slots.claim(), first_claim)
    });

    if first_claim {
        // Runs once the current frame has finished drawing.
        cx.defer(move |cx| slots.update(cx, |slots, _cx| slots.rewind()));
    } else {
        tracing::trace!(%id, "identifier key reused within a frame");
    }

    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_id_wins() {
        let id = AutoId::new(Some("g1".into()));
        assert_eq!(&*id.get(), "g1");
        assert!(id.generated.get().is_none(), "No id should be generated");
    }

    #[test]
    fn test_generated_id_is_stable() {
        let id = AutoId::new(None);
        let first = id.get();
        let second = id.get();

        assert!(first.starts_with("auto-id-"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = AutoId::default();
        let b = AutoId::default();
        assert_ne!(a.get(), b.get());
    }

    #[test]
    fn test_slots_hand_out_distinct_ids_per_frame() {
        let mut slots = AutoIdSlots::default();
        let first = slots.claim();
        let second = slots.claim();
        assert_ne!(first, second);

        slots.rewind();
        assert_eq!(slots.claim(), first);
        assert_eq!(slots.claim(), second);
    }

    #[test]
    fn test_render_with_passes_resolved_id() {
        let id = AutoId::new(None);
        let expected = id.get();

        let rendered = id.render_with(|id| format!("{id}-statusText"));
        assert_eq!(rendered, format!("{expected}-statusText"));
    }
}
