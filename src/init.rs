use gpui::{App, Window};

use crate::theme::{ActiveVariantId, Theme, ThemeExt};

/// Installs the default theme unless the application already set one.
pub fn init(cx: &mut App) {
    if !cx.has_global::<Theme>() {
        tracing::debug!("no theme installed, falling back to the default theme");
        cx.set_theme(Theme::DEFAULT);
    }

    if !cx.has_global::<ActiveVariantId>() {
        cx.set_global(ActiveVariantId(0));
    }
}

pub fn init_for_window(window: &mut Window, cx: &mut App) {
    window.set_rem_size(cx.get_theme().layout.text.base_size);
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use gpui::TestAppContext;

    #[gpui::test]
    fn test_init_installs_default_theme(cx: &mut TestAppContext) {
        cx.update(|cx| {
            init(cx);

            assert_eq!(cx.get_theme().name, Theme::DEFAULT.name);
            assert_eq!(cx.global::<ActiveVariantId>().0, 0);
        });
    }

    #[gpui::test]
    fn test_init_keeps_existing_theme(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let mut theme = Theme::DEFAULT.clone();
            theme.name = "Custom".into();
            cx.set_theme(theme);
            cx.set_active_variant(1).unwrap();

            init(cx);

            assert_eq!(&*cx.get_theme().name, "Custom");
            assert_eq!(cx.global::<ActiveVariantId>().0, 1);
        });
    }
}
