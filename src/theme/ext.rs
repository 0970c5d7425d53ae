use gpui::{App, Styled};

use crate::{
    Error,
    theme::{ActiveVariantId, Theme},
};

/// Extension trait for accessing and modifying the global theme.
pub trait ThemeExt {
    /// Changes the theme.
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T);

    /// Gets an immutable reference to the theme.
    fn get_theme(&self) -> &Theme;

    /// Selects which variant of the current theme is active.
    fn set_active_variant(&mut self, index: usize) -> Result<(), Error>;
}

impl ThemeExt for App {
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T) {
        self.set_global::<Theme>(theme.as_ref().clone())
    }

    fn get_theme(&self) -> &Theme {
        self.global()
    }

    fn set_active_variant(&mut self, index: usize) -> Result<(), Error> {
        let count = self.get_theme().variants.variants.len();

        if index >= count {
            tracing::warn!(index, count, "requested theme variant does not exist");
            return Err(Error::VariantOutOfRange { index, count });
        }

        self.set_global(ActiveVariantId(index));
        Ok(())
    }
}

/// Applies the theme's default font family and line height to text elements.
pub trait ThemeFontExt: Styled + Sized {
    fn theme_font(self, cx: &App) -> Self {
        let font = &cx.get_theme().layout.text.default_font;
        let family = font.primary_family().cloned();
        let this = self.line_height(font.line_height);

        match family {
            Some(family) => this.font_family(family),
            None => this,
        }
    }
}

impl<E: Styled> ThemeFontExt for E {}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use crate::theme::ThemeVariantKind;
    use gpui::TestAppContext;

    #[gpui::test]
    fn test_set_and_get_theme(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);
            let theme = cx.get_theme();
            assert!(!theme.name.is_empty(), "Theme should have a name");
        });
    }

    #[gpui::test]
    fn test_active_variant_defaults_to_first(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);
            let theme = cx.get_theme();

            assert_eq!(theme.variants.active(cx).kind, ThemeVariantKind::Dark);
        });
    }

    #[gpui::test]
    fn test_set_active_variant(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);
            cx.set_active_variant(1).unwrap();

            assert_eq!(
                cx.get_theme().variants.active(cx).kind,
                ThemeVariantKind::Light
            );
        });
    }

    #[gpui::test]
    fn test_set_active_variant_out_of_range(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);

            let err = cx.set_active_variant(7).unwrap_err();
            assert!(matches!(
                err,
                Error::VariantOutOfRange { index: 7, count: 2 }
            ));
            assert_eq!(
                cx.get_theme().variants.active(cx).kind,
                ThemeVariantKind::Dark,
                "A failed switch should leave the active variant untouched"
            );
        });
    }

    #[gpui::test]
    fn test_theme_variant_has_status_colors(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);
            let active = cx.get_theme().variants.active(cx);

            let (primary, secondary) = active.colors.text.all();
            assert!(primary.a > 0.0, "Primary text color should be visible");
            assert!(secondary.a > 0.0, "Secondary text color should be visible");
            assert!(
                active.colors.accent.destructive.a > 0.0,
                "Destructive accent color should be visible"
            );
        });
    }
}
