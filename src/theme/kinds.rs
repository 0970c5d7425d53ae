#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::App;

use crate::theme::ThemeExt;

/// Text size variants that resolve to theme-defined values.
///
/// Use `resolve()` to get the actual `AbsoluteLength` from the current theme.
/// `weight()` returns the matching font weight.
#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::AbsoluteLength)]
#[func(pub fn weight(&self, cx: &App) -> gpui::FontWeight)]
pub enum ThemeTextSizeKind {
    /// Form control labels.
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.label)]
    #[assoc(weight = gpui::FontWeight(cx.get_theme().layout.text.default_font.weights.label))]
    Label,
    /// Standard body text.
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.body)]
    #[assoc(weight = gpui::FontWeight(cx.get_theme().layout.text.default_font.weights.body))]
    Body,
    /// Hint and status text.
    #[assoc(resolve = cx.get_theme().layout.text.default_font.sizes.caption)]
    #[assoc(weight = gpui::FontWeight(cx.get_theme().layout.text.default_font.weights.caption))]
    Caption,
}

/// Spacing between stacked regions of a form control.
#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Pixels)]
pub enum ThemeGapKind {
    #[assoc(resolve = cx.get_theme().layout.gap.md)]
    Md,
    #[assoc(resolve = cx.get_theme().layout.gap.sm)]
    Sm,
}

/// Background color variants from the active theme variant.
#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Rgba)]
pub enum ThemeBackgroundKind {
    /// Base background for main surfaces.
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.background.primary)]
    Primary,
    /// Slightly elevated or grouped content.
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.background.secondary)]
    Secondary,
    /// Further elevated elements.
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.background.tertiary)]
    Tertiary,
    /// High emphasis backgrounds.
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.background.quaternary)]
    Quaternary,
    /// Highest emphasis backgrounds.
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.background.quinary)]
    Quinary,
}

/// Background layers for stacking surfaces with visual hierarchy.
///
/// Similar to `ThemeBackgroundKind` but supports `next()` to get the
/// elevated layer color for nested elements.
#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq)]
#[func(pub fn resolve(&self, cx: &App) -> gpui::Rgba)]
#[func(pub fn next(&self) -> ThemeBackgroundKind)]
pub enum ThemeLayerKind {
    /// Base layer for main surfaces.
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.background.primary)]
    #[assoc(next = ThemeBackgroundKind::Secondary)]
    Primary,
    /// Second layer for grouped content.
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.background.secondary)]
    #[assoc(next = ThemeBackgroundKind::Tertiary)]
    Secondary,
    /// Third layer for elevated elements.
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.background.tertiary)]
    #[assoc(next = ThemeBackgroundKind::Quaternary)]
    Tertiary,
    /// Fourth layer for high emphasis.
    #[assoc(resolve = cx.get_theme().variants.active(cx).colors.background.quaternary)]
    #[assoc(next = ThemeBackgroundKind::Quinary)]
    Quaternary,
}

impl From<ThemeLayerKind> for ThemeBackgroundKind {
    fn from(layer: ThemeLayerKind) -> Self {
        match layer {
            ThemeLayerKind::Primary => Self::Primary,
            ThemeLayerKind::Secondary => Self::Secondary,
            ThemeLayerKind::Tertiary => Self::Tertiary,
            ThemeLayerKind::Quaternary => Self::Quaternary,
        }
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use crate::theme::{Theme, ThemeExt};
    use gpui::TestAppContext;

    #[gpui::test]
    fn test_text_sizes_shrink_from_label_to_caption(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);
            let rem_size = cx.get_theme().layout.text.base_size;

            let sizes = [
                ThemeTextSizeKind::Label,
                ThemeTextSizeKind::Body,
                ThemeTextSizeKind::Caption,
            ]
            .map(|kind| kind.resolve(cx).to_pixels(rem_size));

            assert!(sizes.windows(2).all(|pair| pair[0] >= pair[1]));
        });
    }

    #[gpui::test]
    fn test_label_weight_is_heavier_than_body(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);

            assert!(ThemeTextSizeKind::Label.weight(cx).0 > ThemeTextSizeKind::Body.weight(cx).0);
        });
    }

    #[gpui::test]
    fn test_gap_ordering(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);

            let sm = ThemeGapKind::Sm.resolve(cx);
            let md = ThemeGapKind::Md.resolve(cx);

            assert!(sm <= md, "Sm should be <= Md");
        });
    }

    #[gpui::test]
    fn test_theme_layer_kind_next(cx: &mut TestAppContext) {
        cx.update(|_cx| {
            assert_eq!(ThemeLayerKind::Primary.next(), ThemeBackgroundKind::Secondary);
            assert_eq!(ThemeLayerKind::Secondary.next(), ThemeBackgroundKind::Tertiary);
            assert_eq!(ThemeLayerKind::Tertiary.next(), ThemeBackgroundKind::Quaternary);
            assert_eq!(ThemeLayerKind::Quaternary.next(), ThemeBackgroundKind::Quinary);
        });
    }

    #[gpui::test]
    fn test_theme_layer_kind_into_background_kind(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DEFAULT);

            for layer in [
                ThemeLayerKind::Primary,
                ThemeLayerKind::Secondary,
                ThemeLayerKind::Tertiary,
                ThemeLayerKind::Quaternary,
            ] {
                let background: ThemeBackgroundKind = layer.into();
                assert_eq!(layer.resolve(cx), background.resolve(cx));
            }
        });
    }
}
