#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;
use gpui::SharedString;

cfg_if::cfg_if!(
    if #[cfg(feature = "assets")] {
        use std::borrow::Cow;

        use gpui::Result;
        use rust_embed::RustEmbed;

        use crate::assets::assets::AssetProvider;

        /// Icons bundled with the forms crate.
        #[derive(RustEmbed)]
        #[folder = "assets/"]
        #[include = "icons/**/*.svg"]
        #[exclude = "*.DS_Store"]
        pub struct FormsAssets;

        impl AssetProvider for FormsAssets {
            fn get(&self, path: &str) -> Option<Cow<'static, [u8]>> {
                <Self as RustEmbed>::get(path).map(|f| f.data)
            }

            fn list(&self, path: &str) -> Result<Vec<SharedString>> {
                Ok(FormsAssets::iter()
                    .filter(|p| p.starts_with(path))
                    .map(SharedString::from)
                    .collect())
            }
        }
    }
);

/// Built-in icon identifiers that map to bundled SVG assets.
#[derive(Assoc)]
#[func(pub fn path(&self) -> SharedString)]
pub enum FormsIconKind {
    /// Checkmark drawn inside a checked checkbox.
    #[assoc(path = "icons/checkmark.svg".into())]
    Checkmark,
}

impl From<FormsIconKind> for SharedString {
    fn from(icon: FormsIconKind) -> Self {
        icon.path()
    }
}

#[cfg(all(test, feature = "assets"))]
mod tests {
    use super::*;

    #[test]
    fn test_icons_are_bundled() {
        let path = FormsIconKind::Checkmark.path();
        let icon = FormsAssets.get(&path).expect("checkmark icon should be embedded");

        assert!(icon.starts_with(b"<svg"));
    }

    #[test]
    fn test_list_filters_by_prefix() {
        let icons = FormsAssets.list("icons/").unwrap();
        assert!(icons.iter().any(|icon| &**icon == "icons/checkmark.svg"));

        assert!(FormsAssets.list("fonts/").unwrap().is_empty());
    }
}
