#![allow(missing_docs)] // Derive macros generate undocumented methods.

use std::borrow::Cow;

use rust_embed::RustEmbed;

use crate::assets::AssetProvider;

/// Embedded assets bundled with the quartz_ui crate.
#[derive(RustEmbed)]
#[folder = "assets/"]
#[include = "icons/**/*.svg"]
#[exclude = "*.DS_Store"]
pub struct QuartzAssets;

impl AssetProvider for QuartzAssets {
    fn get(&self, path: &str) -> Option<Cow<'static, [u8]>> {
        <Self as RustEmbed>::get(path).map(|f| f.data)
    }

    fn list(&self, path: &str) -> Vec<String> {
        QuartzAssets::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into_owned()))
            .collect()
    }
}

/// Looks up a bundled asset by path.
pub fn bundled(path: &str) -> Option<Cow<'static, [u8]>> {
    <QuartzAssets as RustEmbed>::get(path).map(|f| f.data)
}
