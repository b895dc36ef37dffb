use std::fmt::Write;

use crate::schema::{Theme, ThemeMode};

/// Class the styling layer reads on the root element to select the dark
/// token set.
pub const DARK_CLASS: &str = "dark";

/// Emits a theme as CSS custom properties.
///
/// The light variant lands on `:root`, the dark variant on `.dark`, so
/// toggling one class on the root element switches every token at once.
pub fn css_variables(theme: &Theme) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "/* design tokens generated from theme \"{}\" */", theme.name);

    for variant in &theme.variants.variants {
        let selector = match variant.kind {
            ThemeMode::Light => ":root".to_owned(),
            ThemeMode::Dark => format!(".{DARK_CLASS}"),
        };

        let _ = writeln!(out, "{selector} {{");
        for (name, value) in variant.colors.entries() {
            let _ = writeln!(out, "  --{name}: {value};");
        }
        let _ = writeln!(out, "}}");
    }

    out
}
