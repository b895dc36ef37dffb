use std::{
    ops::{Deref, DerefMut},
    sync::LazyLock,
};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{ThemeError, color::Oklch, deserializers::de_variants};

/// A named theme: a set of color-token values per variant (mode).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Theme {
    pub name: String,
    pub variants: ThemeVariants,
}

macro_rules! generate_builtin_themes {
    ( $( [$path:literal, $name:ident] ),+ ) => {
        $(
            pub const $name: LazyLockTheme = LazyLockTheme::new(|| Theme::from_json(include_str!($path)).unwrap());
        )+
    };
}

/// Lazily parsed built-in theme, usable in `const` position.
pub struct LazyLockTheme(LazyLock<Theme>);

impl LazyLockTheme {
    #[inline(always)]
    const fn new(f: fn() -> Theme) -> Self {
        Self(LazyLock::new(f))
    }
}

impl Deref for LazyLockTheme {
    type Target = Theme;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for LazyLockTheme {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl AsRef<Theme> for LazyLockTheme {
    fn as_ref(&self) -> &Theme {
        &self.0
    }
}

impl Theme {
    generate_builtin_themes!(["../themes/default.json", DEFAULT]);

    pub fn from_json<S: AsRef<str>>(json: S) -> Result<Theme, ThemeError> {
        Ok(serde_json::from_str(json.as_ref())?)
    }
}

/// Light/dark mode selector.
///
/// Doubles as the `kind` tag of a theme variant and as the value held by
/// the page-level theme state.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(transparent)]
pub struct ThemeVariants {
    #[serde(deserialize_with = "de_variants")]
    pub variants: SmallVec<[ThemeVariant; 2]>,
}

impl ThemeVariants {
    /// Returns the variant for `mode`, falling back to the first variant
    /// when the theme does not define that mode.
    pub fn for_mode(&self, mode: ThemeMode) -> &ThemeVariant {
        self.variants
            .iter()
            .find(|variant| variant.kind == mode)
            .unwrap_or(&self.variants[0])
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ThemeVariant {
    pub kind: ThemeMode,
    pub colors: ThemeColors,
}

/// The full color-token palette of one theme variant.
///
/// Token names follow the CSS custom properties the styling layer reads
/// (`--background`, `--primary-foreground`, …).
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct ThemeColors {
    pub background: Oklch,
    pub foreground: Oklch,
    pub card: Oklch,
    pub card_foreground: Oklch,
    pub primary: Oklch,
    pub primary_foreground: Oklch,
    pub secondary: Oklch,
    pub secondary_foreground: Oklch,
    pub muted: Oklch,
    pub muted_foreground: Oklch,
    pub accent: Oklch,
    pub accent_foreground: Oklch,
    pub destructive: Oklch,
    pub destructive_foreground: Oklch,
    pub border: Oklch,
    pub input: Oklch,
    pub ring: Oklch,
}

impl ThemeColors {
    /// All tokens as `(css-name, value)` pairs, in declaration order.
    pub fn entries(&self) -> [(&'static str, &Oklch); 17] {
        [
            ("background", &self.background),
            ("foreground", &self.foreground),
            ("card", &self.card),
            ("card-foreground", &self.card_foreground),
            ("primary", &self.primary),
            ("primary-foreground", &self.primary_foreground),
            ("secondary", &self.secondary),
            ("secondary-foreground", &self.secondary_foreground),
            ("muted", &self.muted),
            ("muted-foreground", &self.muted_foreground),
            ("accent", &self.accent),
            ("accent-foreground", &self.accent_foreground),
            ("destructive", &self.destructive),
            ("destructive-foreground", &self.destructive_foreground),
            ("border", &self.border),
            ("input", &self.input),
            ("ring", &self.ring),
        ]
    }
}
