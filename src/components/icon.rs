use std::borrow::Cow;

use enum_assoc::Assoc;
use serde::Serialize;

use crate::{ClassList, class_list, escape_attr};

/// Built-in icon identifiers that map to bundled SVG assets.
#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[func(pub fn path(&self) -> &'static str)]
#[func(pub fn name(&self) -> &'static str)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    #[assoc(path = "icons/heart.svg")]
    #[assoc(name = "heart")]
    Heart,

    #[assoc(path = "icons/mail.svg")]
    #[assoc(name = "mail")]
    Mail,

    #[assoc(path = "icons/download.svg")]
    #[assoc(name = "download")]
    Download,

    #[assoc(path = "icons/settings.svg")]
    #[assoc(name = "settings")]
    Settings,

    #[assoc(path = "icons/moon.svg")]
    #[assoc(name = "moon")]
    Moon,

    #[assoc(path = "icons/sun.svg")]
    #[assoc(name = "sun")]
    Sun,

    #[assoc(path = "icons/trash.svg")]
    #[assoc(name = "trash")]
    Trash,

    #[assoc(path = "icons/plus.svg")]
    #[assoc(name = "plus")]
    Plus,

    #[assoc(path = "icons/check.svg")]
    #[assoc(name = "check")]
    Check,
}

cfg_if::cfg_if!(
    if #[cfg(feature = "assets")] {
        fn bundled_svg(path: &str) -> Option<String> {
            let data = crate::assets::bundled(path)?;
            String::from_utf8(data.into_owned()).ok()
        }
    } else {
        fn bundled_svg(_path: &str) -> Option<String> {
            None
        }
    }
);

/// An inline SVG icon with configurable classes.
///
/// Icons inherit `currentColor`, so they take the text color the enclosing
/// component resolved.
#[derive(Debug, Clone)]
pub struct Icon {
    kind: IconKind,
    classes: ClassList,
}

impl Icon {
    pub fn new(kind: IconKind) -> Self {
        Self {
            kind,
            classes: class_list!["inline-flex", "size-4", "shrink-0"],
        }
    }

    pub fn kind(&self) -> IconKind {
        self.kind
    }

    /// Appends extra classes to the icon wrapper.
    pub fn class(mut self, class: impl Into<Cow<'static, str>>) -> Self {
        self.classes.push(class);
        self
    }

    /// Renders the icon, inlining the bundled SVG so pages need no extra
    /// asset requests. A missing asset degrades to an empty placeholder
    /// rather than failing the render.
    pub fn render(&self) -> String {
        let body = bundled_svg(self.kind.path()).unwrap_or_default();
        format!(
            "<span class=\"{}\" data-icon=\"{}\" aria-hidden=\"true\">{}</span>",
            escape_attr(&self.classes.to_string()),
            self.kind.name(),
            body,
        )
    }
}
