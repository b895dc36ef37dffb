use std::{borrow::Cow, fmt};

use enum_assoc::Assoc;
use serde::Serialize;

use crate::{
    ClassList, escape_attr, escape_text,
    components::{Icon, IconKind},
};

/// Classes shared by every button regardless of variant or size: layout,
/// typography, transition and focus ring.
pub const BUTTON_BASE_CLASSES: &str = "inline-flex items-center justify-center gap-2 \
    whitespace-nowrap rounded-md text-sm font-medium transition-colors \
    focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring \
    focus-visible:ring-offset-2";

/// Classes appended when a button is disabled.
pub const BUTTON_DISABLED_CLASSES: &str = "pointer-events-none opacity-50";

/// Visual style of a button, keyed to the theme's color tokens.
#[derive(Assoc, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[func(pub fn classes(&self) -> &'static str)]
#[func(pub fn name(&self) -> &'static str)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonVariant {
    #[default]
    #[assoc(classes = "bg-primary text-primary-foreground shadow hover:bg-primary/90")]
    #[assoc(name = "default")]
    Default,

    #[assoc(classes = "bg-destructive text-destructive-foreground shadow-sm hover:bg-destructive/90")]
    #[assoc(name = "destructive")]
    Destructive,

    #[assoc(classes = "border border-input bg-background shadow-sm hover:bg-accent hover:text-accent-foreground")]
    #[assoc(name = "outline")]
    Outline,

    #[assoc(classes = "bg-secondary text-secondary-foreground shadow-sm hover:bg-secondary/80")]
    #[assoc(name = "secondary")]
    Secondary,

    #[assoc(classes = "hover:bg-accent hover:text-accent-foreground")]
    #[assoc(name = "ghost")]
    Ghost,

    #[assoc(classes = "text-primary underline-offset-4 hover:underline")]
    #[assoc(name = "link")]
    Link,
}

impl ButtonVariant {
    pub const ALL: [ButtonVariant; 6] = [
        Self::Default,
        Self::Destructive,
        Self::Outline,
        Self::Secondary,
        Self::Ghost,
        Self::Link,
    ];

    /// Looks a variant up by its catalog name. Unknown names resolve to
    /// `Default` so a typo degrades cosmetically instead of blocking the
    /// control from rendering.
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|variant| variant.name() == name)
            .unwrap_or_default()
    }
}

/// Dimensional preset of a button. The `Icon*` sizes render square.
#[derive(Assoc, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[func(pub fn classes(&self) -> &'static str)]
#[func(pub fn name(&self) -> &'static str)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonSize {
    #[default]
    #[assoc(classes = "h-9 px-4 py-2")]
    #[assoc(name = "default")]
    Default,

    #[assoc(classes = "h-7 rounded px-2 text-xs")]
    #[assoc(name = "xs")]
    Xs,

    #[assoc(classes = "h-8 rounded-md px-3 text-xs")]
    #[assoc(name = "sm")]
    Sm,

    #[assoc(classes = "h-10 rounded-md px-8")]
    #[assoc(name = "lg")]
    Lg,

    #[assoc(classes = "h-9 w-9")]
    #[assoc(name = "icon")]
    Icon,

    #[assoc(classes = "h-7 w-7 rounded")]
    #[assoc(name = "icon-xs")]
    IconXs,

    #[assoc(classes = "h-8 w-8")]
    #[assoc(name = "icon-sm")]
    IconSm,

    #[assoc(classes = "h-10 w-10")]
    #[assoc(name = "icon-lg")]
    IconLg,
}

impl ButtonSize {
    pub const ALL: [ButtonSize; 8] = [
        Self::Default,
        Self::Xs,
        Self::Sm,
        Self::Lg,
        Self::Icon,
        Self::IconXs,
        Self::IconSm,
        Self::IconLg,
    ];

    /// Looks a size up by its catalog name, falling back to `Default` for
    /// unknown names.
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|size| size.name() == name)
            .unwrap_or_default()
    }
}

/// Resolves the final class string for a button.
///
/// Assembly order is fixed: base classes, variant classes, size classes,
/// the disabled subset when `disabled` is set, then caller extras. Extras
/// come last so they win ties under the CSS cascade. Resolution is pure
/// and always succeeds.
pub fn resolve_classes(
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    extra: Option<&str>,
) -> String {
    let mut classes = ClassList::new();
    classes.extend_split(BUTTON_BASE_CLASSES);
    classes.extend_split(variant.classes());
    classes.extend_split(size.classes());

    if disabled {
        classes.extend_split(BUTTON_DISABLED_CLASSES);
    }

    if let Some(extra) = extra {
        classes.extend_split(extra);
    }

    classes.to_string()
}

type ClickHandler = Box<dyn Fn()>;

/// A button component.
///
/// Built fluently, resolved to a class string via [`Button::class_name`],
/// and rendered to markup for the page surface via [`Button::render`].
pub struct Button {
    id: String,
    label: Option<String>,
    icon: Option<IconKind>,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    extra_classes: ClassList,
    confirm_message: Option<String>,
    on_click: Option<ClickHandler>,
}

impl Button {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            icon: None,
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            disabled: false,
            extra_classes: ClassList::new(),
            confirm_message: None,
            on_click: None,
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.label = Some(text.into());
        self
    }

    pub fn icon(mut self, icon: IconKind) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Appends extra classes after the resolved ones.
    pub fn class(mut self, class: impl Into<Cow<'static, str>>) -> Self {
        self.extra_classes.push(class);
        self
    }

    /// Routes clicks through a confirmation step before the handler runs.
    pub fn confirm(mut self, message: impl Into<String>) -> Self {
        self.confirm_message = Some(message.into());
        self
    }

    pub fn on_click(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// The fully resolved class string for this button.
    pub fn class_name(&self) -> String {
        if self.extra_classes.is_empty() {
            resolve_classes(self.variant, self.size, self.disabled, None)
        } else {
            let extra = self.extra_classes.to_string();
            resolve_classes(self.variant, self.size, self.disabled, Some(&extra))
        }
    }

    /// Dispatches a click, consulting `confirm` when a confirmation
    /// message is configured. Returns whether the handler ran: disabled
    /// buttons and declined confirmations are no-ops, not errors.
    pub fn click(&self, confirm: impl FnOnce(&str) -> bool) -> bool {
        if self.disabled {
            return false;
        }

        if let Some(message) = &self.confirm_message {
            if !confirm(message) {
                return false;
            }
        }

        if let Some(handler) = &self.on_click {
            handler();
        }
        true
    }

    /// Renders the button element for the page surface. Accessibility
    /// semantics beyond the disabled attributes are the surface's job.
    pub fn render(&self) -> String {
        let mut out = format!(
            "<button id=\"{}\" type=\"button\" class=\"{}\"",
            escape_attr(&self.id),
            escape_attr(&self.class_name()),
        );

        if self.disabled {
            out.push_str(" disabled aria-disabled=\"true\"");
        }
        out.push('>');

        if let Some(icon) = self.icon {
            out.push_str(&Icon::new(icon).render());
        }
        if let Some(label) = &self.label {
            out.push_str(&escape_text(label));
        }

        out.push_str("</button>");
        out
    }
}

impl fmt::Debug for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Button")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("icon", &self.icon)
            .field("variant", &self.variant)
            .field("size", &self.size)
            .field("disabled", &self.disabled)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use rand::prelude::*;

    use super::*;

    #[test]
    fn test_resolve_never_empty() {
        for variant in ButtonVariant::ALL {
            for size in ButtonSize::ALL {
                for disabled in [false, true] {
                    let classes = resolve_classes(variant, size, disabled, None);
                    assert!(
                        !classes.is_empty(),
                        "resolve must produce classes for {variant:?}/{size:?}/disabled={disabled}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_resolve_contains_each_axis_subset() {
        for variant in ButtonVariant::ALL {
            for size in ButtonSize::ALL {
                let resolved = resolve_classes(variant, size, false, None);
                let tokens: Vec<&str> = resolved.split_whitespace().collect();

                for token in variant.classes().split_whitespace() {
                    assert!(tokens.contains(&token), "{variant:?} token `{token}` missing");
                }
                for token in size.classes().split_whitespace() {
                    assert!(tokens.contains(&token), "{size:?} token `{token}` missing");
                }
            }
        }
    }

    #[test]
    fn test_resolve_has_no_duplicate_tokens() {
        for variant in ButtonVariant::ALL {
            for size in ButtonSize::ALL {
                let resolved = resolve_classes(variant, size, true, Some("gap-2 custom"));
                let tokens: Vec<&str> = resolved.split_whitespace().collect();
                let mut deduped = tokens.clone();
                deduped.sort_unstable();
                deduped.dedup();
                assert_eq!(
                    tokens.len(),
                    deduped.len(),
                    "No token should appear twice in `{resolved}`"
                );
            }
        }
    }

    #[test]
    fn test_resolve_is_referentially_transparent() {
        let mut rng = rand::rng();
        for _ in 0..256 {
            let variant = ButtonVariant::ALL[rng.random_range(0..ButtonVariant::ALL.len())];
            let size = ButtonSize::ALL[rng.random_range(0..ButtonSize::ALL.len())];
            let disabled = rng.random::<bool>();
            assert_eq!(
                resolve_classes(variant, size, disabled, Some("w-full")),
                resolve_classes(variant, size, disabled, Some("w-full")),
                "Identical inputs must yield identical strings"
            );
        }
    }

    #[test]
    fn test_destructive_small_scenario() {
        let resolved = resolve_classes(ButtonVariant::Destructive, ButtonSize::Sm, false, None);
        assert!(resolved.contains("bg-destructive"));
        assert!(resolved.contains("text-destructive-foreground"));
        assert!(resolved.contains("px-3"), "Small size should bring its padding");
        assert!(
            !resolved.contains("bg-primary"),
            "Default-variant background must not leak into destructive"
        );
        assert!(!resolved.contains("opacity-50"), "Enabled button carries no disabled subset");
    }

    #[test]
    fn test_unknown_names_fall_back_to_default() {
        assert_eq!(ButtonVariant::from_name("unknown-variant"), ButtonVariant::Default);
        assert_eq!(ButtonSize::from_name("gigantic"), ButtonSize::Default);
        assert_eq!(ButtonVariant::from_name("destructive"), ButtonVariant::Destructive);
        assert_eq!(ButtonSize::from_name("icon-lg"), ButtonSize::IconLg);

        let resolved = resolve_classes(
            ButtonVariant::from_name("unknown-variant"),
            ButtonSize::from_name("lg"),
            true,
            None,
        );
        assert!(resolved.contains("bg-primary"), "Unknown variant should resolve as default");
        assert!(resolved.contains("px-8"), "Large size should still apply");
        assert!(resolved.contains("opacity-50"));
        assert!(resolved.contains("pointer-events-none"));
    }

    #[test]
    fn test_extra_classes_come_last() {
        let resolved = resolve_classes(
            ButtonVariant::Default,
            ButtonSize::Default,
            false,
            Some("bg-red-500 w-full"),
        );
        assert!(
            resolved.ends_with("bg-red-500 w-full"),
            "Caller extras must trail so the cascade lets them override: `{resolved}`"
        );
    }

    #[test]
    fn test_builder_class_name_matches_resolver() {
        let button = Button::new("save")
            .variant(ButtonVariant::Secondary)
            .size(ButtonSize::Lg)
            .class("w-full");
        assert_eq!(
            button.class_name(),
            resolve_classes(ButtonVariant::Secondary, ButtonSize::Lg, false, Some("w-full"))
        );
    }

    #[test]
    fn test_render_markup() {
        let html = Button::new("send").text("Send <now>").render();
        assert!(html.starts_with("<button id=\"send\" type=\"button\" class=\""));
        assert!(html.contains("Send &lt;now&gt;"), "Labels must be escaped");
        assert!(html.ends_with("</button>"));
        assert!(!html.contains(" disabled"), "Enabled button has no disabled attribute");
    }

    #[test]
    fn test_render_disabled_attributes() {
        let html = Button::new("off").text("Off").disabled(true).render();
        assert!(html.contains(" disabled aria-disabled=\"true\""));
        assert!(html.contains("opacity-50"));
    }

    #[test]
    fn test_click_runs_handler() {
        let clicks = Rc::new(Cell::new(0));
        let counter = clicks.clone();
        let button = Button::new("go").on_click(move || counter.set(counter.get() + 1));

        assert!(button.click(|_| panic!("No confirmation configured, none should be asked")));
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn test_click_on_disabled_is_noop() {
        let clicks = Rc::new(Cell::new(0));
        let counter = clicks.clone();
        let button = Button::new("go")
            .disabled(true)
            .on_click(move || counter.set(counter.get() + 1));

        assert!(!button.click(|_| true));
        assert_eq!(clicks.get(), 0, "Disabled button must not fire its handler");
    }

    #[test]
    fn test_declined_confirmation_is_noop() {
        let clicks = Rc::new(Cell::new(0));
        let counter = clicks.clone();
        let button = Button::new("delete")
            .variant(ButtonVariant::Destructive)
            .confirm("Are you sure you want to delete?")
            .on_click(move || counter.set(counter.get() + 1));

        assert!(!button.click(|message| {
            assert_eq!(message, "Are you sure you want to delete?");
            false
        }));
        assert_eq!(clicks.get(), 0, "Declining the confirmation must be a no-op");

        assert!(button.click(|_| true));
        assert_eq!(clicks.get(), 1);
    }
}
