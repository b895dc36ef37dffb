//! Fixed prop permutations for visual review.
//!
//! The catalog tool that displays these is an external collaborator; this
//! module only supplies the data it discovers: one entry per interesting
//! variant/size/state combination of each component.

use serde::Serialize;

use crate::components::{Button, ButtonSize, ButtonVariant, IconKind};

/// One catalog entry: a named prop combination for a component.
#[derive(Debug, Clone, Serialize)]
pub struct Story {
    pub name: &'static str,
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub disabled: bool,
    pub label: Option<&'static str>,
    pub icon: Option<IconKind>,
}

impl Story {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            disabled: false,
            label: None,
            icon: None,
        }
    }

    fn label(mut self, label: &'static str) -> Self {
        self.label = Some(label);
        self
    }

    fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    fn icon(mut self, icon: IconKind) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Builds the button this story describes.
    pub fn build(&self) -> Button {
        let mut button = Button::new(self.name)
            .variant(self.variant)
            .size(self.size)
            .disabled(self.disabled);
        if let Some(label) = self.label {
            button = button.text(label);
        }
        if let Some(icon) = self.icon {
            button = button.icon(icon);
        }
        button
    }
}

/// The button catalog: every variant, every size axis, icon-only presets
/// and the disabled state.
pub fn button_stories() -> Vec<Story> {
    use ButtonSize as S;
    use ButtonVariant as V;

    vec![
        Story::new("default").label("Button"),
        Story::new("destructive").variant(V::Destructive).label("Delete"),
        Story::new("outline").variant(V::Outline).label("Outline"),
        Story::new("secondary").variant(V::Secondary).label("Secondary"),
        Story::new("ghost").variant(V::Ghost).label("Ghost"),
        Story::new("link").variant(V::Link).label("Link"),
        Story::new("with-icon").label("Login with Email").icon(IconKind::Mail),
        Story::new("icon-button").size(S::Icon).icon(IconKind::Heart),
        Story::new("icon-button-small").size(S::IconSm).icon(IconKind::Settings),
        Story::new("icon-button-large").size(S::IconLg).icon(IconKind::Download),
        Story::new("extra-small-button").size(S::Xs).label("XS Button"),
        Story::new("small-button").size(S::Sm).label("Small Button"),
        Story::new("large-button").size(S::Lg).label("Large Button"),
        Story::new("disabled").disabled().label("Disabled"),
    ]
}
