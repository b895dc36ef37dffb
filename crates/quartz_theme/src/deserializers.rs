use serde::{Deserialize, Deserializer, de::Error};
use smallvec::SmallVec;

use crate::schema::ThemeVariant;

/// Deserializes theme variants, rejecting empty lists and duplicate kinds.
pub(crate) fn de_variants<'de, D>(deserializer: D) -> Result<SmallVec<[ThemeVariant; 2]>, D::Error>
where
    D: Deserializer<'de>,
{
    let variants: SmallVec<[ThemeVariant; 2]> = SmallVec::deserialize(deserializer)?;

    if variants.is_empty() {
        return Err(D::Error::custom("a theme must define at least one variant"));
    }

    for (index, variant) in variants.iter().enumerate() {
        if variants[..index].iter().any(|prev| prev.kind == variant.kind) {
            return Err(D::Error::custom(format!(
                "duplicate theme variant kind {:?}",
                variant.kind
            )));
        }
    }

    Ok(variants)
}

#[cfg(test)]
mod tests {
    use crate::Theme;

    const COLORS: &str = r#"{
        "background": "oklch(1 0 0)", "foreground": "oklch(0.145 0 0)",
        "card": "oklch(1 0 0)", "card-foreground": "oklch(0.145 0 0)",
        "primary": "oklch(0.205 0 0)", "primary-foreground": "oklch(0.985 0 0)",
        "secondary": "oklch(0.97 0 0)", "secondary-foreground": "oklch(0.205 0 0)",
        "muted": "oklch(0.97 0 0)", "muted-foreground": "oklch(0.556 0 0)",
        "accent": "oklch(0.97 0 0)", "accent-foreground": "oklch(0.205 0 0)",
        "destructive": "oklch(0.577 0.245 27.325)", "destructive-foreground": "oklch(0.985 0 0)",
        "border": "oklch(0.922 0 0)", "input": "oklch(0.922 0 0)", "ring": "oklch(0.708 0 0)"
    }"#;

    #[test]
    fn test_rejects_empty_variant_list() {
        let err = Theme::from_json(r#"{ "name": "empty", "variants": [] }"#).unwrap_err();
        assert!(
            err.to_string().contains("at least one variant"),
            "Error should explain the empty variant list, got: {err}"
        );
    }

    #[test]
    fn test_rejects_duplicate_variant_kinds() {
        let json = format!(
            r#"{{ "name": "dup", "variants": [
                {{ "kind": "Light", "colors": {COLORS} }},
                {{ "kind": "Light", "colors": {COLORS} }}
            ] }}"#
        );
        let err = Theme::from_json(&json).unwrap_err();
        assert!(
            err.to_string().contains("duplicate theme variant kind"),
            "Error should name the duplicate kind, got: {err}"
        );
    }

    #[test]
    fn test_accepts_single_variant() {
        let json = format!(r#"{{ "name": "solo", "variants": [{{ "kind": "Dark", "colors": {COLORS} }}] }}"#);
        let theme = Theme::from_json(&json).unwrap();
        assert_eq!(theme.variants.variants.len(), 1);
    }
}
