use heck::ToShoutySnakeCase;

/// A single (search, replace) pair for one case form of the template token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenVariant {
    pub search: String,
    pub replace: String,
}

impl TokenVariant {
    fn new(search: String, replace: String) -> Self {
        Self { search, replace }
    }

    /// A pass with identical sides finds matches but changes nothing.
    pub fn is_noop(&self) -> bool {
        self.search == self.replace
    }
}

/// Derive the four case-form variants of the rename, in the order they
/// must be applied: screaming-snake, lowercase, uppercase, canonical.
///
/// The canonical form runs last so that the exact template token is only
/// consumed once every derived form has already been handled. Each case
/// transform is applied to both sides of the pair. For short names some
/// pairs can coincide (a single-word name uppercases and
/// screaming-snakes to the same string); the later pass then simply
/// finds nothing left to match.
pub fn variant_pairs(template: &str, new_name: &str) -> Vec<TokenVariant> {
    vec![
        TokenVariant::new(
            template.to_shouty_snake_case(),
            new_name.to_shouty_snake_case(),
        ),
        TokenVariant::new(template.to_lowercase(), new_name.to_lowercase()),
        TokenVariant::new(template.to_uppercase(), new_name.to_uppercase()),
        TokenVariant::new(template.to_string(), new_name.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_order_is_fixed() {
        let variants = variant_pairs("UniversalHybridTemplate", "AcmeApp");

        assert_eq!(variants.len(), 4);
        assert_eq!(variants[0].search, "UNIVERSAL_HYBRID_TEMPLATE");
        assert_eq!(variants[1].search, "universalhybridtemplate");
        assert_eq!(variants[2].search, "UNIVERSALHYBRIDTEMPLATE");
        assert_eq!(variants[3].search, "UniversalHybridTemplate");
    }

    #[test]
    fn test_transforms_apply_to_both_sides() {
        let variants = variant_pairs("UniversalHybridTemplate", "AcmeApp");

        assert_eq!(variants[0].replace, "ACME_APP");
        assert_eq!(variants[1].replace, "acmeapp");
        assert_eq!(variants[2].replace, "ACMEAPP");
        assert_eq!(variants[3].replace, "AcmeApp");
    }

    #[test]
    fn test_single_word_name_produces_coinciding_pairs() {
        let variants = variant_pairs("MyProjectTemplate", "Acme");

        // Screaming-snake and uppercase collapse to the same replacement
        // for a single word; both passes are still present and ordered.
        assert_eq!(variants[0].replace, "ACME");
        assert_eq!(variants[2].replace, "ACME");
        assert_eq!(variants[3].replace, "Acme");
    }

    #[test]
    fn test_underscored_name_keeps_separators() {
        let variants = variant_pairs("UniversalHybridTemplate", "North_Star");

        assert_eq!(variants[0].replace, "NORTH_STAR");
        assert_eq!(variants[1].replace, "north_star");
        assert_eq!(variants[2].replace, "NORTH_STAR");
        assert_eq!(variants[3].replace, "North_Star");
    }

    #[test]
    fn test_noop_variant_detection() {
        let variants = variant_pairs("Same", "Same");
        assert!(variants.iter().all(|v| v.is_noop()));

        let variants = variant_pairs("Old", "New");
        assert!(variants.iter().all(|v| !v.is_noop()));
    }
}
