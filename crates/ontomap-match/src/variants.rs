//! Spelling variants and structural decomposition of unit names.

use std::collections::BTreeSet;

/// Bidirectional American/British substitution table.
const SPELLING_SWAPS: [(&str, &str); 6] = [
    ("meter", "metre"),
    ("metre", "meter"),
    ("liter", "litre"),
    ("litre", "liter"),
    ("deca", "deka"),
    ("deka", "deca"),
];

/// Shape prefixes recognized by the shape-prefix decomposition, trailing
/// space included.
pub const SHAPE_PREFIXES: [&str; 2] = ["square ", "cubic "];

/// Generates spelling variants of `text`, excluding `text` itself.
///
/// Each applicable swap rewrites every occurrence; a second pass applies the
/// table again to every first-pass result, covering names that need two
/// independent substitutions ("decameter" → "dekametre"). The gram↔gramme
/// swap is guarded so it never fires inside "program"/"programme".
pub fn spelling_variants(text: &str) -> BTreeSet<String> {
    let mut swaps: Vec<(&str, &str)> = SPELLING_SWAPS.to_vec();
    if text.contains("gram") && !text.contains("gramme") && !text.contains("program") {
        swaps.push(("gram", "gramme"));
    }
    if text.contains("gramme") && !text.contains("programme") {
        swaps.push(("gramme", "gram"));
    }

    let mut variants = BTreeSet::new();
    for (old, new) in &swaps {
        if text.contains(old) {
            variants.insert(text.replace(old, new));
        }
    }
    let first_pass: Vec<String> = variants.iter().cloned().collect();
    for variant in &first_pass {
        for (old, new) in &swaps {
            if variant.contains(old) {
                variants.insert(variant.replace(old, new));
            }
        }
    }
    variants.remove(text);
    variants
}

/// Splits a normalized name at the first " per " separator.
///
/// Returns `None` when the separator is absent or either side is empty.
pub fn split_per(text: &str) -> Option<(&str, &str)> {
    let (numerator, denominator) = text.split_once(" per ")?;
    if numerator.is_empty() || denominator.is_empty() {
        return None;
    }
    Some((numerator, denominator))
}

/// Splits a leading "square "/"cubic " prefix off a normalized name.
pub fn split_shape(text: &str) -> Option<(&'static str, &str)> {
    for prefix in SHAPE_PREFIXES {
        if let Some(base) = text.strip_prefix(prefix)
            && !base.is_empty()
        {
            return Some((prefix, base));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variants(text: &str) -> BTreeSet<String> {
        spelling_variants(text)
    }

    #[test]
    fn single_swap() {
        let v = variants("meter");
        assert!(v.contains("metre"));
        assert!(!v.contains("meter"));
    }

    #[test]
    fn two_independent_swaps_are_combined() {
        let v = variants("decameter");
        assert!(v.contains("dekameter"));
        assert!(v.contains("decametre"));
        assert!(v.contains("dekametre"));
    }

    #[test]
    fn gram_swap_never_fires_inside_program() {
        assert!(variants("program").is_empty());
        assert!(variants("programme").is_empty());
        assert!(variants("gram").contains("gramme"));
        assert!(variants("gramme").contains("gram"));
        assert!(variants("kilogramme").contains("kilogram"));
    }

    #[test]
    fn unmodified_input_is_excluded() {
        assert!(variants("second").is_empty());
    }

    #[test]
    fn per_split_uses_first_separator() {
        assert_eq!(
            split_per("metre per second per second"),
            Some(("metre", "second per second"))
        );
        assert_eq!(split_per("metre"), None);
        assert_eq!(split_per("per second"), None);
    }

    #[test]
    fn shape_split_recognizes_square_and_cubic() {
        assert_eq!(split_shape("square metre"), Some(("square ", "metre")));
        assert_eq!(split_shape("cubic decimeter"), Some(("cubic ", "decimeter")));
        assert_eq!(split_shape("squared metre"), None);
        assert_eq!(split_shape("metre"), None);
    }
}
