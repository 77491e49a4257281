//! Normalization helpers and indexing predicates.
//!
//! Every policy the index builder and engine apply to raw text lives here as
//! a named function, so a policy change never touches strategy logic.

/// Symbols longer than this are names, not symbols.
pub const MAX_SYMBOL_LEN: usize = 15;
/// Mixed-case strings only count as symbols up to this length.
pub const MAX_MIXED_CASE_SYMBOL_LEN: usize = 10;
/// All-lowercase alphabetic strings only count as symbols up to this length
/// (covers "kg", "mol", "cd", "ppb").
pub const MAX_LOWERCASE_SYMBOL_LEN: usize = 5;

/// Labels that organize the vocabulary rather than name a unit. Entities
/// carrying one of these labels are excluded from indexing entirely.
const CATEGORY_LABELS: [&str; 3] = ["unit", "base unit", "prefix"];

/// SI/binary magnitude prefixes. An entity labelled with a bare prefix word
/// would otherwise match as a substring of every prefixed unit name.
const PREFIX_WORDS: [&str; 21] = [
    "yotta", "zetta", "exa", "peta", "tera", "giga", "mega", "kilo", "hecto", "deca", "deka",
    "deci", "centi", "milli", "micro", "nano", "pico", "femto", "atto", "zepto", "yocto",
];

/// Single-character prefix symbols (Y, Z, ..., m, n, ...). One of these as a
/// symbol key would match every unit carrying that prefix.
const AMBIGUOUS_PREFIX_SYMBOLS: &str = "YZEPTGMkhdcmnfazy";

/// Characters that mark a string as a symbol rather than a word.
const SYMBOL_MARKERS: [char; 7] = ['/', '^', 'µ', '°', 'Ω', '²', '³'];

/// Normalizes a unit name for lookup: lowercase, trim, map separator
/// characters (middle dot, asterisk, underscore) to spaces, collapse
/// whitespace runs.
pub fn normalize_name(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let mapped: String = lowered
        .chars()
        .map(|c| if matches!(c, '·' | '*' | '_') { ' ' } else { c })
        .collect();
    mapped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalizes a symbol for lookup. Case-sensitive, because case carries
/// meaning ("m" is metre, "M" is mega): trims outer whitespace, removes
/// spaces around the `·`, `/` and `^` operators so "m · s" and "m·s" key
/// identically, and collapses any remaining whitespace run to one space.
pub fn normalize_symbol(raw: &str) -> String {
    let mut out = String::new();
    let mut pending_space = false;
    for ch in raw.trim().chars() {
        if ch.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space {
            let after_operator = out.chars().last().is_some_and(is_symbol_operator);
            if !after_operator && !is_symbol_operator(ch) {
                out.push(' ');
            }
            pending_space = false;
        }
        out.push(ch);
    }
    out
}

fn is_symbol_operator(c: char) -> bool {
    matches!(c, '·' | '/' | '^')
}

/// Heuristic: is this synonym a symbol/abbreviation rather than a word-based
/// name? Symbols are short, space-free, and carry a digit, an uppercase
/// letter, or a marker character; a very short all-lowercase token ("kg",
/// "mol") also qualifies.
pub fn is_symbol_like(text: &str) -> bool {
    let stripped = text.trim();
    if stripped.is_empty() || stripped.contains(' ') {
        return false;
    }
    let len = stripped.chars().count();
    if len > MAX_SYMBOL_LEN {
        return false;
    }
    if stripped
        .chars()
        .any(|c| c.is_ascii_digit() || SYMBOL_MARKERS.contains(&c))
    {
        return true;
    }
    if len <= MAX_MIXED_CASE_SYMBOL_LEN && stripped.chars().any(|c| c.is_ascii_uppercase()) {
        return true;
    }
    len <= MAX_LOWERCASE_SYMBOL_LEN
        && stripped.chars().all(|c| c.is_alphabetic() && c.is_lowercase())
}

/// True for a single character from the ambiguous prefix-symbol set.
pub fn is_ambiguous_prefix_symbol(text: &str) -> bool {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => AMBIGUOUS_PREFIX_SYMBOLS.contains(c),
        _ => false,
    }
}

/// True when a normalized label is a bare category placeholder.
pub fn is_category_label(normalized: &str) -> bool {
    CATEGORY_LABELS.contains(&normalized)
}

/// True when a normalized label is a bare SI/binary prefix word.
pub fn is_prefix_word(normalized: &str) -> bool {
    PREFIX_WORDS
        .iter()
        .any(|word| normalized.eq_ignore_ascii_case(word))
}

/// True for power-of-ten synonyms of the shape `10^[3]` / `10^[-24]`, which
/// UO records on every prefixed unit. They are neither names nor symbols.
pub fn is_power_of_ten_synonym(text: &str) -> bool {
    let Some(rest) = text.strip_prefix("10^[") else {
        return false;
    };
    let Some(body) = rest.strip_suffix(']') else {
        return false;
    };
    let digits = body.strip_prefix('-').unwrap_or(body);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

/// Maximal runs of ASCII lowercase letters of at least `min_len` characters,
/// after lowercasing. The plausibility filter compares these word tokens.
pub fn word_tokens(text: &str, min_len: usize) -> std::collections::BTreeSet<String> {
    let lowered = text.to_lowercase();
    lowered
        .split(|c: char| !c.is_ascii_lowercase())
        .filter(|run| run.len() >= min_len)
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_normalization_maps_separators_and_collapses_spaces() {
        assert_eq!(normalize_name("  Newton·Metre "), "newton metre");
        assert_eq!(normalize_name("degree_celsius"), "degree celsius");
        assert_eq!(normalize_name("foo  *  bar"), "foo bar");
        assert_eq!(normalize_name(""), "");
    }

    #[test]
    fn symbol_normalization_is_structure_preserving() {
        assert_eq!(normalize_symbol(" m / s "), "m/s");
        assert_eq!(normalize_symbol("m · s"), "m·s");
        assert_eq!(normalize_symbol("g/m^[2]"), "g/m^[2]");
        assert_eq!(normalize_symbol("kg m"), "kg m");
        // Case survives: metre vs mega.
        assert_ne!(normalize_symbol("m"), normalize_symbol("M"));
    }

    #[test]
    fn symbol_likeness() {
        for symbol in ["kHz", "Pa", "Gy", "m/s", "g/m^[2]", "µm", "°C", "kg", "mol", "m2"] {
            assert!(is_symbol_like(symbol), "{symbol} should be symbol-like");
        }
        for name in ["meters", "degree celsius", "candela steradian", "attoweber", ""] {
            assert!(!is_symbol_like(name), "{name} should not be symbol-like");
        }
    }

    #[test]
    fn ambiguous_prefix_letters_are_flagged() {
        assert!(is_ambiguous_prefix_symbol("m"));
        assert!(is_ambiguous_prefix_symbol("Y"));
        assert!(!is_ambiguous_prefix_symbol("s"));
        assert!(!is_ambiguous_prefix_symbol("mm"));
    }

    #[test]
    fn category_and_prefix_labels() {
        assert!(is_category_label("unit"));
        assert!(is_category_label("base unit"));
        assert!(!is_category_label("mass unit"));
        assert!(is_prefix_word("kilo"));
        assert!(is_prefix_word("deka"));
        assert!(!is_prefix_word("kilogram"));
    }

    #[test]
    fn power_of_ten_synonyms() {
        assert!(is_power_of_ten_synonym("10^[3]"));
        assert!(is_power_of_ten_synonym("10^[-24]"));
        assert!(!is_power_of_ten_synonym("10^[]"));
        assert!(!is_power_of_ten_synonym("10^[3"));
        assert!(!is_power_of_ten_synonym("2^[10]"));
    }

    #[test]
    fn word_tokens_split_on_non_letters() {
        let tokens = word_tokens("Degree Fahrenheit (°F)", 3);
        assert!(tokens.contains("degree"));
        assert!(tokens.contains("fahrenheit"));
        assert!(!tokens.contains("f"));
    }
}
