use once_cell::sync::Lazy;
use regex::Regex;

/// Parenthesized spans: annotations like "(ตึก A)" or "(phase 2)"
static PAREN_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\([^)]*\)").expect("valid regex"));

/// Phase markers in either script: "เฟส 1", "Phase 2". Dashes are already
/// spaces by the time this runs, so "phase-3" is covered too.
static PHASE_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:เฟส|phase)\s*\d+").expect("valid regex"));

/// Building-count markers: "2 อาคาร"
static NUMBERED_BUILDING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+\s*อาคาร").expect("valid regex"));

/// Building letter lists: "อาคาร A", "ตึก A,B,C"
static BUILDING_LIST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:อาคาร|ตึก)\s*[a-z](?:\s*,\s*[a-z])*\b").expect("valid regex")
});

/// English filler words that appear in display names but never in the registry
static ENGLISH_SUFFIX_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:station|interchange|condo)\b").expect("valid regex"));

/// Dash variants (hyphen, en/em dash, Thai-keyboard minus) collapse to a space
static DASH_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{Pd}+").expect("valid regex"));

/// Leading words that operators prepend but registry names omit
const NOISE_PREFIXES: [&str; 3] = ["คอนโดมิเนียม", "คอนโด", "เดอะ"];

/// Known misspellings and long place names, rewritten to the registry's
/// canonical form. Keys and outputs are case-folded; entries are applied in
/// order, longest variant first where one contains another.
const REWRITES: [(&str, &str); 6] = [
    ("เสนาวิลเลท", "เสนา วิลเลจ"),
    ("วิลเลท", "วิลเลจ"),
    ("ลุมภินี", "ลุมพินี"),
    ("แกรนด ", "แกรนด์ "),
    ("รามคำแหง", "ราม"),
    ("ramkhamhaeng", "ram"),
];

/// Thai-side segment of a bilingual display name: the text before the first
/// `/`, or the whole string when there is none.
#[must_use]
pub fn thai_side(raw: &str) -> &str {
    raw.split_once('/').map_or(raw, |(thai, _)| thai)
}

/// English-side segment: the text after the first `/`, or the whole string
/// when there is none.
#[must_use]
pub fn english_side(raw: &str) -> &str {
    raw.split_once('/').map_or(raw, |(_, english)| english)
}

/// Canonicalize a raw display name into a comparable key.
///
/// Total over all inputs: empty or blank input yields `""`, and
/// `normalize(normalize(x)) == normalize(x)` holds for every `x`.
#[must_use]
pub fn normalize(raw: &str) -> String {
    let text = thai_side(raw);
    let text = PAREN_SPAN.replace_all(text, " ");
    // Dashes become spaces before the noise patterns run, so "เฟส-1" and
    // "the-trust" strip the same way their spaced spellings do; the output
    // would otherwise normalize further on a second pass.
    let text = DASH_RUN.replace_all(&text, " ");
    let text = PHASE_MARKER.replace_all(&text, " ");
    let text = NUMBERED_BUILDING.replace_all(&text, " ");
    let text = BUILDING_LIST.replace_all(&text, " ");
    let text = ENGLISH_SUFFIX_WORD.replace_all(&text, " ");
    let text = strip_noise_prefixes(text.trim());
    // Collapse before the rewrite table runs: its keys use plain spaces, and
    // rewriting a collapsed string keeps it collapsed.
    let text = collapse_whitespace(&text.to_lowercase());
    apply_rewrites(text)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn strip_noise_prefixes(mut text: &str) -> &str {
    loop {
        let trimmed = text.trim_start();
        let stripped = NOISE_PREFIXES
            .iter()
            .find_map(|prefix| trimmed.strip_prefix(prefix))
            .or_else(|| strip_the_prefix(trimmed));
        match stripped {
            Some(rest) => text = rest,
            None => return trimmed,
        }
    }
}

/// "the" counts only as a standalone leading word, any casing
fn strip_the_prefix(trimmed: &str) -> Option<&str> {
    let head = trimmed.get(..3)?;
    if !head.eq_ignore_ascii_case("the") {
        return None;
    }
    let rest = &trimmed[3..];
    rest.chars()
        .next()
        .filter(|c| c.is_whitespace())
        .map(|_| rest)
}

/// Rewrites run to a fixed point: replacements at variant boundaries can
/// recompose a variant, and a single pass would leave it behind.
fn apply_rewrites(mut text: String) -> String {
    loop {
        let mut next = text.clone();
        for (variant, canonical) in REWRITES {
            if next.contains(variant) {
                next = next.replace(variant, canonical);
            }
        }
        if next == text {
            return text;
        }
        text = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn empty_and_blank_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize(" / "), "");
    }

    #[test]
    fn takes_thai_side_of_bilingual_names() {
        assert_eq!(normalize("ลุมพินี เพลส/Lumpini Place"), "ลุมพินี เพลส");
        assert_eq!(thai_side("ลุมพินี เพลส/Lumpini Place"), "ลุมพินี เพลส");
        assert_eq!(english_side("ลุมพินี เพลส/Lumpini Place"), "Lumpini Place");
        assert_eq!(english_side("Lumpini Place"), "Lumpini Place");
    }

    #[test]
    fn strips_parenthesized_spans() {
        assert_eq!(normalize("ลุมพินี พาร์ค (ริมน้ำ)"), "ลุมพินี พาร์ค");
    }

    #[test]
    fn strips_phase_markers_in_either_script() {
        assert_eq!(normalize("เสนา คิทท์ เฟส 2"), "เสนา คิทท์");
        assert_eq!(normalize("เสนา คิทท์ เฟส2"), "เสนา คิทท์");
        assert_eq!(normalize("Sena Kith PHASE 2"), "sena kith");
        assert_eq!(normalize("Sena Kith Phase-2"), "sena kith");
    }

    #[test]
    fn strips_building_markers() {
        assert_eq!(normalize("ศุภาลัย ซิตี้ 2 อาคาร"), "ศุภาลัย ซิตี้");
        assert_eq!(normalize("ศุภาลัย ซิตี้ อาคาร A"), "ศุภาลัย ซิตี้");
        assert_eq!(normalize("ศุภาลัย ซิตี้ ตึก A,B,C"), "ศุภาลัย ซิตี้");
    }

    #[test]
    fn building_letter_must_stand_alone() {
        // "อาคาร Azure" is a name, not a letter list
        assert_eq!(normalize("อาคาร Azure"), "อาคาร azure");
    }

    #[test]
    fn strips_noise_prefixes() {
        assert_eq!(normalize("คอนโดลุมพินี เพลส"), "ลุมพินี เพลส");
        assert_eq!(normalize("คอนโดมิเนียมลุมพินี เพลส"), "ลุมพินี เพลส");
        assert_eq!(normalize("เดอะ ทรัสต์ งามวงศ์วาน"), "ทรัสต์ งามวงศ์วาน");
        assert_eq!(normalize("The Trust Ngamwongwan"), "trust ngamwongwan");
        assert_eq!(normalize("The-Trust Ngamwongwan"), "trust ngamwongwan");
        // "the" only counts as a standalone word
        assert_eq!(normalize("Thealite"), "thealite");
    }

    #[test]
    fn strips_english_filler_words() {
        assert_eq!(normalize("Plum Condo Ram 60"), "plum ram 60");
        assert_eq!(normalize("Ideo Mobi Bangsue Interchange"), "ideo mobi bangsue");
        // "condo" inside a longer word stays
        assert_eq!(normalize("Condolence"), "condolence");
    }

    #[test]
    fn rewrites_misspellings_and_place_names() {
        assert_eq!(normalize("เสนาวิลเลท รามคำแหง"), "เสนา วิลเลจ ราม");
        assert_eq!(normalize("เสนา วิลเลจ รามคำแหง"), "เสนา วิลเลจ ราม");
        assert_eq!(normalize("Sena Village Ramkhamhaeng"), "sena village ram");
        assert_eq!(normalize("ลุมภินี เพลส"), "ลุมพินี เพลส");
    }

    #[test]
    fn typo_and_phase_collapse_to_registry_form() {
        assert_eq!(
            normalize("เสนาวิลเลท รามคำแหง เฟส 1"),
            normalize("เสนา วิลเลจ รามคำแหง"),
        );
    }

    #[test]
    fn dashes_and_whitespace_collapse() {
        assert_eq!(normalize("ราม-60"), "ราม 60");
        assert_eq!(normalize("พลัม  –  ราม   60"), "พลัม ราม 60");
    }

    #[test]
    fn lowercases_output() {
        assert_eq!(normalize("PLUM RAM 60"), "plum ram 60");
    }

    #[test]
    fn exotic_whitespace_still_reaches_the_rewrite_table() {
        // no-break space between the words
        assert_eq!(normalize("แกรนด\u{A0}ปาร์ค"), "แกรนด์ ปาร์ค");
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(raw in "\\PC{0,40}") {
            let once = normalize(&raw);
            prop_assert_eq!(normalize(&once), once);
        }

        // Stress the rewrite fixed point with fragments that can recompose
        // variants at replacement boundaries.
        #[test]
        fn normalize_is_idempotent_on_thai_fragments(
            parts in proptest::collection::vec(
                prop_oneof![
                    Just("เสนา"), Just("วิลเลท"), Just("วิลเลจ"), Just("รามคำแหง"),
                    Just("คำแหง"), Just("ราม"), Just("เฟส 1"), Just("คอนโด"),
                    Just("เดอะ"), Just(" "), Just("-"), Just("/"), Just("phase 2"),
                ],
                0..8,
            )
        ) {
            let raw = parts.concat();
            let once = normalize(&raw);
            prop_assert_eq!(normalize(&once), once);
        }
    }
}
