//! Identifier shapes and the matcher that runs them over extracted text.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::fmt;

// ── IdentifierKind ────────────────────────────────────────────────────────────

/// The category an identifier is reported under.
///
/// NIF has no shape of its own for natural persons: it is the DNI number
/// with its letter, so both share [`IdentifierKind::Dni`] and the `DNI/NIF`
/// label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IdentifierKind {
    /// 8 digits followed by a letter.
    Dni,
    /// `X`, `Y` or `Z`, 7 digits, then a letter.
    Nie,
}

impl IdentifierKind {
    pub fn label(&self) -> &'static str {
        match self {
            IdentifierKind::Dni => "DNI/NIF",
            IdentifierKind::Nie => "NIE",
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

// ── Rule table ────────────────────────────────────────────────────────────────

/// One entry of the `{kind → pattern}` table.
pub struct IdentifierRule {
    pub kind: IdentifierKind,
    pub pattern: &'static Lazy<Regex>,
}

// Unanchored: lopdf joins adjacent text runs without a separator, so a
// number often sits directly against a label ("DNI:12345678ZNIE...").
static DNI_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{8}[A-Z]").unwrap());
static NIE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[XYZ]\d{7}[A-Z]").unwrap());

/// Every identifier shape the scanner looks for, in report order.
///
/// Adding a kind means adding a variant and a row here; the traversal and
/// reporting code iterate over this table and need no change.
pub static RULES: &[IdentifierRule] = &[
    IdentifierRule {
        kind: IdentifierKind::Dni,
        pattern: &DNI_PATTERN,
    },
    IdentifierRule {
        kind: IdentifierKind::Nie,
        pattern: &NIE_PATTERN,
    },
];

// ── IdentifierMatch ───────────────────────────────────────────────────────────

/// One identifier-shaped substring found in a document's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierMatch {
    pub kind: IdentifierKind,
    /// The substring exactly as it appears in the text.
    pub value: String,
    /// Byte offset of `value` within the extracted text.
    pub offset: usize,
}

/// Find every identifier in `text`.
///
/// One match is returned per occurrence. Matches are grouped by kind in
/// [`RULES`] order and, within a kind, ordered by position.
///
/// ```
/// use busqueitor::{find_identifiers, IdentifierKind};
///
/// let hits = find_identifiers("Cliente 12345678Z, ref XYZ, NIE X1234567L");
/// assert_eq!(hits.len(), 2);
/// assert_eq!(hits[0].kind, IdentifierKind::Dni);
/// assert_eq!(hits[1].value, "X1234567L");
/// ```
pub fn find_identifiers(text: &str) -> Vec<IdentifierMatch> {
    let mut out = Vec::new();
    for rule in RULES {
        for m in rule.pattern.find_iter(text) {
            out.push(IdentifierMatch {
                kind: rule.kind,
                value: m.as_str().to_string(),
                offset: m.start(),
            });
        }
    }
    out
}

/// Keep only the first occurrence of every `(kind, value)` pair, preserving
/// order.
pub fn dedup_matches(matches: Vec<IdentifierMatch>) -> Vec<IdentifierMatch> {
    let mut seen = HashSet::new();
    matches
        .into_iter()
        .filter(|m| seen.insert((m.kind, m.value.clone())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(hits: &[IdentifierMatch]) -> Vec<&str> {
        hits.iter().map(|m| m.value.as_str()).collect()
    }

    #[test]
    fn dni_shape_is_found() {
        let hits = find_identifiers("Cliente 12345678Z, ref XYZ");
        assert_eq!(values(&hits), ["12345678Z"]);
        assert_eq!(hits[0].kind, IdentifierKind::Dni);
        assert_eq!(hits[0].offset, 8);
    }

    #[test]
    fn nie_shape_is_found_for_each_prefix() {
        let hits = find_identifiers("X1234567L Y7654321G Z0000001R");
        assert_eq!(values(&hits), ["X1234567L", "Y7654321G", "Z0000001R"]);
        assert!(hits.iter().all(|m| m.kind == IdentifierKind::Nie));
    }

    #[test]
    fn every_occurrence_is_reported() {
        let hits = find_identifiers("12345678Z and again 12345678Z");
        assert_eq!(hits.len(), 2);
        assert_ne!(hits[0].offset, hits[1].offset);
    }

    #[test]
    fn dni_group_precedes_nie_group() {
        let hits = find_identifiers("X1234567L then 87654321X");
        let kinds: Vec<_> = hits.iter().map(|m| m.kind).collect();
        assert_eq!(kinds, [IdentifierKind::Dni, IdentifierKind::Nie]);
    }

    #[test]
    fn identifiers_glued_to_surrounding_text_are_found() {
        let hits = find_identifiers("DNI:12345678ZNIEX1234567L");
        assert_eq!(values(&hits), ["12345678Z", "X1234567L"]);
        assert_eq!(hits[0].offset, 4);
        assert_eq!(hits[1].offset, 16);

        let hits = find_identifiers("NIF12345678Z ... ñ12345678Z");
        assert_eq!(values(&hits), ["12345678Z", "12345678Z"]);
        assert!(hits.iter().all(|m| m.kind == IdentifierKind::Dni));
    }

    #[test]
    fn shapes_that_are_too_short_or_wrongly_prefixed_do_not_match() {
        assert!(find_identifiers("1234567Z").is_empty());
        assert!(find_identifiers("W1234567L").is_empty());
        assert!(find_identifiers("X123456L").is_empty());
    }

    #[test]
    fn lowercase_letters_do_not_match() {
        assert!(find_identifiers("12345678z x1234567l").is_empty());
    }

    #[test]
    fn control_letter_is_not_checked() {
        // 12345678 mod 23 gives Z; A is wrong but has the right shape.
        assert_eq!(values(&find_identifiers("12345678A")), ["12345678A"]);
    }

    #[test]
    fn dedup_keeps_first_occurrence() {
        let hits = find_identifiers("12345678Z 12345678Z X1234567L 12345678Z");
        let unique = dedup_matches(hits);
        assert_eq!(values(&unique), ["12345678Z", "X1234567L"]);
        assert_eq!(unique[0].offset, 0);
    }

    #[test]
    fn labels() {
        assert_eq!(IdentifierKind::Dni.to_string(), "DNI/NIF");
        assert_eq!(IdentifierKind::Nie.to_string(), "NIE");
    }
}
