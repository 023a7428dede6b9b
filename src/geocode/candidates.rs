//! Candidate-query construction for one raw address.
//!
//! Pure string work, no network access. The ordering is deliberate: a postal
//! code disambiguates cheapest, a standardized address matches most often, and
//! the raw text is the last resort.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Street-type abbreviations expanded during standardization.
///
/// Longer forms come first so `v.le` is not caught by the bare `v.` rule.
static ABBREVIATIONS: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    // Patterns ending in a literal dot take `\s*` instead of a trailing `\b`:
    // there is no word boundary between a dot and a following space.
    [
        (r"\bv\.le\b", "viale"),
        (r"\bp\.zza\b", "piazza"),
        (r"\bp\.za\b", "piazza"),
        (r"\bc\.so\b", "corso"),
        (r"\bs\.s\.\s*", "strada statale "),
        (r"\bstr\.\s*", "strada "),
        (r"\bv\.\s*", "via "),
    ]
    .into_iter()
    .map(|(pattern, full)| (Regex::new(pattern).expect("static pattern"), full))
    .collect()
});

/// Floor/unit fragments that confuse the geocoder.
static UNIT_FRAGMENTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(piano terra|primo piano|interno \d+|int\.\s*\d+|scala\s*\w+)\b")
        .expect("static pattern")
});

/// "c/o ..." and everything after it.
static CARE_OF: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"c/o.*$").expect("static pattern"));

/// Punctuation with no geographic meaning (accented letters, apostrophe,
/// comma and hyphen are kept).
static STRAY_PUNCT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\sàèéìòù',-]").expect("static pattern"));

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("static pattern"));

static POSTAL_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{5})\b").expect("static pattern"));

/// Returns the first standalone 5-digit postal code token, if any.
pub fn extract_postal_code(address: &str) -> Option<&str> {
    POSTAL_CODE
        .captures(address)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Lower-cases and cleans an address for geocoding.
///
/// Expands street-type abbreviations, strips floor/unit/care-of fragments,
/// collapses stray punctuation to whitespace and normalizes spacing. Empty
/// input yields an empty string.
pub fn standardize_address(address: &str) -> String {
    let mut clean = address.to_lowercase();

    for (pattern, full) in ABBREVIATIONS.iter() {
        clean = pattern.replace_all(&clean, *full).into_owned();
    }

    clean = UNIT_FRAGMENTS.replace_all(&clean, " ").into_owned();
    clean = CARE_OF.replace(&clean, "").into_owned();
    clean = STRAY_PUNCT.replace_all(&clean, " ").into_owned();
    clean = clean.replace(" , ", " ").replace(" - ", " ");
    clean = WHITESPACE.replace_all(&clean, " ").into_owned();

    clean.trim().to_string()
}

/// Builds the ordered, de-duplicated candidate queries for one address.
#[derive(Debug, Clone, Default)]
pub struct CandidateBuilder {
    region_hint: Option<String>,
}

impl CandidateBuilder {
    /// Creates a builder; `region_hint` (e.g. `Veneto, Italia`) is appended
    /// to the postal-code candidate when present.
    pub fn new(region_hint: Option<String>) -> Self {
        Self { region_hint }
    }

    /// Returns candidate queries, highest precision first:
    /// postal code, standardized address, raw address.
    ///
    /// Candidates are de-duplicated case-insensitively; blank input yields an
    /// empty list. Never fails.
    pub fn candidates(&self, address: &str) -> Vec<String> {
        let raw = address.trim();
        if raw.is_empty() {
            return Vec::new();
        }

        let mut out = Vec::with_capacity(3);
        let mut seen = HashSet::new();

        if let Some(code) = extract_postal_code(raw) {
            let query = match &self.region_hint {
                Some(hint) => format!("{code}, {hint}"),
                None => code.to_string(),
            };
            push_unique(&mut out, &mut seen, query);
        }

        push_unique(&mut out, &mut seen, standardize_address(raw));
        push_unique(&mut out, &mut seen, raw.to_string());

        out
    }
}

fn push_unique(out: &mut Vec<String>, seen: &mut HashSet<String>, query: String) {
    if query.is_empty() {
        return;
    }
    if seen.insert(query.to_lowercase()) {
        out.push(query);
    }
}
