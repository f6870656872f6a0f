//! Concern vocabulary expansion.
//!
//! Questionnaire answers use a handful of coarse terms; product benefit tags
//! use a finer vocabulary. The synonym table bridges the two so that a user
//! who ticks "acne" also matches products tagged "pore_control".

/// Fixed synonym table mapping a raw questionnaire term to its expanded
/// vocabulary. Unrecognised terms pass through verbatim.
const CONCERN_SYNONYMS: &[(&str, &[&str])] = &[
    ("acne", &["acne", "oily_skin", "pore_control"]),
    ("aging", &["wrinkles", "fine_lines", "aging", "firmness"]),
    ("dryness", &["dryness", "dehydration", "barrier_repair"]),
    ("dark_spots", &["dark_spots", "pigmentation", "brightening"]),
    ("sensitivity", &["sensitive_skin", "redness", "irritation"]),
    ("pores", &["pore_minimizing", "blackheads"]),
    ("dullness", &["brightening", "radiance", "vitamin_c"]),
];

/// Append `term` unless an equal entry (case-insensitive) is already present.
pub(crate) fn push_unique(concerns: &mut Vec<String>, term: &str) {
    if !concerns.iter().any(|c| c.eq_ignore_ascii_case(term)) {
        concerns.push(term.to_owned());
    }
}

/// Expand raw questionnaire terms through the synonym table.
///
/// The result is deduplicated with first-seen order preserved, keeping
/// classifier output deterministic for identical answers.
pub(crate) fn expand_concerns<'a, I>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut expanded = Vec::new();
    for term in raw {
        let term = term.trim();
        if term.is_empty() {
            continue;
        }
        match lookup_synonyms(term) {
            Some(synonyms) => {
                for synonym in synonyms {
                    push_unique(&mut expanded, synonym);
                }
            }
            None => push_unique(&mut expanded, term),
        }
    }
    expanded
}

fn lookup_synonyms(term: &str) -> Option<&'static [&'static str]> {
    CONCERN_SYNONYMS
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(term))
        .map(|(_, synonyms)| *synonyms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn acne_expands_to_its_synonym_set() {
        let expanded = expand_concerns(["acne"]);
        assert_eq!(expanded, vec!["acne", "oily_skin", "pore_control"]);
    }

    #[rstest]
    fn unknown_terms_pass_through_verbatim() {
        let expanded = expand_concerns(["eczema"]);
        assert_eq!(expanded, vec!["eczema"]);
    }

    #[rstest]
    fn overlapping_expansions_deduplicate_first_seen() {
        // "dullness" and "dark_spots" both expand to "brightening".
        let expanded = expand_concerns(["dullness", "dark_spots"]);
        assert_eq!(
            expanded,
            vec![
                "brightening",
                "radiance",
                "vitamin_c",
                "dark_spots",
                "pigmentation"
            ]
        );
    }

    #[rstest]
    fn blank_terms_are_skipped() {
        let expanded = expand_concerns(["", "  ", "pores"]);
        assert_eq!(expanded, vec!["pore_minimizing", "blackheads"]);
    }

    #[rstest]
    fn lookup_is_case_insensitive() {
        let expanded = expand_concerns(["Aging"]);
        assert_eq!(expanded, vec!["wrinkles", "fine_lines", "aging", "firmness"]);
    }
}
