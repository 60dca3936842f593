//! Header text normalization.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Canonicalizes a header for comparison: lowercase, then canonical
/// decomposition (NFD) with all combining marks dropped, so accented and
/// plain spellings collapse to the same form.
///
/// Total and idempotent; `normalize("Référence") == "reference"`.
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.to_lowercase()
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_accents() {
        assert_eq!(normalize("Référence"), "reference");
        assert_eq!(normalize("Date d'Émission"), "date d'emission");
        assert_eq!(normalize("MONTANT Total"), "montant total");
    }

    #[test]
    fn accented_and_plain_forms_collapse() {
        assert_eq!(normalize("Référence"), normalize("reference"));
    }

    #[test]
    fn plain_ascii_passes_through() {
        assert_eq!(normalize("amount"), "amount");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn idempotent_on_typical_headers() {
        for header in ["Réf.", "Ville d'Origine", "Code Barre", "xyz123"] {
            let once = normalize(header);
            assert_eq!(normalize(&once), once);
        }
    }
}
