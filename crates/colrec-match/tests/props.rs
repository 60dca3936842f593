//! Property tests for normalization and match partitioning.

use proptest::prelude::*;

use colrec_embed::HashEmbedder;
use colrec_match::{MatchEngine, normalize};

proptest! {
    #[test]
    fn normalize_is_idempotent(raw in ".*") {
        let once = normalize(&raw);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalize_lowercases_header_text(raw in "[a-zA-ZÀ-ÿ0-9 '._-]{0,32}") {
        let normalized = normalize(&raw);
        prop_assert!(!normalized.chars().any(char::is_uppercase));
    }

    #[test]
    fn every_header_is_assigned_or_unmatched(
        headers in prop::collection::vec("[a-zA-Zéèàû0-9 ]{0,24}", 0..12)
    ) {
        let provider = HashEmbedder::new();
        let targets = vec![
            "reference".to_string(),
            "montant".to_string(),
            "date".to_string(),
        ];
        let outcome = MatchEngine::new(&provider)
            .align(&headers, &targets)
            .expect("align");

        prop_assert_eq!(
            outcome.assignments.len() + outcome.unmatched_columns.len(),
            headers.len()
        );
        for header in &headers {
            let assigned = outcome.assignment_for(header).is_some();
            let unmatched = outcome.unmatched_columns.contains(header);
            prop_assert!(assigned || unmatched);
        }
        // Exclusive claims: no target is taken twice.
        let mut seen = std::collections::BTreeSet::new();
        for assignment in &outcome.assignments {
            prop_assert!(seen.insert(assignment.target_field.clone()));
        }
    }
}
