//! Integration tests for the match engine.

use std::collections::BTreeMap;

use colrec_embed::{EmbeddingProvider, HashEmbedder};
use colrec_match::{MatchEngine, MatchThreshold};
use colrec_model::{EmbedError, MatchError};

/// Provider returning fixed vectors keyed by normalized text.
struct StubProvider {
    vectors: BTreeMap<String, Vec<f32>>,
    dimension: usize,
}

impl StubProvider {
    fn new(entries: &[(&str, &[f32])]) -> Self {
        let dimension = entries.first().map_or(0, |(_, vector)| vector.len());
        let vectors = entries
            .iter()
            .map(|(text, vector)| ((*text).to_string(), vector.to_vec()))
            .collect();
        Self { vectors, dimension }
    }
}

impl EmbeddingProvider for StubProvider {
    fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbedError> {
        texts
            .iter()
            .map(|text| {
                self.vectors
                    .get(text)
                    .cloned()
                    .ok_or_else(|| EmbedError::Provider(format!("no stub vector for '{text}'")))
            })
            .collect()
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

fn headers(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|label| (*label).to_string()).collect()
}

#[test]
fn matches_accented_headers_against_plain_fields() {
    let provider = HashEmbedder::new();
    let outcome = MatchEngine::new(&provider)
        .align(
            &headers(&["Référence", "Montant Total"]),
            &headers(&["reference", "montant"]),
        )
        .expect("align");

    assert!(outcome.unmatched_columns.is_empty());
    assert_eq!(outcome.assignments.len(), 2);
    assert_eq!(outcome.assignments[0].source_column, "Référence");
    assert_eq!(outcome.assignments[0].target_field, "reference");
    assert_eq!(outcome.assignments[1].source_column, "Montant Total");
    assert_eq!(outcome.assignments[1].target_field, "montant");
}

#[test]
fn unrelated_header_goes_unmatched() {
    let provider = HashEmbedder::new();
    let outcome = MatchEngine::new(&provider)
        .align(&headers(&["xyz123"]), &headers(&["date", "amount"]))
        .expect("align");

    assert!(outcome.assignments.is_empty());
    assert_eq!(outcome.unmatched_columns, vec!["xyz123".to_string()]);
}

#[test]
fn exact_normalized_form_scores_maximal() {
    let provider = HashEmbedder::new();
    let outcome = MatchEngine::new(&provider)
        .align(
            &headers(&["Référence"]),
            &headers(&["garantie", "reference"]),
        )
        .expect("align");

    let assignment = outcome.assignment_for("Référence").expect("assigned");
    assert_eq!(assignment.target_field, "reference");
    assert!(assignment.similarity > 0.999_999);
}

#[test]
fn argmax_ties_break_to_first_target() {
    let provider = StubProvider::new(&[
        ("source", &[1.0, 0.0]),
        ("first", &[1.0, 0.0]),
        ("second", &[1.0, 0.0]),
    ]);
    let outcome = MatchEngine::new(&provider)
        .align(&headers(&["source"]), &headers(&["first", "second"]))
        .expect("align");

    assert_eq!(outcome.assignments.len(), 1);
    assert_eq!(outcome.assignments[0].target_field, "first");
}

#[test]
fn contested_target_goes_to_higher_similarity() {
    // Both sources prefer "target"; "strong" wins and "weak" does not fall
    // back to a second choice.
    let provider = StubProvider::new(&[
        ("strong", &[1.0, 0.0]),
        ("weak", &[0.9, 0.435_889_89]),
        ("target", &[1.0, 0.0]),
    ]);
    let outcome = MatchEngine::new(&provider)
        .align(&headers(&["weak", "strong"]), &headers(&["target"]))
        .expect("align");

    assert_eq!(outcome.assignments.len(), 1);
    assert_eq!(outcome.assignments[0].source_column, "strong");
    assert_eq!(outcome.unmatched_columns, vec!["weak".to_string()]);
}

#[test]
fn equal_contenders_resolve_to_earlier_source() {
    let provider = StubProvider::new(&[
        ("left", &[1.0, 0.0]),
        ("right", &[1.0, 0.0]),
        ("target", &[1.0, 0.0]),
    ]);
    let outcome = MatchEngine::new(&provider)
        .align(&headers(&["left", "right"]), &headers(&["target"]))
        .expect("align");

    assert_eq!(outcome.assignments[0].source_column, "left");
    assert_eq!(outcome.unmatched_columns, vec!["right".to_string()]);
}

#[test]
fn score_below_threshold_is_rejected() {
    // cos = 0.6 exactly in f64 is below the 0.7 cutoff.
    let provider = StubProvider::new(&[("source", &[0.6, 0.8]), ("target", &[1.0, 0.0])]);
    let outcome = MatchEngine::new(&provider)
        .align(&headers(&["source"]), &headers(&["target"]))
        .expect("align");

    assert!(outcome.assignments.is_empty());
    assert_eq!(outcome.unmatched_columns, vec!["source".to_string()]);
}

#[test]
fn lowered_threshold_admits_weaker_matches() {
    let provider = StubProvider::new(&[("source", &[0.6, 0.8]), ("target", &[1.0, 0.0])]);
    let outcome = MatchEngine::new(&provider)
        .with_threshold(MatchThreshold::new(0.5))
        .align(&headers(&["source"]), &headers(&["target"]))
        .expect("align");

    assert_eq!(outcome.assignments.len(), 1);
}

#[test]
fn empty_targets_leave_everything_unmatched() {
    let provider = HashEmbedder::new();
    let outcome = MatchEngine::new(&provider)
        .align(&headers(&["a", "b"]), &[])
        .expect("align");

    assert!(outcome.assignments.is_empty());
    assert_eq!(outcome.unmatched_columns, headers(&["a", "b"]));
}

#[test]
fn empty_sources_produce_empty_outcome() {
    let provider = HashEmbedder::new();
    let outcome = MatchEngine::new(&provider)
        .align(&[], &headers(&["reference"]))
        .expect("align");
    assert!(outcome.is_empty());
}

#[test]
fn provider_failure_propagates() {
    let provider = StubProvider::new(&[("known", &[1.0])]);
    let error = MatchEngine::new(&provider)
        .align(&headers(&["unknown"]), &headers(&["known"]))
        .expect_err("provider has no vector for 'unknown'");
    assert!(matches!(error, MatchError::Embed(EmbedError::Provider(_))));
}

#[test]
fn short_batch_is_a_shape_error() {
    struct ShortBatch;
    impl EmbeddingProvider for ShortBatch {
        fn embed(&self, _texts: &[String]) -> Result<Vec<Vec<f32>>, EmbedError> {
            Ok(vec![])
        }
        fn dimension(&self) -> usize {
            2
        }
    }
    let error = MatchEngine::new(&ShortBatch)
        .align(&headers(&["a"]), &headers(&["b"]))
        .expect_err("batch shape violation");
    assert!(matches!(
        error,
        MatchError::Embed(EmbedError::BatchShape {
            expected: 1,
            actual: 0
        })
    ));
}

#[test]
fn wrong_width_is_a_dimension_error() {
    struct WrongWidth;
    impl EmbeddingProvider for WrongWidth {
        fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbedError> {
            Ok(texts.iter().map(|_| vec![1.0, 0.0, 0.0]).collect())
        }
        fn dimension(&self) -> usize {
            2
        }
    }
    let error = MatchEngine::new(&WrongWidth)
        .align(&headers(&["a"]), &headers(&["b"]))
        .expect_err("dimension violation");
    assert!(matches!(
        error,
        MatchError::Dimension {
            expected: 2,
            actual: 3
        }
    ));
}
