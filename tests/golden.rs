//! Golden file integration tests.
//!
//! Reads tests/testdata/sequences_golden.json and verifies the engine and
//! the CLI presenter produce the expected terms and sums.

use serde::Deserialize;

use progcalc_cli::{CLIResultPresenter, PresenterOptions};
use progcalc_core::{compute, compute_sum, generate_terms, SequenceError, SequenceKind};
use progcalc_core::{SequenceRequest, Terms};

// ---------------------------------------------------------------------------
// Golden data structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    values: Vec<GoldenEntry>,
}

#[derive(Deserialize)]
struct GoldenEntry {
    kind: SequenceKind,
    first_term: f64,
    step: f64,
    term_count: u64,
    #[serde(default)]
    terms: Option<Vec<f64>>,
    #[serde(default)]
    sum: Option<f64>,
    #[serde(default)]
    error: Option<String>,
}

impl GoldenEntry {
    fn request(&self) -> SequenceRequest {
        SequenceRequest::new(self.kind, self.first_term, self.step, self.term_count)
    }

    fn label(&self) -> String {
        format!(
            "{} a={} step={} n={}",
            self.kind, self.first_term, self.step, self.term_count
        )
    }
}

fn load_golden_data() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/sequences_golden.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

fn assert_close(actual: f64, expected: f64, label: &str) {
    let tol = 1e-12 * expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= tol,
        "{label}: expected {expected}, got {actual}"
    );
}

// ---------------------------------------------------------------------------
// Engine
// ---------------------------------------------------------------------------

#[test]
fn golden_terms() {
    for entry in load_golden_data().values {
        let Some(expected) = &entry.terms else {
            continue;
        };
        let terms = generate_terms(entry.kind, entry.first_term, entry.step, entry.term_count)
            .unwrap_or_else(|e| panic!("{}: {e}", entry.label()));
        assert_eq!(&terms, expected, "{}", entry.label());
    }
}

#[test]
fn golden_sums() {
    for entry in load_golden_data().values {
        let Some(expected) = entry.sum else {
            continue;
        };
        let sum = compute_sum(entry.kind, entry.first_term, entry.step, entry.term_count)
            .unwrap_or_else(|e| panic!("{}: {e}", entry.label()));
        assert_close(sum, expected, &entry.label());
    }
}

#[test]
fn golden_term_counts() {
    for entry in load_golden_data().values {
        if entry.error.is_some() {
            continue;
        }
        let result = compute(&entry.request()).unwrap();
        assert_eq!(result.len() as u64, entry.term_count, "{}", entry.label());
        assert_eq!(
            Terms::new(entry.kind, entry.first_term, entry.step, entry.term_count).len() as u64,
            entry.term_count
        );
    }
}

#[test]
fn golden_errors() {
    for entry in load_golden_data().values {
        let Some(expected) = &entry.error else {
            continue;
        };
        let err = compute(&entry.request()).unwrap_err();
        match expected.as_str() {
            "invalid_term_count" => {
                assert_eq!(err, SequenceError::InvalidTermCount(entry.term_count));
            }
            "domain" => assert!(matches!(err, SequenceError::Domain(_)), "{}", entry.label()),
            other => panic!("unknown golden error kind: {other}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Presentation
// ---------------------------------------------------------------------------

#[test]
fn golden_quiet_output_lists_every_term() {
    let presenter = CLIResultPresenter::new(PresenterOptions {
        quiet: true,
        ..Default::default()
    });
    for entry in load_golden_data().values {
        if entry.error.is_some() {
            continue;
        }
        let request = entry.request();
        let result = compute(&request).unwrap();
        let out = presenter.render(&request, &result);
        let mut lines = out.lines();
        let terms_line = lines.next().unwrap();
        assert_eq!(
            terms_line.split(", ").count() as u64,
            entry.term_count,
            "{}",
            entry.label()
        );
        assert!(lines.next().is_some(), "{}: missing sum line", entry.label());
    }
}

#[test]
fn golden_json_round_trips_terms() {
    let presenter = CLIResultPresenter::new(PresenterOptions::default());
    for entry in load_golden_data().values {
        let Some(expected) = &entry.terms else {
            continue;
        };
        let request = entry.request();
        let result = compute(&request).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&presenter.render_json(&request, &result).unwrap()).unwrap();
        let terms: Vec<f64> = serde_json::from_value(json["terms"].clone()).unwrap();
        assert_eq!(&terms, expected, "{}", entry.label());
    }
}
