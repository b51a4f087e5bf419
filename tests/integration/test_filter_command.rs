//! End-to-end tests for the length-filter pipeline.

use tempfile::TempDir;

use fapipe_lib::fasta::{FastaSink, FastaSource};
use fapipe_lib::filter::LengthFilter;
use fapipe_lib::pipeline::Pipeline;

use crate::helpers::{read_fasta, write_fasta};

fn run_filter(min_length: usize, records: &[(&str, &str)]) -> Vec<(String, String)> {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.fa");
    let output = dir.path().join("out.fa");
    write_fasta(&input, records);

    Pipeline::from_source(FastaSource::new(Some(input)))
        .then(LengthFilter::new(min_length))
        .drain(FastaSink::new(Some(output.clone())))
        .unwrap();

    read_fasta(&output)
}

#[test]
fn test_record_at_threshold_passes_unchanged() {
    let out = run_filter(5, &[("seq1", "AAACCGGT")]);
    assert_eq!(out, vec![("seq1".to_string(), "AAACCGGT".to_string())]);
}

#[test]
fn test_record_below_threshold_is_dropped() {
    let out = run_filter(9, &[("seq1", "AAACCGGT")]);
    assert!(out.is_empty());
}

#[test]
fn test_mixed_lengths() {
    let out = run_filter(
        4,
        &[("a", "ACG"), ("b", "ACGT"), ("c", "ACGTACGT"), ("d", "AC")],
    );
    let names: Vec<&str> = out.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["b", "c"]);
}

#[test]
fn test_missing_input_fails_the_run() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.fa");
    let result = Pipeline::from_source(FastaSource::new(Some(dir.path().join("absent.fa"))))
        .then(LengthFilter::new(1))
        .drain(FastaSink::new(Some(output)));
    let error = result.unwrap_err();
    assert!(error.to_string().contains("absent.fa"));
}
