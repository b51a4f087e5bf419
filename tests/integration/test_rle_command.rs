//! End-to-end tests for the run-length encoding pipelines.

use tempfile::TempDir;

use fapipe_lib::fasta::{FastaSink, FastaSource};
use fapipe_lib::pipeline::Pipeline;
use fapipe_lib::rle::{RleAnnotate, RleDecoder, RleEncoder};

use crate::helpers::{read_fasta, write_fasta};

#[test]
fn test_rle_annotated_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.fa");
    let output = dir.path().join("out.fa");
    write_fasta(&input, &[("s", "AAAACCCGGT")]);

    Pipeline::from_source(FastaSource::new(Some(input)))
        .then(RleEncoder::new(2))
        .then(RleAnnotate::new(2))
        .drain(FastaSink::new(Some(output.clone())))
        .unwrap();

    let records = read_fasta(&output);
    assert_eq!(records.len(), 1);
    // Runs A×4 C×3 G×2 T×1 annotate as counts+33 = '%', '$', '#', '"'.
    assert_eq!(records[0].0, "s %$#\"");
    assert_eq!(records[0].1, "ACGT");
}

#[test]
fn test_encode_then_decode_is_identity() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.fa");
    let output = dir.path().join("out.fa");
    write_fasta(&input, &[("s", "AAAACCCGGT")]);

    Pipeline::from_source(FastaSource::new(Some(input)))
        .then(RleEncoder::new(2))
        .then(RleDecoder::new(2))
        .drain(FastaSink::new(Some(output.clone())))
        .unwrap();

    let records = read_fasta(&output);
    assert_eq!(records, vec![("s".to_string(), "AAAACCCGGT".to_string())]);
}

#[test]
fn test_round_trip_preserves_every_record() {
    let inputs: Vec<(String, String)> = (0..200)
        .map(|i| {
            let bases = match i % 4 {
                0 => "AAAACCCGGT".to_string(),
                1 => "A".repeat(300),
                2 => "ACGT".repeat(25),
                _ => format!("{}{}", "T".repeat(i % 130), "G"),
            };
            (format!("r{i}"), bases)
        })
        .collect();

    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.fa");
    let output = dir.path().join("out.fa");
    let refs: Vec<(&str, &str)> =
        inputs.iter().map(|(name, bases)| (name.as_str(), bases.as_str())).collect();
    write_fasta(&input, &refs);

    Pipeline::from_source(FastaSource::new(Some(input)))
        .then(RleEncoder::new(4))
        .then(RleDecoder::new(4))
        .drain(FastaSink::new(Some(output.clone())))
        .unwrap();

    // Parallel stages reorder records; compare as sets.
    let mut expected = inputs;
    expected.sort();
    let mut actual = read_fasta(&output);
    actual.sort();
    assert_eq!(actual, expected);
}

#[test]
fn test_empty_record_is_skipped_not_fatal() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.fa");
    let output = dir.path().join("out.fa");
    write_fasta(&input, &[("empty", ""), ("kept", "AACC")]);

    Pipeline::from_source(FastaSource::new(Some(input)))
        .then(RleEncoder::new(1))
        .then(RleAnnotate::new(1))
        .drain(FastaSink::new(Some(output.clone())))
        .unwrap();

    let records = read_fasta(&output);
    assert_eq!(records.len(), 1);
    assert!(records[0].0.starts_with("kept "));
}
