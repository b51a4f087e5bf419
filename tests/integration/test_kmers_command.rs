//! End-to-end tests for the canonical k-mer counting pipelines.

use std::fs;

use tempfile::TempDir;

use fapipe_lib::fasta::FastaSource;
use fapipe_lib::kmer::{KmerCounter, KmerEncoder};
use fapipe_lib::pipeline::Pipeline;
use fapipe_lib::rle::{RleCollapse, RleEncoder};

use crate::helpers::write_fasta;

fn read_report(path: &std::path::Path) -> Vec<(String, u64)> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| {
            let (kmer, count) = line.split_once(' ').unwrap();
            (kmer.to_string(), count.parse().unwrap())
        })
        .collect()
}

fn count_kmers(
    records: &[(&str, &str)],
    k: usize,
    workers: usize,
    collapse: bool,
) -> Vec<(String, u64)> {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.fa");
    let report = dir.path().join("report.txt");
    write_fasta(&input, records);

    let source = FastaSource::new(Some(input));
    let counter = KmerCounter::new(Some(report.clone()), k);
    if collapse {
        Pipeline::from_source(source)
            .then(RleEncoder::new(workers))
            .then(RleCollapse::new(workers))
            .then(KmerEncoder::new(k, workers))
            .drain(counter)
            .unwrap();
    } else {
        Pipeline::from_source(source)
            .then(KmerEncoder::new(k, workers))
            .drain(counter)
            .unwrap();
    }
    read_report(&report)
}

#[test]
fn test_homopolymer_counts_canonically() {
    // Three AA windows in AAAA; AA is its own canonical form since its
    // reverse complement TT packs larger.
    let report = count_kmers(&[("a", "AAAA")], 2, 1, false);
    assert_eq!(report, vec![("AA".to_string(), 3)]);
}

#[test]
fn test_too_short_sequences_contribute_nothing() {
    let report = count_kmers(&[("a", "ACG"), ("b", "AC")], 4, 2, false);
    assert!(report.is_empty());
}

#[test]
fn test_collapse_counts_over_collapsed_bases() {
    // AAACCGGT collapses to ACGT: windows AC, CG, GT. GT's reverse
    // complement is AC, so AC counts twice.
    let report = count_kmers(&[("a", "AAACCGGT")], 2, 2, true);
    assert_eq!(report, vec![("AC".to_string(), 2), ("CG".to_string(), 1)]);
}

#[test]
fn test_parallel_run_counts_every_window() {
    // 400 copies of a 10-base sequence, k=4: 7 windows each.
    let records: Vec<(String, String)> =
        (0..400).map(|i| (format!("r{i}"), "ACGTACGTAC".to_string())).collect();
    let refs: Vec<(&str, &str)> =
        records.iter().map(|(name, bases)| (name.as_str(), bases.as_str())).collect();

    let report = count_kmers(&refs, 4, 4, false);
    let total: u64 = report.iter().map(|(_, count)| count).sum();
    assert_eq!(total, 400 * 7);
    for pair in report.windows(2) {
        assert!(pair[0].1 >= pair[1].1, "report must be sorted descending");
    }
}

#[test]
fn test_forward_and_reverse_complement_reads_count_together() {
    let forward = "AAACCGGTAC";
    let reverse: String = forward
        .chars()
        .rev()
        .map(|c| match c {
            'A' => 'T',
            'C' => 'G',
            'G' => 'C',
            _ => 'A',
        })
        .collect();

    let single = count_kmers(&[("f", forward)], 3, 1, false);
    let both = count_kmers(&[("f", forward), ("r", reverse.as_str())], 3, 1, false);

    let mut single_sorted = single;
    single_sorted.sort();
    let mut both_sorted = both;
    both_sorted.sort();
    let doubled: Vec<(String, u64)> =
        single_sorted.iter().map(|(kmer, count)| (kmer.clone(), count * 2)).collect();
    assert_eq!(both_sorted, doubled);
}
