//! Shared fixtures for integration tests.

use std::fs;
use std::path::Path;

/// Writes records as two-line FASTA.
pub fn write_fasta(path: &Path, records: &[(&str, &str)]) {
    let mut out = String::new();
    for (name, bases) in records {
        out.push('>');
        out.push_str(name);
        out.push('\n');
        out.push_str(bases);
        out.push('\n');
    }
    fs::write(path, out).expect("failed to write FASTA fixture");
}

/// Reads two-line FASTA back as (name, bases) pairs.
pub fn read_fasta(path: &Path) -> Vec<(String, String)> {
    let text = fs::read_to_string(path).expect("failed to read FASTA output");
    let mut records = Vec::new();
    let mut lines = text.lines();
    while let Some(header) = lines.next() {
        let name = header.strip_prefix('>').expect("expected a FASTA header").to_string();
        let bases = lines.next().expect("header without content line").to_string();
        records.push((name, bases));
    }
    records
}
