//! Two-line FASTA input and output.
//!
//! Records follow the two-line convention: a header line starting with `>`
//! (the name is the remainder of the line) immediately followed by one
//! content line. Multi-line wrapped FASTA is not supported.
//!
//! Both ends speak gzip transparently: paths ending in `.gz` are
//! decompressed on read and compressed on write. An omitted path means
//! stdin or stdout.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use crossbeam_channel::{Receiver, Sender};
use flate2::Compression;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;

use crate::pipeline::{Sink, Source};
use crate::progress::ProgressTracker;
use crate::seq::Sequence;

/// Buffer size for file and stream I/O.
const IO_BUFFER_SIZE: usize = 64 * 1024;

fn is_gzip_path(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "gz")
}

/// Opens a buffered line reader over a file, a gzipped file, or stdin.
///
/// Opening a missing file is a hard error with context; a pipeline run
/// never silently degrades to an empty input.
pub fn open_reader(path: Option<&Path>) -> Result<Box<dyn BufRead + Send>> {
    match path {
        None => Ok(Box::new(BufReader::with_capacity(IO_BUFFER_SIZE, io::stdin()))),
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open input file '{}'", path.display()))?;
            if is_gzip_path(path) {
                Ok(Box::new(BufReader::with_capacity(IO_BUFFER_SIZE, MultiGzDecoder::new(file))))
            } else {
                Ok(Box::new(BufReader::with_capacity(IO_BUFFER_SIZE, file)))
            }
        }
    }
}

/// Opens a buffered writer to a file, a gzipped file, or stdout.
pub fn open_writer(path: Option<&Path>) -> Result<Box<dyn Write + Send>> {
    match path {
        None => Ok(Box::new(BufWriter::with_capacity(IO_BUFFER_SIZE, io::stdout()))),
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file '{}'", path.display()))?;
            if is_gzip_path(path) {
                let encoder = GzEncoder::new(file, Compression::default());
                Ok(Box::new(BufWriter::with_capacity(IO_BUFFER_SIZE, encoder)))
            } else {
                Ok(Box::new(BufWriter::with_capacity(IO_BUFFER_SIZE, file)))
            }
        }
    }
}

/// Streams two-line FASTA records from a reader into a channel.
///
/// Lines before the first header are skipped, as is any stray line between
/// a record's content and the next header. A trailing header without a
/// content line yields nothing.
pub fn read_records<R: BufRead>(
    reader: R,
    out: &Sender<Sequence>,
    progress: Option<&ProgressTracker>,
) -> Result<()> {
    let mut name: Option<String> = None;
    for line in reader.lines() {
        let line = line.context("failed to read FASTA input")?;
        match name.take() {
            None => {
                if let Some(header) = line.strip_prefix('>') {
                    name = Some(header.to_string());
                }
                // not a header: junk line, skip it
            }
            Some(header) => {
                if let Some(tracker) = progress {
                    tracker.inc(1);
                }
                if out.send(Sequence::new(header, line.into_bytes())).is_err() {
                    // consumer stopped; the run is already failing downstream
                    return Ok(());
                }
            }
        }
    }
    Ok(())
}

/// Writes one record in two-line FASTA form.
pub fn write_record<W: Write>(out: &mut W, seq: &Sequence) -> io::Result<()> {
    out.write_all(b">")?;
    out.write_all(seq.name().as_bytes())?;
    out.write_all(b"\n")?;
    out.write_all(seq.bases())?;
    out.write_all(b"\n")
}

/// Pipeline source reading two-line FASTA from a file or stdin.
pub struct FastaSource {
    path: Option<PathBuf>,
    progress: Option<Arc<ProgressTracker>>,
}

impl FastaSource {
    /// Creates a source for the given path, or stdin when `None`.
    #[must_use]
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path, progress: None }
    }

    /// Attaches a progress tracker incremented once per record read.
    #[must_use]
    pub fn with_progress(mut self, tracker: Arc<ProgressTracker>) -> Self {
        self.progress = Some(tracker);
        self
    }
}

impl Source for FastaSource {
    type Out = Sequence;

    fn run(self, out: &Sender<Sequence>) -> Result<()> {
        let reader = open_reader(self.path.as_deref())?;
        read_records(reader, out, self.progress.as_deref())
    }
}

/// Pipeline sink writing two-line FASTA to a file or stdout.
pub struct FastaSink {
    path: Option<PathBuf>,
}

impl FastaSink {
    /// Creates a sink for the given path, or stdout when `None`.
    #[must_use]
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }
}

impl Sink for FastaSink {
    type In = Sequence;

    fn run(self, input: &Receiver<Sequence>) -> Result<()> {
        let mut out = open_writer(self.path.as_deref())?;
        for seq in input {
            write_record(&mut out, &seq).context("failed to write FASTA output")?;
        }
        out.flush().context("failed to flush FASTA output")?;
        Ok(())
    }
}
