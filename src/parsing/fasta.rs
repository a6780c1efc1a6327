//! FASTA input via noodles, and unwrapped FASTA output.
//!
//! Supported input extensions:
//! - `.fa`, `.fasta`, `.fna` and anything else (uncompressed)
//! - `.gz`, `.bgz` (gzip or bgzip compressed)
//!
//! The full header line (name and description) becomes the record id.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;
use noodles::fasta;

use crate::core::reference::{ReferenceSequence, ReferenceSet};
use crate::parsing::ParseError;

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Streaming reader over the records of a FASTA file
pub struct FastaRecords {
    path: PathBuf,
    reader: fasta::io::Reader<Box<dyn BufRead>>,
    definition: String,
}

impl Iterator for FastaRecords {
    type Item = Result<ReferenceSequence, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        read_record(&mut self.reader, &mut self.definition)
            .map_err(|e| {
                ParseError::Noodles(format!(
                    "Failed to parse FASTA record in {}: {e}",
                    self.path.display()
                ))
            })
            .transpose()
    }
}

/// Open a FASTA file for streaming.
///
/// # Errors
///
/// Returns `ParseError::InputNotFound` if the file cannot be opened.
pub fn open_fasta(path: &Path) -> Result<FastaRecords, ParseError> {
    let file = File::open(path).map_err(|source| ParseError::InputNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let inner: Box<dyn BufRead> = if is_gzipped(path) {
        Box::new(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    Ok(FastaRecords {
        path: path.to_path_buf(),
        reader: fasta::io::Reader::new(inner),
        definition: String::new(),
    })
}

/// Read every record of a FASTA file into a reference set.
///
/// # Errors
///
/// Returns `ParseError::InputNotFound` if the file cannot be opened, or
/// `ParseError::Noodles` on the first record that fails to parse.
pub fn read_references(path: &Path) -> Result<ReferenceSet, ParseError> {
    open_fasta(path)?.collect()
}

/// Parse FASTA records from any reader
///
/// # Errors
///
/// Returns `ParseError::Noodles` on the first record that fails to parse.
pub fn parse_fasta_reader<R: BufRead>(reader: R) -> Result<Vec<ReferenceSequence>, ParseError> {
    let mut fasta_reader = fasta::io::Reader::new(reader);
    let mut definition = String::new();
    let mut records = Vec::new();

    while let Some(record) = read_record(&mut fasta_reader, &mut definition)
        .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?
    {
        records.push(record);
    }

    Ok(records)
}

/// Read the next record, keeping the definition line as the id.
///
/// noodles' `Record` splits the definition into name and description on
/// whitespace, which would lose tabs and repeated spaces, so the raw line is
/// read instead. Only trailing whitespace is dropped.
fn read_record<R: BufRead>(
    reader: &mut fasta::io::Reader<R>,
    definition: &mut String,
) -> io::Result<Option<ReferenceSequence>> {
    definition.clear();
    if reader.read_definition(definition)? == 0 {
        return Ok(None);
    }

    let id = definition.strip_prefix('>').ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("invalid definition line: {definition:?}"),
        )
    })?;
    let id = id.trim_end().to_string();

    let mut sequence = Vec::new();
    reader.read_sequence(&mut sequence)?;

    Ok(Some(ReferenceSequence::new(id, sequence)))
}

/// Write records as `>id` / sequence line pairs, without line wrapping
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_fasta_to<'a, W, I>(writer: &mut W, records: I) -> std::io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a ReferenceSequence>,
{
    for record in records {
        writer.write_all(b">")?;
        writer.write_all(record.id.as_str().as_bytes())?;
        writer.write_all(b"\n")?;
        writer.write_all(&record.sequence)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Write records to a FASTA file
///
/// # Errors
///
/// Returns `ParseError::OutputNotWritable` if the file cannot be created or written.
pub fn write_fasta<'a, I>(path: &Path, records: I) -> Result<(), ParseError>
where
    I: IntoIterator<Item = &'a ReferenceSequence>,
{
    let not_writable = |source| ParseError::OutputNotWritable {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = File::create(path).map(BufWriter::new).map_err(not_writable)?;
    write_fasta_to(&mut writer, records).map_err(not_writable)
}
