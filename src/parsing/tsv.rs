use std::fs::File;
use std::io::{BufWriter, ErrorKind, Read, Write};
use std::path::Path;

use crate::classify::counts::ClassificationCounts;
use crate::core::types::ReferenceId;
use crate::parsing::ParseError;
use crate::probes::table::ProbeTable;

/// Read a probe table file with columns: `reference_id`, probe
///
/// # Errors
///
/// Returns `ParseError::InputNotFound` if the file cannot be opened,
/// `ParseError::InvalidText` if it is not UTF-8, or
/// `ParseError::MalformedReferenceLine` for the first bad line.
pub fn read_probe_table(path: &Path) -> Result<ProbeTable, ParseError> {
    let mut file = File::open(path).map_err(|source| ParseError::InputNotFound {
        path: path.to_path_buf(),
        source,
    })?;

    let mut content = String::new();
    file.read_to_string(&mut content).map_err(|source| {
        if source.kind() == ErrorKind::InvalidData {
            ParseError::InvalidText {
                path: path.to_path_buf(),
                source,
            }
        } else {
            ParseError::Io(source)
        }
    })?;

    parse_probe_table_text(&content)
}

/// Parse probe table text, one `reference_id<TAB>probe` pair per line.
///
/// Blank lines after the last row are ignored. Every other line, blank or
/// not, must have exactly two non-empty tab-separated fields. Rows keep their
/// file order; a repeated id takes the later probe but keeps its first
/// position.
///
/// # Errors
///
/// Returns `ParseError::MalformedReferenceLine` for the first bad line.
pub fn parse_probe_table_text(text: &str) -> Result<ProbeTable, ParseError> {
    let mut table = ProbeTable::new();
    let lines: Vec<&str> = text.lines().map(str::trim).collect();
    let rows = lines
        .iter()
        .rposition(|line| !line.is_empty())
        .map_or(0, |last| last + 1);

    for (i, &line) in lines[..rows].iter().enumerate() {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 2 || fields.iter().any(|f| f.is_empty()) {
            // Line numbers in errors are 1-based for user friendliness
            return Err(ParseError::MalformedReferenceLine {
                line: i + 1,
                content: line.to_string(),
            });
        }

        table.insert(ReferenceId::new(fields[0]), fields[1].as_bytes().to_vec());
    }

    Ok(table)
}

/// Write `reference_id<TAB>probe` rows in table order
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_probe_table_to<W: Write>(writer: &mut W, table: &ProbeTable) -> std::io::Result<()> {
    for entry in table {
        writer.write_all(entry.id.as_str().as_bytes())?;
        writer.write_all(b"\t")?;
        writer.write_all(&entry.probe)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}

/// Write `label<TAB>count` rows in first-encountered order
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_counts_to<W: Write>(
    writer: &mut W,
    counts: &ClassificationCounts,
) -> std::io::Result<()> {
    for (label, count) in counts.iter() {
        writeln!(writer, "{label}\t{count}")?;
    }
    writer.flush()
}

/// Write a probe table file
///
/// # Errors
///
/// Returns `ParseError::OutputNotWritable` if the file cannot be created or written.
pub fn write_probe_table(path: &Path, table: &ProbeTable) -> Result<(), ParseError> {
    write_file(path, |writer| write_probe_table_to(writer, table))
}

/// Write a classification counts file
///
/// # Errors
///
/// Returns `ParseError::OutputNotWritable` if the file cannot be created or written.
pub fn write_counts(path: &Path, counts: &ClassificationCounts) -> Result<(), ParseError> {
    write_file(path, |writer| write_counts_to(writer, counts))
}

fn write_file<F>(path: &Path, write: F) -> Result<(), ParseError>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let not_writable = |source| ParseError::OutputNotWritable {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = File::create(path).map(BufWriter::new).map_err(not_writable)?;
    write(&mut writer).map_err(not_writable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Outcome;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_probe_table() {
        let tsv = "ref2 description\tACGTACGT\nref1\tTTTTGGGG\n";
        let table = parse_probe_table_text(tsv).unwrap();

        let rows: Vec<_> = table
            .iter()
            .map(|e| (e.id.as_str(), e.probe.as_slice()))
            .collect();
        assert_eq!(
            rows,
            vec![
                ("ref2 description", &b"ACGTACGT"[..]),
                ("ref1", &b"TTTTGGGG"[..])
            ]
        );
    }

    #[test]
    fn test_parse_trims_and_ignores_trailing_blank_lines() {
        let tsv = "ref1\tACGT\r\n  ref2\tGGCC  \n\n  \n";
        let table = parse_probe_table_text(tsv).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.get(&ReferenceId::new("ref2")), Some(&b"GGCC"[..]));
    }

    #[test]
    fn test_interior_blank_line_is_fatal() {
        assert!(matches!(
            parse_probe_table_text("ref1\tACGT\n\nref2\tGGCC\n"),
            Err(ParseError::MalformedReferenceLine { line: 2, .. })
        ));
        assert!(matches!(
            parse_probe_table_text("\nref1\tACGT\n"),
            Err(ParseError::MalformedReferenceLine { line: 1, .. })
        ));
    }

    #[test]
    fn test_blank_only_table_is_empty() {
        assert!(parse_probe_table_text("\n\n").unwrap().is_empty());
    }

    #[test]
    fn test_non_utf8_table_is_not_reported_missing() {
        let mut temp = NamedTempFile::with_suffix(".tsv").unwrap();
        temp.write_all(b"ref1\t\xff\xfeACGT\n").unwrap();
        temp.flush().unwrap();

        let result = read_probe_table(temp.path());
        assert!(matches!(result, Err(ParseError::InvalidText { .. })));
    }

    #[test]
    fn test_missing_probe_column_is_fatal() {
        let tsv = "ref1\tACGT\nref2\nref3\tGGGG\n";
        let err = parse_probe_table_text(tsv).unwrap_err();
        match err {
            ParseError::MalformedReferenceLine { line, content } => {
                assert_eq!(line, 2);
                assert_eq!(content, "ref2");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_extra_columns_are_fatal() {
        assert!(matches!(
            parse_probe_table_text("ref1\tACGT\textra\n"),
            Err(ParseError::MalformedReferenceLine { line: 1, .. })
        ));
    }

    #[test]
    fn test_empty_field_is_fatal() {
        assert!(parse_probe_table_text("\tACGT\n").is_err());
        assert!(parse_probe_table_text("ref1\t\tACGT\n").is_err());
    }

    #[test]
    fn test_empty_table() {
        assert!(parse_probe_table_text("").unwrap().is_empty());
    }

    #[test]
    fn test_probe_table_file_round_trip() {
        let table: ProbeTable = vec![("b", "CCCGGG"), ("a", "AAATTT")].into_iter().collect();
        let temp = NamedTempFile::with_suffix(".tsv").unwrap();

        write_probe_table(temp.path(), &table).unwrap();
        let content = std::fs::read_to_string(temp.path()).unwrap();
        assert_eq!(content, "b\tCCCGGG\na\tAAATTT\n");
        assert_eq!(read_probe_table(temp.path()).unwrap(), table);
    }

    #[test]
    fn test_write_counts() {
        let a = ReferenceId::new("a");
        let mut counts = ClassificationCounts::new();
        counts.record(Outcome::Unmatched);
        counts.record(Outcome::Matched(&a));
        counts.record(Outcome::Matched(&a));

        let mut out = Vec::new();
        write_counts_to(&mut out, &counts).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "unmatched\t1\na\t2\n");
    }

    #[test]
    fn test_missing_table_file() {
        let result = read_probe_table(Path::new("/nonexistent/probes.tsv"));
        assert!(matches!(result, Err(ParseError::InputNotFound { .. })));
    }

    #[test]
    fn test_unwritable_counts_file() {
        let result = write_counts(Path::new("/nonexistent/dir/counts.tsv"), &ClassificationCounts::new());
        assert!(matches!(result, Err(ParseError::OutputNotWritable { .. })));
    }
}
