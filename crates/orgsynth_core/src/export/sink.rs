//! Result sinks for finished export records.

use crate::export::record::{ExportRecord, EXPORT_COLUMNS};
use crate::export::{ExportError, ExportFormat};
use log::{info, warn};
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

const PARTIAL_SUFFIX: &str = ".partial";

/// Accepts finished records and serializes them somewhere.
pub trait ResultSink {
    fn accept(&mut self, records: &[ExportRecord]) -> Result<(), ExportError>;
}

/// Writes records as CSV: header row, one line per record, no index column.
pub struct CsvSink<W: Write> {
    writer: W,
}

impl<W: Write> CsvSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ResultSink for CsvSink<W> {
    fn accept(&mut self, records: &[ExportRecord]) -> Result<(), ExportError> {
        writeln!(self.writer, "{}", EXPORT_COLUMNS.join(","))?;
        for record in records {
            let cells = record.cells();
            let line: Vec<Cow<'_, str>> = cells.iter().map(|cell| csv_field(cell)).collect();
            writeln!(self.writer, "{}", line.join(","))?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes records as a pretty-printed JSON array.
pub struct JsonSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ResultSink for JsonSink<W> {
    fn accept(&mut self, records: &[ExportRecord]) -> Result<(), ExportError> {
        serde_json::to_writer_pretty(&mut self.writer, records)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes records to `path` in the given format.
///
/// Output goes to a sibling `*.partial` file first and is renamed into place
/// only after a complete write, so a failed export leaves no file at `path`.
pub struct FileSink {
    path: PathBuf,
    format: ExportFormat,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>, format: ExportFormat) -> Self {
        Self {
            path: path.into(),
            format,
        }
    }

    fn partial_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(PARTIAL_SUFFIX);
        self.path.with_file_name(name)
    }
}

impl ResultSink for FileSink {
    fn accept(&mut self, records: &[ExportRecord]) -> Result<(), ExportError> {
        let partial = self.partial_path();
        let written = File::create(&partial)
            .map_err(ExportError::from)
            .and_then(|file| write_records(self.format, BufWriter::new(file), records));
        if let Err(err) = written {
            if let Err(cleanup_err) = std::fs::remove_file(&partial) {
                warn!(
                    "event=export_cleanup module=export status=error path={} error={}",
                    partial.display(),
                    cleanup_err
                );
            }
            return Err(err);
        }

        std::fs::rename(&partial, &self.path)?;
        info!(
            "event=export_written module=export status=ok format={} rows={} path={}",
            self.format,
            records.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// Serializes `records` to `writer` in `format`.
pub fn write_records<W: Write>(
    format: ExportFormat,
    writer: W,
    records: &[ExportRecord],
) -> Result<(), ExportError> {
    match format {
        ExportFormat::Csv => CsvSink::new(writer).accept(records),
        ExportFormat::Json => JsonSink::new(writer).accept(records),
    }
}

/// Renders `records` as one CSV string.
pub fn render_csv(records: &[ExportRecord]) -> Result<String, ExportError> {
    let mut sink = CsvSink::new(Vec::new());
    sink.accept(records)?;
    String::from_utf8(sink.into_inner())
        .map_err(|err| ExportError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, err)))
}

/// Quotes a CSV cell when it contains a separator, quote or line break.
pub fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{csv_field, render_csv, FileSink, ResultSink};
    use crate::export::record::ExportRecord;
    use crate::export::ExportFormat;

    fn sample_record() -> ExportRecord {
        ExportRecord {
            employee_id: 10_000_002,
            full_name: "Grace Hopper".to_string(),
            job_band: 9,
            generic_job_title: "Coordinator, Specialist".to_string(),
            position_id: 20_000_003,
            manager_id: 10_000_001,
            manager_full_name: "Ada Lovelace".to_string(),
            manager_job_band: 0,
            manager_position_id: 20_000_001,
        }
    }

    #[test]
    fn csv_field_quotes_only_when_needed() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn render_csv_writes_header_and_quoted_titles() {
        let csv = render_csv(&[sample_record()]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines[0],
            "employee_id,full_name,job_band,generic_job_title,position_id,manager_id,manager_full_name,manager_job_band,manager_position_id"
        );
        assert_eq!(
            lines[1],
            "10000002,Grace Hopper,9,\"Coordinator, Specialist\",20000003,10000001,Ada Lovelace,0,20000001"
        );
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn file_sink_renames_complete_output_into_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("org_chart.json");
        let mut sink = FileSink::new(&path, ExportFormat::Json);
        sink.accept(&[sample_record()]).unwrap();

        assert!(path.exists());
        assert!(!dir.path().join("org_chart.json.partial").exists());
        let text = std::fs::read_to_string(&path).unwrap();
        let decoded: Vec<ExportRecord> = serde_json::from_str(&text).unwrap();
        assert_eq!(decoded, vec![sample_record()]);
    }

    #[test]
    fn file_sink_reports_unwritable_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("org_chart.csv");
        let mut sink = FileSink::new(&path, ExportFormat::Csv);
        assert!(sink.accept(&[sample_record()]).is_err());
        assert!(!path.exists());
    }
}
