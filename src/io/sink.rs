//! Report sink abstractions and implementations.
//!
//! The reporting views hand their output to a [`ReportSink`] one record at a
//! time, which keeps the trie core free of any console-versus-file knowledge.
//! Implementations are provided for in-memory collection ([`VecSink`]),
//! arbitrary writers ([`WriterSink`]), and buffered files ([`FileSink`]).

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;

/// Destination for report records, one line at a time.
pub trait ReportSink {
    /// Accept one record. Implementations append their own line separator.
    fn write_record(&mut self, record: &str) -> Result<()>;

    /// Flush any buffered records to the underlying destination.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Sink collecting records in memory, mainly for tests and inspection.
#[derive(Debug, Default)]
pub struct VecSink {
    records: Vec<String>,
}

impl VecSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records received so far, in emission order.
    pub fn records(&self) -> &[String] {
        &self.records
    }

    /// Consume the sink, returning the collected records.
    pub fn into_records(self) -> Vec<String> {
        self.records
    }

    /// Number of records received.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no records have been received.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Discard all collected records.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl ReportSink for VecSink {
    fn write_record(&mut self, record: &str) -> Result<()> {
        self.records.push(record.to_owned());
        Ok(())
    }
}

/// Sink wrapping any [`Write`] implementation, emitting one line per record.
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    /// Wrap `writer` as a sink.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consume the sink, returning the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for WriterSink<W> {
    fn write_record(&mut self, record: &str) -> Result<()> {
        self.writer.write_all(record.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Buffered file-backed sink.
#[derive(Debug)]
pub struct FileSink {
    writer: BufWriter<File>,
}

impl FileSink {
    /// Create (or truncate) the file at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }

    /// Open the file at `path` for appending, creating it if needed.
    pub fn append<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
        })
    }
}

impl ReportSink for FileSink {
    fn write_record(&mut self, record: &str) -> Result<()> {
        self.writer.write_all(record.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Convenience: create an in-memory sink.
pub fn to_vec() -> VecSink {
    VecSink::new()
}

/// Convenience: wrap a writer as a sink.
pub fn to_writer<W: Write>(writer: W) -> WriterSink<W> {
    WriterSink::new(writer)
}

/// Convenience: create (or truncate) a file-backed sink.
pub fn to_file<P: AsRef<Path>>(path: P) -> Result<FileSink> {
    FileSink::create(path)
}

/// Convenience: open a file-backed sink in append mode.
pub fn to_file_append<P: AsRef<Path>>(path: P) -> Result<FileSink> {
    FileSink::append(path)
}
