//! Report sinks: where the trie's reporting views send their records.

mod sink;

pub use sink::{
    to_file, to_file_append, to_vec, to_writer, FileSink, ReportSink, VecSink, WriterSink,
};
