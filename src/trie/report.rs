//! The three reporting views: node dump, tree visualization, sorted string
//! listing.
//!
//! Each view is a read-only pre-order traversal emitting one record per line
//! to a [`ReportSink`], with an optional second sink receiving an identical
//! copy of every record. Record layout is presentation only; the contractual
//! guarantees are pre-order emission for the dump and tree views and strict
//! lexicographic byte order for the string listing.

use crate::error::Result;
use crate::io::ReportSink;
use crate::trie::tree::RadixTree;

/// Render arbitrary label bytes as a one-line-safe string. Printable ASCII
/// passes through; everything else becomes a `\xNN` escape.
fn render(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &b in bytes {
        if (0x20..0x7f).contains(&b) && b != b'\\' {
            out.push(b as char);
        } else {
            out.push_str(&format!("\\x{:02x}", b));
        }
    }
    out
}

fn emit(
    sink: &mut dyn ReportSink,
    echo: &mut Option<&mut dyn ReportSink>,
    record: &str,
) -> Result<()> {
    sink.write_record(record)?;
    if let Some(echo) = echo.as_deref_mut() {
        echo.write_record(record)?;
    }
    Ok(())
}

fn finish(sink: &mut dyn ReportSink, echo: &mut Option<&mut dyn ReportSink>) -> Result<()> {
    sink.flush()?;
    if let Some(echo) = echo.as_deref_mut() {
        echo.flush()?;
    }
    Ok(())
}

impl RadixTree {
    /// Emit one record per edge in pre-order: the accumulated ancestor
    /// prefix, the edge's own label, and a `*` marker on terminal edges.
    pub fn report_nodes<S: ReportSink>(
        &self,
        sink: &mut S,
        mut echo: Option<&mut dyn ReportSink>,
    ) -> Result<()> {
        let mut result = Ok(());
        self.walk_preorder(|prefix, node| {
            if result.is_err() {
                return;
            }
            let marker = if node.terminal { " *" } else { "" };
            let record = format!(
                "\"{}\" -> \"{}\"{}",
                render(prefix),
                render(&node.label),
                marker
            );
            result = emit(sink, &mut echo, &record);
        });
        result?;
        finish(sink, &mut echo)
    }

    /// Emit the tree visually, one edge per record in pre-order, indented so
    /// each label starts in the column where its parent's label ended.
    pub fn report_tree<S: ReportSink>(
        &self,
        sink: &mut S,
        mut echo: Option<&mut dyn ReportSink>,
    ) -> Result<()> {
        let mut result = Ok(());
        self.walk_preorder(|prefix, node| {
            if result.is_err() {
                return;
            }
            let marker = if node.terminal { " *" } else { "" };
            let record = format!(
                "{:indent$}{}{}",
                "",
                render(&node.label),
                marker,
                indent = render(prefix).len()
            );
            result = emit(sink, &mut echo, &record);
        });
        result?;
        finish(sink, &mut echo)
    }

    /// Emit every stored string, one per record, in lexicographic byte
    /// order. The only view with a guaranteed output order.
    pub fn report_strings<S: ReportSink>(
        &self,
        sink: &mut S,
        mut echo: Option<&mut dyn ReportSink>,
    ) -> Result<()> {
        for key in self.keys() {
            emit(sink, &mut echo, &render(&key))?;
        }
        finish(sink, &mut echo)
    }
}
