//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use autosemi_core::{Output, ProcessingMetadata, TransformStats};
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs one report per document as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    documents: Vec<DocumentReport>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct DocumentReport {
    /// Input file name, or `<stdin>`
    pub source: String,
    /// Transformed text
    pub text: String,
    /// Line and rule counts
    pub stats: TransformStats,
    /// Execution details
    pub metadata: ProcessingMetadata,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            documents: Vec::new(),
        }
    }

    /// Consume the formatter and return the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, source: &str, output: Output) -> Result<()> {
        self.documents.push(DocumentReport {
            source: source.to_string(),
            text: output.text,
            stats: output.stats,
            metadata: output.metadata,
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.documents)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autosemi_core::Transformer;

    fn render(pretty: bool) -> serde_json::Value {
        let transformer = Transformer::new();
        let mut formatter = JsonFormatter::new(Vec::new(), pretty);
        formatter
            .format_document("main.go", transformer.process_text("x := 1\n{\n").unwrap())
            .unwrap();
        formatter.finish().unwrap();
        serde_json::from_slice(&formatter.into_inner()).unwrap()
    }

    #[test]
    fn test_json_report_fields() {
        let value = render(true);
        let doc = &value[0];
        assert_eq!(doc["source"], "main.go");
        assert_eq!(doc["text"], "x := 1;\n{\n");
        assert_eq!(doc["stats"]["lines"], 2);
        assert_eq!(doc["stats"]["terminated"], 1);
        assert_eq!(doc["stats"]["by_rule"]["integer"], 1);
        assert_eq!(doc["metadata"]["execution_mode"], "sequential");
        assert_eq!(doc["metadata"]["bytes_processed"], 9);
    }

    #[test]
    fn test_compact_and_pretty_agree() {
        let mut pretty = render(true);
        let mut compact = render(false);
        // Timings differ between runs
        pretty[0]["metadata"]["processing_time_ms"] = serde_json::Value::Null;
        compact[0]["metadata"]["processing_time_ms"] = serde_json::Value::Null;
        assert_eq!(pretty, compact);
    }

    #[test]
    fn test_empty_report() {
        let mut formatter = JsonFormatter::new(Vec::new(), false);
        formatter.finish().unwrap();
        assert_eq!(formatter.into_inner(), b"[]\n");
    }
}
