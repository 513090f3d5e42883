//! Record sinks: where the final sorted collection goes.

use anyhow::{Context, Result};
use std::io::Write;

use crate::config::OutputFormat;
use crate::model::Record;

/// Formats and writes the finished collection.
pub trait RecordSink {
    fn emit(&mut self, records: &[Record]) -> Result<()>;
}

/// Pretty-printed JSON array using the API's field names.
#[derive(Debug)]
pub struct JsonSink<W: Write> {
    out: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RecordSink for JsonSink<W> {
    fn emit(&mut self, records: &[Record]) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.out, records).context("serialize records")?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}

/// One tab-separated line per record: name, age, phone number.
#[derive(Debug)]
pub struct TextSink<W: Write> {
    out: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RecordSink for TextSink<W> {
    fn emit(&mut self, records: &[Record]) -> Result<()> {
        for r in records {
            writeln!(self.out, "{}\t{}\t{}", r.name, r.age, r.phone_number)?;
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Sink for the configured output format.
pub fn for_format<'w, W: Write + 'w>(format: OutputFormat, out: W) -> Box<dyn RecordSink + 'w> {
    match format {
        OutputFormat::Json => Box::new(JsonSink::new(out)),
        OutputFormat::Text => Box::new(TextSink::new(out)),
    }
}
