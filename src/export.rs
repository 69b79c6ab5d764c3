//! Tabular export of allocation results.
//!
//! The allocator hands its finished records to a [`PackSink`]; the storage
//! format behind the sink is the sink's business. The shipped [`CsvSink`]
//! renders the schema the downstream spreadsheet expects: one row per pack
//! with columns `pack`, `tipo`, `id1..id5`.

use crate::error::Result;
use crate::models::PackRecord;
use std::io::Write;

/// Receives finished pack records, one at a time, in allocation order.
pub trait PackSink {
    fn write_pack(&mut self, record: &PackRecord) -> Result<()>;

    /// Called once after the last record; flush buffers here.
    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// CSV sink writing `pack,tipo,id1,id2,id3,id4,id5` rows.
///
/// The header row is emitted lazily before the first record. Pack labels
/// are `pack#<n>` with the record's 1-based number; `tipo` is the pack
/// type's export label; token ids appear in draw order.
pub struct CsvSink<W: Write> {
    out: W,
    header_written: bool,
}

impl<W: Write> CsvSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            header_written: false,
        }
    }

    /// Consume the sink and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PackSink for CsvSink<W> {
    fn write_pack(&mut self, record: &PackRecord) -> Result<()> {
        if !self.header_written {
            writeln!(self.out, "pack,tipo,id1,id2,id3,id4,id5")?;
            self.header_written = true;
        }
        let ids: Vec<String> = record.tokens.iter().map(|id| id.to_string()).collect();
        writeln!(
            self.out,
            "pack#{},{},{}",
            record.number,
            record.pack_type.label(),
            ids.join(",")
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}

/// Write every record to the sink and finish it.
pub fn export_all<S: PackSink>(sink: &mut S, records: &[PackRecord]) -> Result<()> {
    for record in records {
        sink.write_pack(record)?;
    }
    sink.finish()
}
