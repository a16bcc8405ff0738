use std::fs::File;
use std::path::Path;

use anyhow::Result;
use csv::{Writer, WriterBuilder};

use crate::models::Deal;

/// Column order of the output file.
pub const CSV_HEADER: [&str; 9] = [
    "Store",
    "Category",
    "Title",
    "Image",
    "Price",
    "Discount",
    "Special Price",
    "Link",
    "Rating",
];

/// CSV output sink. Creating it truncates any previous output and writes
/// the header row; records are then appended page by page.
pub struct CsvSink {
    writer: Writer<File>,
}

impl CsvSink {
    pub fn create(path: &Path) -> Result<Self> {
        let mut writer = WriterBuilder::new().has_headers(false).from_path(path)?;
        writer.write_record(CSV_HEADER)?;
        writer.flush()?;

        Ok(Self { writer })
    }

    /// Append one page's records and flush, so the file always holds every
    /// row extracted so far.
    pub fn append(&mut self, deals: &[Deal]) -> Result<()> {
        for deal in deals {
            self.writer.serialize(deal)?;
        }
        self.writer.flush()?;

        Ok(())
    }
}
