//! CSV export of the normalized record table

use crate::record::BenchmarkRecord;
use std::path::Path;

const HEADER: &str = "name,category,time_ns,time_us,time_ms,alloc_bytes,alloc_calls,dealloc_bytes,dealloc_calls,net_bytes";

/// CSV output formatter
#[derive(Debug)]
pub struct CsvOutput<'a> {
    records: &'a [BenchmarkRecord],
}

impl<'a> CsvOutput<'a> {
    pub fn new(records: &'a [BenchmarkRecord]) -> Self {
        Self { records }
    }

    /// Escape CSV field (handle commas, quotes, line breaks)
    fn escape_field(field: &str) -> String {
        if field.contains(',')
            || field.contains('"')
            || field.contains('\n')
            || field.contains('\r')
        {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    /// Format a record as CSV row
    fn format_record(record: &BenchmarkRecord) -> String {
        [
            Self::escape_field(&record.name),
            Self::escape_field(record.category().label()),
            record.time_ns.to_string(),
            record.time_us().to_string(),
            record.time_ms().to_string(),
            record.alloc_bytes.to_string(),
            record.alloc_calls.to_string(),
            record.dealloc_bytes.to_string(),
            record.dealloc_calls.to_string(),
            record.net_bytes.to_string(),
        ]
        .join(",")
    }

    /// Generate CSV output as string, one row per record in input order
    pub fn to_csv(&self) -> String {
        let mut output = String::new();

        output.push_str(HEADER);
        output.push('\n');

        for record in self.records {
            output.push_str(&Self::format_record(record));
            output.push('\n');
        }

        output
    }

    pub fn write_to(&self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, self.to_csv())?;
        tracing::info!("Data exported to: {}", path.display());
        Ok(())
    }
}
