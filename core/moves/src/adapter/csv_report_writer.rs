//! CSV でレポートを書き出す ReportWriter 実装
//!
//! ヘッダは行が 0 件でも書く。レコード区切りは CRLF、値の無い列は空欄。

use std::path::Path;
use std::sync::Arc;

use common::error::Error;
use common::ports::outbound::FileSystem;

use crate::domain::{Row, COLUMNS};
use crate::ports::outbound::ReportWriter;

pub struct CsvReportWriter {
    fs: Arc<dyn FileSystem>,
}

impl CsvReportWriter {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }
}

fn csv_error(path: &Path, e: csv::Error) -> Error {
    Error::io_msg(format!("Failed to write CSV '{}': {}", path.display(), e))
}

/// 任意の Writer へヘッダと行を書く
pub fn write_rows<W: std::io::Write>(out: W, rows: &[Row]) -> Result<(), csv::Error> {
    let mut w = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(out);
    w.write_record(COLUMNS.iter().map(|c| c.name()))?;
    for row in rows {
        w.write_record(COLUMNS.iter().map(|&c| row.get(c).unwrap_or_default()))?;
    }
    w.flush()?;
    Ok(())
}

impl ReportWriter for CsvReportWriter {
    fn write(&self, path: &Path, rows: &[Row]) -> Result<(), Error> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !self.fs.exists(parent) {
                self.fs.create_dir_all(parent)?;
            }
        }
        let out = self.fs.create(path)?;
        write_rows(out, rows).map_err(|e| csv_error(path, e))
    }
}
