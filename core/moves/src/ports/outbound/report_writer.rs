//! レポート出力 Outbound ポート

use common::error::Error;
use std::path::Path;

use crate::domain::Row;

/// ヘッダ行と行の並びを 1 つの成果物として書き出す
pub trait ReportWriter: Send + Sync {
    /// `rows` を受け取った順のまま書く（並べ替えない）
    fn write(&self, path: &Path, rows: &[Row]) -> Result<(), Error>;
}
