//! Outbound ポート: アプリが外界（ボード提供元・レポート出力先）を使うための trait

pub mod board_provider;
pub mod report_writer;

pub use board_provider::BoardProvider;
pub use report_writer::ReportWriter;
