//! ユースケース層（ports の trait 経由でのみ外界に触れる）

pub mod board_walker;
pub mod report;
pub mod row_projector;

pub use report::{Report, ReportDeps, ReportStats, ReportUseCase};
