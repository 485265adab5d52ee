//! Outbound ポートの実装（Trello API・CSV 出力）

pub mod csv_report_writer;
pub mod trello_client;

#[cfg(test)]
pub mod in_memory_board_provider;

pub use csv_report_writer::CsvReportWriter;
pub use trello_client::TrelloClient;

#[cfg(test)]
pub use in_memory_board_provider::InMemoryBoardProvider;
