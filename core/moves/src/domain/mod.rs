//! moves 固有のドメイン型（型と不変条件）

pub mod board;
pub mod card;
pub mod command;
pub mod movement;
pub mod row;
pub mod window;

pub use board::{BoardId, BoardList, BoardSummary};
pub use card::{Card, Label};
pub use command::{Credentials, MovesCommand};
pub use movement::Movement;
pub use row::{Column, Row, COLUMNS};
pub use window::{ActivityWindow, DEFAULT_WINDOW_DAYS};
