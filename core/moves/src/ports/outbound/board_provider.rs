//! ボード提供元 Outbound ポート
//!
//! usecase はこの trait 経由でのみボード・リスト・カード・移動履歴を取得する。
//! 通信・認証の失敗はそのまま Err で返し、呼び出し側は実行全体を中断する。

use common::error::Error;

use crate::domain::{BoardId, BoardList, BoardSummary, Card, Movement};

pub trait BoardProvider: Send + Sync {
    /// 認証情報で参照できるボードの一覧
    fn list_boards(&self) -> Result<Vec<BoardSummary>, Error>;

    /// ID からボードを解決する。存在しなければ `Error::BoardNotFound`
    fn get_board(&self, board_id: &BoardId) -> Result<BoardSummary, Error>;

    /// ボード上のリスト（提供元の並び順のまま）
    fn list_lists(&self, board: &BoardSummary) -> Result<Vec<BoardList>, Error>;

    /// リスト内のカード（提供元の並び順のまま）
    fn list_cards(&self, list: &BoardList) -> Result<Vec<Card>, Error>;

    /// カードの移動履歴（順不同。一度も移動していなければ空）
    fn list_movements(&self, card: &Card) -> Result<Vec<Movement>, Error>;
}
