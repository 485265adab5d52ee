//! レポートの 1 行と列定義
//!
//! 列の順番は固定。値の無い列は None のまま持ち、CSV では空欄になる。

use chrono::NaiveDate;

/// レポートの列
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    BoardListName,
    CardShortId,
    CardName,
    CardLabel1Name,
    CardLabel2Name,
    CardDateMovedToThisList,
    CardMovedFromList,
}

/// ヘッダ行の並び
pub const COLUMNS: [Column; 7] = [
    Column::BoardListName,
    Column::CardShortId,
    Column::CardName,
    Column::CardLabel1Name,
    Column::CardLabel2Name,
    Column::CardDateMovedToThisList,
    Column::CardMovedFromList,
];

impl Column {
    /// ヘッダに出す列名
    pub fn name(self) -> &'static str {
        match self {
            Column::BoardListName => "board_list_name",
            Column::CardShortId => "card_short_id",
            Column::CardName => "card_name",
            Column::CardLabel1Name => "card_label1_name",
            Column::CardLabel2Name => "card_label2_name",
            Column::CardDateMovedToThisList => "card_dateMovedToThisList",
            Column::CardMovedFromList => "card_movedFromList",
        }
    }
}

/// カードのある時点での位置を表す 1 行
///
/// 値型。移動ごとの行は基本行のコピーから作るので、兄弟行どうしは値を共有しない。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub board_list_name: Option<String>,
    pub card_short_id: Option<u64>,
    pub card_name: Option<String>,
    pub card_label1_name: Option<String>,
    pub card_label2_name: Option<String>,
    pub date_moved_to_this_list: Option<NaiveDate>,
    pub moved_from_list: Option<String>,
}

impl Row {
    /// 列の値を文字列で返す（値が無ければ None）
    pub fn get(&self, column: Column) -> Option<String> {
        match column {
            Column::BoardListName => self.board_list_name.clone(),
            Column::CardShortId => self.card_short_id.map(|id| id.to_string()),
            Column::CardName => self.card_name.clone(),
            Column::CardLabel1Name => self.card_label1_name.clone(),
            Column::CardLabel2Name => self.card_label2_name.clone(),
            Column::CardDateMovedToThisList => self
                .date_moved_to_this_list
                .map(|d| d.format("%Y-%m-%d").to_string()),
            Column::CardMovedFromList => self.moved_from_list.clone(),
        }
    }
}
