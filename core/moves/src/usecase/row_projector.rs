//! カード 1 枚をレポート行に展開する
//!
//! 1. 最終アクティビティが期間外なら 0 行（移動履歴も取りに行かない）
//! 2. リスト名・カード属性・ラベル 2 枠から基本行を作る
//! 3. 移動履歴があれば新しい順に 1 移動 1 行、無ければ作成日の 1 行

use common::error::Error;

use crate::domain::movement::sort_most_recent_first;
use crate::domain::{ActivityWindow, BoardList, Card, Movement, Row};

/// 期間判定に使うカードの時刻（最終アクティビティ。無ければ作成時刻）
fn activity_instant(card: &Card) -> Option<chrono::DateTime<chrono::Utc>> {
    card.last_activity.or(card.created)
}

/// 期間内のカードか
pub fn is_within(window: &ActivityWindow, card: &Card) -> bool {
    activity_instant(card).is_some_and(|at| window.contains(at))
}

/// 移動に依存しない列だけを埋めた基本行
pub fn base_row(list: &BoardList, card: &Card) -> Row {
    let (label1, label2) = card.label_slots();
    Row {
        board_list_name: list.name.clone(),
        card_short_id: card.short_id,
        card_name: card.name.clone(),
        card_label1_name: label1.map(str::to_string),
        card_label2_name: label2.map(str::to_string),
        date_moved_to_this_list: None,
        moved_from_list: None,
    }
}

/// 基本行を移動履歴で展開する
///
/// 移動ごとの行は基本行のコピーに日付・移動元・移動先リストを上書きしたもの。
/// 移動が無ければ作成日の 1 行（移動元は空）。
pub fn expand(base: &Row, card: &Card, mut movements: Vec<Movement>) -> Vec<Row> {
    if movements.is_empty() {
        return vec![Row {
            date_moved_to_this_list: card.created.map(|c| c.date_naive()),
            moved_from_list: None,
            ..base.clone()
        }];
    }

    sort_most_recent_first(&mut movements);
    movements
        .into_iter()
        .map(|m| Row {
            board_list_name: m.destination_list_name,
            date_moved_to_this_list: m.instant.map(|at| at.date_naive()),
            moved_from_list: m.source_list_name,
            ..base.clone()
        })
        .collect()
}

/// 期間を固定した行プロジェクタ
#[derive(Debug, Clone, Copy)]
pub struct RowProjector {
    window: ActivityWindow,
}

impl RowProjector {
    pub fn new(window: ActivityWindow) -> Self {
        Self { window }
    }

    pub fn window(&self) -> &ActivityWindow {
        &self.window
    }

    /// `(list, card)` を 0 行以上に展開する
    ///
    /// `load_movements` は期間内のカードに対してだけ呼ぶ。その Err はそのまま返す。
    pub fn project<F>(&self, list: &BoardList, card: &Card, load_movements: F) -> Result<Vec<Row>, Error>
    where
        F: FnOnce(&Card) -> Result<Vec<Movement>, Error>,
    {
        if !is_within(&self.window, card) {
            return Ok(Vec::new());
        }
        let base = base_row(list, card);
        let movements = load_movements(card)?;
        Ok(expand(&base, card, movements))
    }
}
