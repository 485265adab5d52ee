//! テスト用: メモリ上のボードを返す BoardProvider 実装

use std::collections::HashMap;
use std::sync::Mutex;

use common::error::Error;

use crate::domain::{BoardId, BoardList, BoardSummary, Card, Movement};
use crate::ports::outbound::BoardProvider;

/// 1 枚のボードだけを持つ BoardProvider
///
/// カード・移動履歴の取得要求を記録するので、遅延取得や取得省略を検証できる。
pub struct InMemoryBoardProvider {
    board: BoardSummary,
    lists: Vec<(BoardList, Vec<Card>)>,
    movements: HashMap<String, Vec<Movement>>,
    card_failures: HashMap<String, Error>,
    movement_failures: HashMap<String, Error>,
    card_requests: Mutex<Vec<String>>,
    movement_requests: Mutex<Vec<String>>,
}

impl InMemoryBoardProvider {
    pub fn new(board_id: &str, board_name: &str) -> Self {
        Self {
            board: BoardSummary {
                id: board_id.to_string(),
                name: Some(board_name.to_string()),
            },
            lists: Vec::new(),
            movements: HashMap::new(),
            card_failures: HashMap::new(),
            movement_failures: HashMap::new(),
            card_requests: Mutex::new(Vec::new()),
            movement_requests: Mutex::new(Vec::new()),
        }
    }

    pub fn with_list(mut self, list: BoardList, cards: Vec<Card>) -> Self {
        self.lists.push((list, cards));
        self
    }

    pub fn with_movements(mut self, card_id: &str, movements: Vec<Movement>) -> Self {
        self.movements.insert(card_id.to_string(), movements);
        self
    }

    pub fn failing_cards_for(mut self, list_id: &str, err: Error) -> Self {
        self.card_failures.insert(list_id.to_string(), err);
        self
    }

    pub fn failing_movements_for(mut self, card_id: &str, err: Error) -> Self {
        self.movement_failures.insert(card_id.to_string(), err);
        self
    }

    /// list_cards が呼ばれたリスト ID（呼ばれた順）
    pub fn card_requests(&self) -> Vec<String> {
        self.card_requests.lock().unwrap().clone()
    }

    /// list_movements が呼ばれたカード ID（呼ばれた順）
    pub fn movement_requests(&self) -> Vec<String> {
        self.movement_requests.lock().unwrap().clone()
    }
}

impl BoardProvider for InMemoryBoardProvider {
    fn list_boards(&self) -> Result<Vec<BoardSummary>, Error> {
        Ok(vec![self.board.clone()])
    }

    fn get_board(&self, board_id: &BoardId) -> Result<BoardSummary, Error> {
        if board_id.as_ref() == self.board.id {
            Ok(self.board.clone())
        } else {
            Err(Error::board_not_found(board_id.to_string()))
        }
    }

    fn list_lists(&self, _board: &BoardSummary) -> Result<Vec<BoardList>, Error> {
        Ok(self.lists.iter().map(|(l, _)| l.clone()).collect())
    }

    fn list_cards(&self, list: &BoardList) -> Result<Vec<Card>, Error> {
        self.card_requests.lock().unwrap().push(list.id.clone());
        if let Some(err) = self.card_failures.get(&list.id) {
            return Err(err.clone());
        }
        Ok(self
            .lists
            .iter()
            .find(|(l, _)| l.id == list.id)
            .map(|(_, cards)| cards.clone())
            .unwrap_or_default())
    }

    fn list_movements(&self, card: &Card) -> Result<Vec<Movement>, Error> {
        self.movement_requests.lock().unwrap().push(card.id.clone());
        if let Some(err) = self.movement_failures.get(&card.id) {
            return Err(err.clone());
        }
        Ok(self.movements.get(&card.id).cloned().unwrap_or_default())
    }
}
