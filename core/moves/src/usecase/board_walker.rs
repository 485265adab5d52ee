//! ボード上の全リスト・全カードを `(list, card)` の組として順に返す
//!
//! ボード解決とリスト取得は walk 時に行い、カードはリストに入ったときに取りに行く。
//! 並び順は提供元のまま（リスト順 → リスト内のカード順）。

use std::sync::Arc;

use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};

use crate::domain::{BoardId, BoardList, BoardSummary, Card};
use crate::ports::outbound::BoardProvider;

pub struct BoardWalker<'a> {
    provider: &'a dyn BoardProvider,
    log: Arc<dyn Log>,
}

impl<'a> BoardWalker<'a> {
    pub fn new(provider: &'a dyn BoardProvider, log: Arc<dyn Log>) -> Self {
        Self { provider, log }
    }

    /// ボードを解決して組の列を返す。ボードが無ければ `Error::BoardNotFound`
    pub fn walk(&self, board_id: &BoardId) -> Result<BoardPairs<'a>, Error> {
        let board = self.provider.get_board(board_id)?;
        let lists = self.provider.list_lists(&board)?;
        self.log.emit(
            LogRecord::new(LogLevel::Info, "board resolved")
                .layer("usecase")
                .kind("provider")
                .field("board_id", board.id.clone())
                .field("lists", lists.len()),
        );
        Ok(BoardPairs {
            provider: self.provider,
            log: Arc::clone(&self.log),
            board,
            lists: lists.into_iter(),
            current: None,
            lists_visited: 0,
            failed: false,
        })
    }
}

/// `(list, card)` の遅延列
///
/// カード取得に失敗したらその Err を 1 度だけ返し、以降は None。
pub struct BoardPairs<'a> {
    provider: &'a dyn BoardProvider,
    log: Arc<dyn Log>,
    board: BoardSummary,
    lists: std::vec::IntoIter<BoardList>,
    current: Option<(BoardList, std::vec::IntoIter<Card>)>,
    lists_visited: usize,
    failed: bool,
}

impl BoardPairs<'_> {
    pub fn board(&self) -> &BoardSummary {
        &self.board
    }

    /// カードを取得し終えたリストの数
    pub fn lists_visited(&self) -> usize {
        self.lists_visited
    }
}

impl Iterator for BoardPairs<'_> {
    type Item = Result<(BoardList, Card), Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            if let Some((list, cards)) = self.current.as_mut() {
                if let Some(card) = cards.next() {
                    return Some(Ok((list.clone(), card)));
                }
            }
            let list = self.lists.next()?;
            match self.provider.list_cards(&list) {
                Ok(cards) => {
                    self.lists_visited += 1;
                    self.log.emit(
                        LogRecord::new(LogLevel::Debug, "reading list")
                            .layer("usecase")
                            .kind("provider")
                            .field("list", list.name.clone().unwrap_or_default())
                            .field("cards", cards.len()),
                    );
                    self.current = Some((list, cards.into_iter()));
                }
                Err(e) => {
                    self.failed = true;
                    self.current = None;
                    return Some(Err(e));
                }
            }
        }
    }
}
