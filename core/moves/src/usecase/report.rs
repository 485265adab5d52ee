//! レポート作成ユースケース
//!
//! walker の順に projector の結果をつなげるだけ（並べ替え・重複除去・集約はしない）。
//! 書き出しは全行がそろってからなので、途中で失敗した場合は出力ファイルに触れない。

use std::path::Path;
use std::sync::Arc;

use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};

use crate::domain::{ActivityWindow, BoardId, BoardSummary, Row};
use crate::ports::outbound::{BoardProvider, ReportWriter};
use crate::usecase::board_walker::BoardWalker;
use crate::usecase::row_projector::RowProjector;

pub struct ReportDeps {
    pub provider: Arc<dyn BoardProvider>,
    pub writer: Arc<dyn ReportWriter>,
    pub log: Arc<dyn Log>,
}

/// 集計中に数えた件数（ログ・表示用）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportStats {
    pub lists: usize,
    pub cards_seen: usize,
    pub cards_in_window: usize,
}

/// 書き出し前のレポート
#[derive(Debug, Clone)]
pub struct Report {
    pub board: BoardSummary,
    pub window: ActivityWindow,
    pub rows: Vec<Row>,
    pub stats: ReportStats,
}

/// moves のユースケース（アダプター経由で I/O を行う）
pub struct ReportUseCase {
    deps: ReportDeps,
}

impl ReportUseCase {
    pub fn new(deps: ReportDeps) -> Self {
        Self { deps }
    }

    /// 認証情報で参照できるボード一覧。表示は CLI の責務。
    pub fn list_boards(&self) -> Result<Vec<BoardSummary>, Error> {
        self.deps.provider.list_boards()
    }

    /// ボードを走査して全行を集める。提供元の失敗は途中でも Err で返す。
    pub fn collect(&self, board_id: &BoardId, window: ActivityWindow) -> Result<Report, Error> {
        let provider = self.deps.provider.as_ref();
        let walker = BoardWalker::new(provider, Arc::clone(&self.deps.log));
        let mut pairs = walker.walk(board_id)?;
        let board = pairs.board().clone();
        let projector = RowProjector::new(window);

        let mut rows = Vec::new();
        let mut stats = ReportStats::default();
        for pair in pairs.by_ref() {
            let (list, card) = pair?;
            stats.cards_seen += 1;
            let projected = projector.project(&list, &card, |c| provider.list_movements(c))?;
            if !projected.is_empty() {
                stats.cards_in_window += 1;
            }
            rows.extend(projected);
        }
        stats.lists = pairs.lists_visited();

        self.deps.log.emit(
            LogRecord::new(LogLevel::Info, "board scanned")
                .layer("usecase")
                .kind("report")
                .field("board_id", board.id.clone())
                .field("cutoff", projector.window().cutoff().to_rfc3339())
                .field("lists", stats.lists)
                .field("cards_seen", stats.cards_seen)
                .field("cards_in_window", stats.cards_in_window)
                .field("rows", rows.len()),
        );
        Ok(Report {
            board,
            window,
            rows,
            stats,
        })
    }

    /// 集めた行をそのままの順で書き出す
    pub fn write(&self, report: &Report, path: &Path) -> Result<(), Error> {
        self.deps.writer.write(path, &report.rows)?;
        self.deps.log.emit(
            LogRecord::new(LogLevel::Info, "report written")
                .layer("usecase")
                .kind("report")
                .field("path", path.display().to_string())
                .field("rows", report.rows.len()),
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::InMemoryBoardProvider;
    use crate::domain::{BoardList, Card, Label, Movement};
    use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
    use common::adapter::NoopLog;
    use std::path::PathBuf;
    use std::sync::Mutex;

    /// テスト用: 書き出し要求を記録する ReportWriter
    #[derive(Default)]
    struct RecordingWriter {
        written: Mutex<Vec<(PathBuf, Vec<Row>)>>,
    }

    impl ReportWriter for RecordingWriter {
        fn write(&self, path: &Path, rows: &[Row]) -> Result<(), Error> {
            self.written
                .lock()
                .unwrap()
                .push((path.to_path_buf(), rows.to_vec()));
            Ok(())
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 20, 15, 30, 0).unwrap()
    }

    fn days_ago(n: i64) -> DateTime<Utc> {
        now() - Duration::days(n)
    }

    fn date(n: i64) -> Option<NaiveDate> {
        Some(days_ago(n).date_naive())
    }

    fn card(id: &str, short_id: u64, last_activity: DateTime<Utc>, labels: &[&str]) -> Card {
        Card {
            short_id: Some(short_id),
            name: Some(format!("Card name {}", short_id)),
            labels: labels.iter().map(|l| Label::new(*l)).collect(),
            last_activity: Some(last_activity),
            created: Some(days_ago(9)),
            ..Card::new(id)
        }
    }

    /// 2 リスト 4 枚のボード（今日 / 7 日前 / 8 日前 / 9 日前に動いたカード）
    fn sample_provider() -> InMemoryBoardProvider {
        let m1 = Movement::new(days_ago(9), "Movement source name 1", "Movement destination name 2");
        let m2 = Movement::new(days_ago(8), "Movement source name 3", "Movement destination name 4");
        let m3 = Movement::new(days_ago(7), "Movement source name 5", "Movement destination name 6");
        InMemoryBoardProvider::new("board-1", "Board")
            .with_list(
                BoardList::new("l1", "List name 1"),
                vec![
                    card("c1", 1, now(), &[]),
                    card("c2", 2, days_ago(7), &["Card label 1"]),
                ],
            )
            .with_list(
                BoardList::new("l2", "List name 2"),
                vec![
                    card("c3", 3, days_ago(8), &["Card label 1", "Card label 2"]),
                    card(
                        "c4",
                        4,
                        days_ago(9),
                        &["Card label 1", "Card label 2", "Card label 3"],
                    ),
                ],
            )
            .with_movements("c1", vec![m1.clone()])
            .with_movements("c3", vec![m2.clone(), m3.clone()])
            .with_movements("c4", vec![m1, m2, m3])
    }

    fn use_case(provider: Arc<InMemoryBoardProvider>, writer: Arc<RecordingWriter>) -> ReportUseCase {
        ReportUseCase::new(ReportDeps {
            provider,
            writer,
            log: Arc::new(NoopLog),
        })
    }

    fn row(
        list: &str,
        short_id: u64,
        labels: (Option<&str>, Option<&str>),
        moved: Option<NaiveDate>,
        from: Option<&str>,
    ) -> Row {
        Row {
            board_list_name: Some(list.to_string()),
            card_short_id: Some(short_id),
            card_name: Some(format!("Card name {}", short_id)),
            card_label1_name: labels.0.map(str::to_string),
            card_label2_name: labels.1.map(str::to_string),
            date_moved_to_this_list: moved,
            moved_from_list: from.map(str::to_string),
        }
    }

    #[test]
    fn test_collect_sample_board() {
        let provider = Arc::new(sample_provider());
        let uc = use_case(Arc::clone(&provider), Arc::new(RecordingWriter::default()));
        let window = ActivityWindow::trailing_days(now(), 8);
        let report = uc.collect(&BoardId::new("board-1"), window).unwrap();

        assert_eq!(
            report.rows,
            vec![
                row("Movement destination name 2", 1, (None, None), date(9), Some("Movement source name 1")),
                row("List name 1", 2, (Some("Card label 1"), None), date(9), None),
                row(
                    "Movement destination name 6",
                    3,
                    (Some("Card label 1"), Some("Card label 2")),
                    date(7),
                    Some("Movement source name 5"),
                ),
                row(
                    "Movement destination name 4",
                    3,
                    (Some("Card label 1"), Some("Card label 2")),
                    date(8),
                    Some("Movement source name 3"),
                ),
            ]
        );
        assert_eq!(
            report.stats,
            ReportStats {
                lists: 2,
                cards_seen: 4,
                cards_in_window: 3,
            }
        );
        // 期間外のカードは移動履歴を取りに行かない
        assert_eq!(provider.movement_requests(), vec!["c1", "c2", "c3"]);
    }

    #[test]
    fn test_collect_keeps_walk_order_and_row_counts() {
        let provider = Arc::new(sample_provider());
        let uc = use_case(Arc::clone(&provider), Arc::new(RecordingWriter::default()));
        // 期間を広げると全カードが対象になる
        let window = ActivityWindow::trailing_days(now(), 30);
        let report = uc.collect(&BoardId::new("board-1"), window).unwrap();

        let ids: Vec<_> = report.rows.iter().map(|r| r.card_short_id.unwrap()).collect();
        assert_eq!(ids, vec![1, 2, 3, 3, 4, 4, 4]);
        assert_eq!(report.stats.cards_in_window, 4);
    }

    #[test]
    fn test_collect_unknown_board_writes_nothing() {
        let provider = Arc::new(sample_provider());
        let writer = Arc::new(RecordingWriter::default());
        let uc = use_case(provider, Arc::clone(&writer));
        let err = uc
            .collect(&BoardId::new("missing"), ActivityWindow::trailing_days(now(), 8))
            .unwrap_err();
        assert_eq!(err.exit_code(), 66);
        assert!(writer.written.lock().unwrap().is_empty());
    }

    #[test]
    fn test_collect_aborts_on_movement_fault() {
        let provider = Arc::new(
            sample_provider().failing_movements_for("c3", Error::provider("HTTP 429: rate limited")),
        );
        let uc = use_case(Arc::clone(&provider), Arc::new(RecordingWriter::default()));
        let err = uc
            .collect(&BoardId::new("board-1"), ActivityWindow::trailing_days(now(), 8))
            .unwrap_err();
        assert!(err.to_string().contains("rate limited"));
        // 失敗以降のカードは処理しない
        assert_eq!(provider.movement_requests(), vec!["c1", "c2", "c3"]);
    }

    #[test]
    fn test_write_passes_rows_in_order() {
        let provider = Arc::new(sample_provider());
        let writer = Arc::new(RecordingWriter::default());
        let uc = use_case(provider, Arc::clone(&writer));
        let report = uc
            .collect(&BoardId::new("board-1"), ActivityWindow::trailing_days(now(), 8))
            .unwrap();
        uc.write(&report, Path::new("out.csv")).unwrap();

        let written = writer.written.lock().unwrap();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].0, PathBuf::from("out.csv"));
        assert_eq!(written[0].1, report.rows);
    }

    #[test]
    fn test_list_boards() {
        let uc = use_case(Arc::new(sample_provider()), Arc::new(RecordingWriter::default()));
        let boards = uc.list_boards().unwrap();
        assert_eq!(boards.len(), 1);
        assert_eq!(boards[0].id, "board-1");
    }
}
