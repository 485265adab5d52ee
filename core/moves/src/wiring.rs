//! 配線: 標準アダプタで App とユースケースを組み立てる

use std::path::PathBuf;
use std::sync::Arc;

use common::adapter::{FanoutLog, FileJsonLog, StdClock, StdEnvResolver, StdFileSystem, StderrLog};
use common::error::Error;
use common::ports::outbound::{Clock, EnvResolver, FileSystem, Log, LogLevel};

use crate::adapter::{CsvReportWriter, TrelloClient};
use crate::domain::Credentials;
use crate::usecase::{ReportDeps, ReportUseCase};

/// 配線済みの依存（認証情報に依存しない部分）
pub struct App {
    pub fs: Arc<dyn FileSystem>,
    pub clock: Arc<dyn Clock>,
    pub logger: Arc<dyn Log>,
    pub api_base: String,
}

impl App {
    /// 認証情報で Trello クライアントを作り、ユースケースを組み立てる
    pub fn report_use_case(&self, credentials: &Credentials) -> Result<ReportUseCase, Error> {
        let provider = Arc::new(TrelloClient::new(&self.api_base, credentials.clone())?);
        let writer = Arc::new(CsvReportWriter::new(Arc::clone(&self.fs)));
        Ok(ReportUseCase::new(ReportDeps {
            provider,
            writer,
            log: Arc::clone(&self.logger),
        }))
    }
}

/// 配線: 標準アダプタで App を組み立てる
pub fn wire_moves(verbose: bool, log_file: Option<PathBuf>) -> App {
    wire_moves_with(Arc::new(StdEnvResolver), Arc::new(StdClock), verbose, log_file)
}

/// 環境変数解決と時刻を差し替えて組み立てる（テスト用の入口も兼ねる）
///
/// ログ: `log_file`（無ければ MOVES_LOG_FILE）へ JSONL、verbose なら stderr にも出す。
pub fn wire_moves_with(
    env_resolver: Arc<dyn EnvResolver>,
    clock: Arc<dyn Clock>,
    verbose: bool,
    log_file: Option<PathBuf>,
) -> App {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let mut targets: Vec<Arc<dyn Log>> = Vec::new();
    if let Some(path) = log_file.or_else(|| env_resolver.log_file()) {
        targets.push(Arc::new(FileJsonLog::new(Arc::clone(&fs), path)));
    }
    if verbose {
        targets.push(Arc::new(StderrLog::new(LogLevel::Debug)));
    }
    App {
        fs,
        clock,
        logger: Arc::new(FanoutLog::new(targets)),
        api_base: env_resolver.api_base(),
    }
}
