use crate::domain::{BoardId, Credentials, MovesCommand, DEFAULT_WINDOW_DAYS};
use clap::builder::ArgAction;
use clap::value_parser;
use clap_complete::Shell;
use common::error::Error;
use std::path::PathBuf;

/// 出力ファイルの既定値
pub const DEFAULT_OUTPUT_FILE: &str = "recent_moves.csv";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub help: bool,
    /// -v / --verbose: debug 以上のログを stderr にも出す
    pub verbose: bool,
    pub key: Option<String>,
    pub token: Option<String>,
    /// 未指定ならボード一覧を表示して終了
    pub board_id: Option<BoardId>,
    /// -o / --output-file
    pub output_file: PathBuf,
    /// -d / --days: 集計期間（日数）
    pub days: u32,
    /// --log-file: JSONL ログの出力先（未指定なら MOVES_LOG_FILE）
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            help: false,
            verbose: false,
            key: None,
            token: None,
            board_id: None,
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            days: DEFAULT_WINDOW_DAYS,
            log_file: None,
        }
    }
}

/// 解析結果: 通常の Config / 補完スクリプト生成
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Config(Config),
    GenerateCompletion(Shell),
}

fn build_clap_command() -> clap::Command {
    clap::Command::new("moves")
        .about("Extract recent card moves from a Trello board into a CSV file")
        .disable_help_flag(true)
        .arg(
            clap::Arg::new("help")
                .short('h')
                .long("help")
                .help("Show this help message")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Emit debug logs to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            clap::Arg::new("output-file")
                .short('o')
                .long("output-file")
                .alias("output_file")
                .value_name("path")
                .help("File to receive results (default: recent_moves.csv)")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("days")
                .short('d')
                .long("days")
                .value_name("n")
                .help("Report cards active within the last n days (default: 8)")
                .value_parser(value_parser!(u32).range(1..=36500))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("log-file")
                .long("log-file")
                .value_name("path")
                .help("Append JSONL logs to this file")
                .value_parser(value_parser!(PathBuf))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("generate")
                .long("generate")
                .value_name("shell")
                .help("Generate shell completion script")
                .value_parser(value_parser!(Shell))
                .num_args(1),
        )
        .arg(
            clap::Arg::new("key")
                .index(1)
                .value_name("key")
                .help("Your Trello API key"),
        )
        .arg(
            clap::Arg::new("token")
                .index(2)
                .value_name("token")
                .help("Your Trello service token"),
        )
        .arg(
            clap::Arg::new("board_id")
                .index(3)
                .value_name("board_id")
                .help("ID of board to query (if omitted, lists available boards and exits)"),
        )
}

fn matches_to_config(matches: &clap::ArgMatches) -> Config {
    let defaults = Config::default();
    Config {
        help: matches.get_flag("help"),
        verbose: matches.get_flag("verbose"),
        key: matches.get_one::<String>("key").cloned(),
        token: matches.get_one::<String>("token").cloned(),
        board_id: matches
            .get_one::<String>("board_id")
            .map(|s| BoardId::new(s.clone())),
        output_file: matches
            .get_one::<PathBuf>("output-file")
            .cloned()
            .unwrap_or(defaults.output_file),
        days: matches.get_one::<u32>("days").copied().unwrap_or(defaults.days),
        log_file: matches.get_one::<PathBuf>("log-file").cloned(),
    }
}

/// コマンドラインを解析する。補完生成が要求された場合は ParseOutcome::GenerateCompletion を返す。
pub fn parse_args() -> Result<ParseOutcome, Error> {
    let matches = build_clap_command()
        .try_get_matches()
        .map_err(|e| Error::invalid_argument(e.to_string()))?;

    if let Some(&shell) = matches.get_one::<Shell>("generate") {
        return Ok(ParseOutcome::GenerateCompletion(shell));
    }

    Ok(ParseOutcome::Config(matches_to_config(&matches)))
}

/// テスト用: 引数スライスから解析する
#[allow(dead_code)]
pub fn parse_args_from(args: &[String]) -> Result<Config, Error> {
    let matches = build_clap_command()
        .try_get_matches_from(args)
        .map_err(|e| Error::invalid_argument(e.to_string()))?;
    Ok(matches_to_config(&matches))
}

/// 補完スクリプトを標準出力に出力する。
pub fn print_completion(shell: Shell) {
    let mut cmd = build_clap_command();
    clap_complete::generate(shell, &mut cmd, "moves", &mut std::io::stdout());
}

/// Config を MovesCommand に変換する。key / token が無ければ引数エラー。
pub fn config_to_command(config: Config) -> Result<MovesCommand, Error> {
    if config.help {
        return Ok(MovesCommand::Help);
    }

    let credentials = match (config.key, config.token) {
        (Some(key), Some(token)) if !key.is_empty() && !token.is_empty() => {
            Credentials::new(key, token)
        }
        _ => {
            return Err(Error::invalid_argument(
                "Trello API key and token are required.",
            ))
        }
    };

    match config.board_id {
        None => Ok(MovesCommand::ListBoards { credentials }),
        Some(board_id) => Ok(MovesCommand::Report {
            credentials,
            board_id,
            output_file: config.output_file,
            days: config.days,
        }),
    }
}
