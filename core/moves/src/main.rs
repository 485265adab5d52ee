mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;


use std::process;

use cli::{config_to_command, parse_args, print_completion, Config, ParseOutcome};
use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};
use domain::{ActivityWindow, MovesCommand};
use ports::inbound::UseCaseRunner;
use wiring::{wire_moves, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let started_at = self.app.clock.now();
        let cmd = config_to_command(config)?;
        let command_name = cmd_name_for_log(&cmd);
        self.app.logger.emit(
            LogRecord::new(LogLevel::Info, "command started")
                .layer("cli")
                .kind("lifecycle")
                .field("command", command_name),
        );

        let result = match cmd {
            MovesCommand::Help => {
                print_help();
                Ok(0)
            }
            MovesCommand::ListBoards { credentials } => {
                let use_case = self.app.report_use_case(&credentials)?;
                for board in use_case.list_boards()? {
                    println!("{} {}", board.id, board.name.unwrap_or_default());
                }
                Ok(0)
            }
            MovesCommand::Report {
                credentials,
                board_id,
                output_file,
                days,
            } => {
                // 期間は実行開始時刻から一度だけ決める
                let window = ActivityWindow::trailing_days(started_at, days);
                let use_case = self.app.report_use_case(&credentials)?;
                println!("Reading cards from board...");
                use_case.collect(&board_id, window).and_then(|report| {
                    println!(
                        "Collected {} rows from {} of {} cards in {} lists of {} (active since {}).",
                        report.rows.len(),
                        report.stats.cards_in_window,
                        report.stats.cards_seen,
                        report.stats.lists,
                        report.board.name.as_deref().unwrap_or(&report.board.id),
                        report.window.cutoff().date_naive(),
                    );
                    println!("Writing CSV output to {}...", output_file.display());
                    use_case.write(&report, &output_file)?;
                    println!("Done!");
                    Ok(0)
                })
            }
        };

        let code = match &result {
            Ok(code) => *code,
            Err(e) => e.exit_code(),
        };
        self.app.logger.emit(
            LogRecord::new(LogLevel::Info, "command finished")
                .layer("cli")
                .kind("lifecycle")
                .field("command", command_name)
                .field("exit_code", code),
        );
        if let Err(ref e) = result {
            self.app.logger.emit(
                LogRecord::new(LogLevel::Error, e.to_string())
                    .layer("cli")
                    .kind("error"),
            );
        }
        result
    }
}

fn cmd_name_for_log(cmd: &MovesCommand) -> &'static str {
    match cmd {
        MovesCommand::Help => "help",
        MovesCommand::ListBoards { .. } => "list-boards",
        MovesCommand::Report { .. } => "report",
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("moves: {}", e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let app = wire_moves(config.verbose, config.log_file.clone());
    let runner = Runner { app };
    runner.run(config)
}

fn print_usage() {
    eprintln!("Usage: moves [options] <key> <token> [board_id]");
}

fn print_help() {
    println!("Usage: moves [options] <key> <token> [board_id]");
    println!("Options:");
    println!("  -h, --help                Show this help message");
    println!("  -o, --output-file <path>  File to receive results (default: recent_moves.csv)");
    println!("  -d, --days <n>            Report cards active within the last n days (default: 8)");
    println!("  -v, --verbose             Emit debug logs to stderr");
    println!("  --log-file <path>         Append JSONL logs to this file");
    println!("  --generate <shell>        Generate shell completion script (bash, zsh, fish)");
    println!();
    println!("Arguments:");
    println!("  key                       Your Trello API key");
    println!("  token                     Your Trello service token");
    println!("  board_id                  ID of board to query. If omitted, available boards are listed.");
    println!();
    println!("Environment:");
    println!("  TRELLO_API_BASE  Base URL of the Trello REST API (default: https://api.trello.com/1)");
    println!("  MOVES_LOG_FILE   JSONL log file used when --log-file is not given");
    println!();
    println!("Description:");
    println!("  Write one CSV row per card move for every card active within the window.");
    println!("  Cards that never moved get a single row dated with their creation date.");
    println!();
    println!("Examples:");
    println!("  moves KEY TOKEN");
    println!("  moves KEY TOKEN 5f5e1000aabbccddeeff0011");
    println!("  moves -d 7 -o last_week.csv KEY TOKEN 5f5e1000aabbccddeeff0011");
}
