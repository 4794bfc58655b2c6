use std::env;
use std::process::ExitCode;
use std::time::Instant;

use simplelog::{Config, LevelFilter, WriteLogger};

use chess_core::Game;

const USAGE: &str =
    "usage: chess_core [--fen <FEN>] [--perft <DEPTH>] [--log-level <LEVEL>] [MOVES...]";

struct Options {
    fen: Option<String>,
    perft: Option<u32>,
    log_level: LevelFilter,
    moves: Vec<String>,
}

fn parse_level(text: &str) -> Result<LevelFilter, String> {
    match text {
        "off" => Ok(LevelFilter::Off),
        "error" => Ok(LevelFilter::Error),
        "warn" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        level => Err(format!("{level}: invalid log level")),
    }
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        fen: None,
        perft: None,
        log_level: LevelFilter::Warn,
        moves: Vec::new(),
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .cloned()
                .ok_or_else(|| format!("{flag} needs a value"))
        };
        match arg.as_str() {
            "--fen" => options.fen = Some(value("--fen")?),
            "--perft" => {
                let depth = value("--perft")?;
                options.perft = Some(
                    depth
                        .parse()
                        .map_err(|_| format!("{depth}: depth must be numeric"))?,
                );
            }
            "--log-level" => options.log_level = parse_level(&value("--log-level")?)?,
            "-h" | "--help" => return Err(String::new()),
            flag if flag.starts_with("--") => return Err(format!("{flag}: unknown option")),
            mv => options.moves.push(mv.to_string()),
        }
    }
    Ok(options)
}

fn run(options: Options) -> Result<(), String> {
    let mut game = match &options.fen {
        Some(fen) => Game::from_fen(fen).map_err(|err| format!("{fen}: {err}"))?,
        None => Game::new(),
    };
    log::info!("starting from {}", game.fen());

    for text in &options.moves {
        game.play_uci(text).map_err(|err| format!("{text}: {err}"))?;
    }

    println!("{}", game.board());
    println!("side_to_move: {}", game.side_to_move());
    println!("status: {}", game.status());
    println!("in_check: {}", game.in_check());

    let legal_moves = game.legal_moves();
    println!("legal_moves: {}", legal_moves.len());
    let listed: Vec<String> = legal_moves.iter().map(ToString::to_string).collect();
    println!("{}", listed.join(" "));

    if let Some(depth) = options.perft {
        let start = Instant::now();
        let mut total = 0;
        for (mv, nodes) in game.board().perft_divide(depth) {
            println!("{mv}: {nodes}");
            total += nodes;
        }
        if depth == 0 {
            total = 1;
        }
        println!("Depth {depth} total:\t{total:12} ({:?})", start.elapsed());
    }
    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            if !message.is_empty() {
                eprintln!("{message}");
            }
            eprintln!("{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    // Only fails if a logger is already installed.
    let _ = WriteLogger::init(options.log_level, Config::default(), std::io::stderr());

    match run(options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}
