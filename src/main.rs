use std::{fs::read_to_string, path::PathBuf, process, time::Instant};

use clap::Parser;
use log::LevelFilter;

use pyscan::{errors::errors::ErrorTip, lexer::lexer::tokenize, normalize_newlines};

/// Lexical scanner for a restricted Python dialect.
///
/// Prints one token per line. On a lexical error, prints the tokens read so far followed
/// by the error and exits with status 1.
#[derive(Parser)]
#[command(name = "pyscan", version, about)]
struct Cli {
    /// Source file to scan.
    input: PathBuf,

    /// Log scanner activity to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn"),
    );
    if cli.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    let source = match read_to_string(&cli.input) {
        Ok(source) => normalize_newlines(&source),
        Err(e) => {
            eprintln!("error: could not read '{}': {}", cli.input.display(), e);
            process::exit(1);
        }
    };

    let start = Instant::now();
    let (tokens, error) = tokenize(&source);
    log::debug!("Tokenized {} in {:?}", cli.input.display(), start.elapsed());

    for token in tokens.iter().filter(|token| !token.is_eof()) {
        println!("{}", token);
    }

    if let Some(error) = error {
        if let ErrorTip::Suggestion(tip) = error.get_tip() {
            log::debug!("{}: {}", error.get_error_name(), tip);
        } else {
            log::debug!("{}: {}", error.get_error_name(), error.get_impl());
        }

        println!("{}", error);
        process::exit(1);
    }
}
