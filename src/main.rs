// game-reviews - keeps your short game reviews in a JSON file
//
// Parses CLI args, loads the review file and hands off to the menu loop.

use anyhow::Result;
use game_reviews_lib::{
    config::{AppConfig, Invocation},
    shell::Session,
    ReviewFile, Store,
};
use std::env;
use std::io;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();

    match Invocation::from_env(&args) {
        Ok(Invocation::Run(config)) => run(config),
        Ok(Invocation::Help) => {
            print_usage();
            Ok(())
        }
        Ok(Invocation::Version) => {
            println!("game-reviews v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Ok(Invocation::Unknown(arg)) => {
            eprintln!("Unknown argument: {}", arg);
            print_usage();
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", e.user_message());
            print_usage();
            Ok(())
        }
    }
}

fn run(config: AppConfig) -> Result<()> {
    let file = ReviewFile::new(&config.store_path);
    let outcome = file.load_or_empty();

    // Let the user know before the menu scrolls it away
    if let Some(warning) = &outcome.warning {
        eprintln!("Warning: {}", warning.user_message());
    }

    let store = if config.demo && outcome.store.is_empty() {
        Store::with_samples()
    } else {
        outcome.store
    };

    let stdin = io::stdin();
    let mut session = Session::new(store, file, stdin.lock(), io::stdout());
    session.run()?;

    Ok(())
}

fn print_usage() {
    println!(
        r#"game-reviews v{} - Your game reviews, remembered

USAGE:
    game-reviews [OPTIONS]

OPTIONS:
    -f, --file <path>      Review file to use (default: reviews.json)
    --demo                 Start with sample reviews if the file is empty
    -v, --version          Show version
    -h, --help             Show this help

ENVIRONMENT:
    GAME_REVIEWS_FILE      Review file to use when --file is not given
    RUST_LOG               Log filter for diagnostics on stderr (default: warn)
"#,
        env!("CARGO_PKG_VERSION")
    );
}
