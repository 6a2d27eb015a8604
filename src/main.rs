use std::io::Write;
use std::path::Path;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use wordplay::cli::{self, Command};
use wordplay::config::Config;
use wordplay::lexicon::{Dictionary, SortOptions};

#[macro_use]
extern crate text_io;

const DEFAULT_CONFIG: &str = "wordplay.json";

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config() -> Config {
    let path = std::env::args().nth(1);
    let explicit = path.is_some();
    let path = path.unwrap_or_else(|| DEFAULT_CONFIG.to_string());

    if !explicit && !Path::new(&path).exists() {
        info!("no {} found, using defaults", DEFAULT_CONFIG);
        return Config::default();
    }
    match Config::load(&path) {
        Ok(config) => config,
        Err(e) => {
            warn!(%path, "could not load config ({}), using defaults", e);
            Config::default()
        }
    }
}

fn repl(dict: &Dictionary, mut sort: SortOptions) {
    println!("{}", cli::HELP);
    loop {
        print!("> ");
        let _ = std::io::stdout().flush();
        // A blank line (or end of input) ends the session
        let line: String = match try_read!("{}\n") {
            Ok(line) => line,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            break;
        }

        let cmd = match Command::parse(&line) {
            Ok(cmd) => cmd,
            Err(msg) => {
                println!("{}", msg);
                continue;
            }
        };

        match cmd {
            Command::Quit => break,
            Command::Help => println!("{}", cli::HELP),
            Command::Sort(options) => {
                sort = options;
                println!("Sorting: {:?}", sort);
            }
            cmd => match cli::run_query(dict, &cmd, sort) {
                Ok(words) => {
                    if matches!(cmd, Command::Disallow(_) | Command::Allow(_)) {
                        println!("Disallowed: {:?}", dict.alphabet().disallowed());
                    } else {
                        println!("{} word(s)", words.len());
                        println!("{}", words.join(" "));
                    }
                }
                Err(e) => println!("{}", e),
            },
        }
    }
}

fn main() {
    init_logging();
    let config = load_config();

    let dict = match config.load_dictionary() {
        Ok(dict) => dict,
        Err(e) => {
            error!("could not load word list: {}", e);
            std::process::exit(1);
        }
    };
    println!("Number of Words: {}", dict.len());

    repl(&dict, config.sort);
}
