//! Interactive Lyper REPL.
//!
//! Run as:              `cargo run --example repl`.
//! Run a file through:  `cargo run --example repl -- -f path/to/file.lisp`.

use clap::{App, Arg};
use env_logger::{Builder, Env};
use log::LevelFilter;

use lyper::repl::{Repl, ReplConfig};
use lyper::stream::{CliReader, FileReader, LineStream};


fn main() -> Result<(), String> {
    // Setup logging.
    Builder::from_env(Env::default().default_filter_or("warn"))
        .filter_module("rustyline", LevelFilter::Warn)
        .init();

    // Parse args.
    let matches = App::new("Lyper REPL")
        .version(lyper::VERSION)
        .about("Read-eval-print loop for integer arithmetic s-expressions")
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .takes_value(true)
                .help("Evaluate each line of a file instead of reading a terminal"),
        )
        .arg(
            Arg::new("no-color")
                .long("no-color")
                .help("Print parentheses without depth coloring"),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Skip the startup banner"),
        )
        .arg(
            Arg::new("prompt")
                .long("prompt")
                .takes_value(true)
                .help("Interactive prompt"),
        )
        .get_matches();

    let mut config = ReplConfig::default();
    config.color = !matches.is_present("no-color");
    config.banner = !matches.is_present("quiet");
    if let Some(prompt) = matches.value_of("prompt") {
        config.prompt = prompt.to_string();
    }

    let lines = match matches.value_of("file") {
        Some(path) => {
            config.banner = false;
            match FileReader::open(path) {
                Ok(reader) => LineStream::new(reader),
                Err(err) => return Err(format!("{}: {}", path, err)),
            }
        }
        None => LineStream::new(CliReader::new(config.prompt.clone())),
    };

    Repl::new(lines, config)
        .run(&mut std::io::stdout())
        .map_err(|err| err.to_string())
}
