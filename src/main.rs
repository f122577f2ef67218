use std::{
    fs::File,
    io::{self, BufReader},
    process,
};

use borg::{
    Interpreter,
    config::{Config, DEFAULT_BUCKETS, DEFAULT_MAX_DEPTH},
};
use clap::Parser;

/// borg runs programs written in BORG, a tiny line-oriented language of
/// scoped integer variables.
///
/// Without CONTENTS, commands are read from standard input one line at a time
/// until EXIT or end of input.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells borg to treat CONTENTS as a path to a program file.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Number of hash buckets in the symbol table.
    #[arg(long, default_value_t = DEFAULT_BUCKETS)]
    buckets: usize,

    /// Maximum number of scopes nested inside the global scope.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH, conflicts_with = "unbounded")]
    max_depth: usize,

    /// Allow any nesting depth.
    #[arg(long)]
    unbounded: bool,

    /// Report START past the nesting limit as an error instead of ignoring
    /// it.
    #[arg(long)]
    strict_scopes: bool,

    /// An inline BORG program, or a path when --file is given.
    contents: Option<String>,
}

impl Args {
    const fn config(&self) -> Config {
        Config { buckets:       self.buckets,
                 max_depth:     if self.unbounded { None } else { Some(self.max_depth) },
                 strict_scopes: self.strict_scopes, }
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let mut interpreter = Interpreter::new(&args.config());
    let stdout = io::stdout().lock();

    let result = match args.contents {
        None => interpreter.run_reader(io::stdin().lock(), stdout),
        Some(path) if args.file => {
            let file = File::open(&path).unwrap_or_else(|e| {
                eprintln!("Failed to read the input file '{path}': {e}");
                process::exit(1);
            });
            interpreter.run_reader(BufReader::new(file), stdout)
        },
        Some(contents) => interpreter.run_reader(contents.as_bytes(), stdout),
    };

    if let Err(e) = result {
        eprintln!("I/O error: {e}");
        process::exit(1);
    }
}
