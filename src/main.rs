use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use structopt::StructOpt;

use spell_checker::{FileFormat, Wordlist};


/// Check words against a dictionary word list.
#[derive(StructOpt)]
struct Cli {
    /// The word list to load, one word per line
    #[structopt(short, long, parse(from_os_str), default_value = "dictionary.txt")]
    dictionary: std::path::PathBuf,
    /// Column separator for delimited word lists
    #[structopt(long)]
    delimiter: Option<char>,
    /// Zero-based column holding the word (requires --delimiter)
    #[structopt(long)]
    word_column: Option<usize>,
    /// Words to check. Reads one query per line from stdin when empty
    words: Vec<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .init();

    let args = Cli::from_args();
    let format = FileFormat::builder()
        .delimiter(args.delimiter)
        .word_column(args.word_column)
        .build();

    let wl = Wordlist::from_file(&args.dictionary, &format)
        .with_context(|| format!("error loading dictionary {}", args.dictionary.display()))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.words.is_empty() {
        for line in io::stdin().lock().lines() {
            writeln!(out, "{}", wl.check(&line?))?;
            out.flush()?;
        }
    } else {
        for result in wl.check_all(&args.words) {
            writeln!(out, "{}", result)?;
        }
    }
    Ok(())
}
