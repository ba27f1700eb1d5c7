use std::{
    fs,
    io::{self, Read},
    iter, process,
};

use anyhow::{Context, Result};
use arith_scan::{
    error::LineError,
    scanner::{ScanError, Scanner},
    source_map::find_line,
};
use clap::Parser;
use commandline::{Operation, Options};
use log::info;

mod commandline;

fn main() -> Result<()> {
    let options = Options::parse();

    stderrlog::new()
        .module(module_path!())
        .verbosity(1 + options.verbose as usize)
        .init()?;

    let file = options.operation.file();
    let content = read_source(file)?;

    let mut scanner = Scanner::new(content.as_slice());
    let mut count = 0;
    for result in scanner.tokens() {
        match result {
            Ok(token) => {
                if let Operation::Tokens { .. } = options.operation {
                    println!("{}: {}", token.line, token);
                }
                count += 1;
            }
            Err(ScanError::Lex(err)) => {
                describe_error(&err, &String::from_utf8_lossy(&content));
                eprintln!("{}", err);
                process::exit(1);
            }
            Err(err) => return Err(err).with_context(|| format!("Failed to scan {}", file)),
        }
    }

    info!("Scanned {} tokens from {}", count, file);
    if let Operation::Check { .. } = options.operation {
        println!("{}: ok", file);
    }

    Ok(())
}

fn read_source(file: &str) -> Result<Vec<u8>> {
    if file == "-" {
        let mut content = vec![];
        io::stdin()
            .read_to_end(&mut content)
            .context("Failed to read standard input")?;
        Ok(content)
    } else {
        fs::read(file).with_context(|| format!("Failed to read {}", file))
    }
}

fn describe_error(err: &impl LineError, content: &str) {
    let Some(line) = find_line(content, err.line()) else {
        return;
    };

    fn pad_char(ch: char, times: usize) -> String {
        iter::repeat(ch).take(times).collect()
    }

    let gutter = format!("{}", line.line_no());

    eprintln!("{}| {}", gutter, line.for_display());
    eprintln!("{}| --- {}", pad_char(' ', gutter.len()), err.describe());
}
