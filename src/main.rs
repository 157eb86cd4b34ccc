#[macro_use]
extern crate text_io;

use std::env;
use std::fs::File;
use std::io::Read;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::solver::{Dictionary, Grid, Matcher, Searcher};

mod solver;
mod utils;

#[derive(Debug, Serialize)]
struct SearchReport {
    side: usize,
    letters: String,
    strategy: &'static str,
    word_count: usize,
    words: Vec<String>,
    elapsed_ms: u128,
}

fn print_usage() {
    eprintln!(
        "usage: boggler <wordlist> [LETTERS | @board.json | random] \
         [--side N] [--parallel] [--matcher] [--json]"
    );
}

/// Reads a board file holding rows of single-letter strings, e.g.
/// [["b","g"],["i","h"]].
fn read_board_file(path: &str) -> Result<Vec<Vec<char>>> {
    let mut data = String::new();
    File::open(path)
        .with_context(|| format!("could not open board file {}", path))?
        .read_to_string(&mut data)?;
    let rows: Vec<Vec<String>> = serde_json::from_str(&data)
        .with_context(|| format!("board file {} is not rows of letters", path))?;

    let mut board = Vec::with_capacity(rows.len());
    for row in rows {
        let mut letters = Vec::with_capacity(row.len());
        for cell in row {
            let mut chars = cell.chars();
            match (chars.next(), chars.next()) {
                (Some(letter), None) => letters.push(letter),
                _ => bail!("board cells must hold a single letter, got {:?}", cell),
            }
        }
        board.push(letters);
    }
    Ok(board)
}

fn parse_letters(input: &str) -> Vec<char> {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .collect()
}

/// Side length whose square is `letter_count`, if there is one.
fn board_side(letter_count: usize) -> Option<usize> {
    let mut side = 1;
    while side * side < letter_count {
        side += 1;
    }
    (side * side == letter_count).then(|| side)
}

fn build_grid(board_arg: &str, side: Option<usize>) -> Result<Grid> {
    if let Some(path) = board_arg.strip_prefix('@') {
        return Ok(Grid::from_rows(read_board_file(path)?)?);
    }
    if board_arg == "random" {
        let side = side.unwrap_or(4);
        return Ok(Grid::new(utils::letters::random_letters(side * side), side)?);
    }

    let letters = parse_letters(board_arg);
    let side = match side {
        Some(side) => side,
        None => board_side(letters.len())
            .with_context(|| format!("{} letters do not fill a square board", letters.len()))?,
    };
    Ok(Grid::new(letters, side)?)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let mut positional: Vec<String> = Vec::new();
    let mut side = None;
    let mut parallel = false;
    let mut use_matcher = false;
    let mut json = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--side" => {
                i += 1;
                let value = args.get(i).context("--side needs a value")?;
                side = Some(value.parse().context("--side needs a number")?);
            }
            "--parallel" => parallel = true,
            "--matcher" => use_matcher = true,
            "--json" => json = true,
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            flag if flag.starts_with("--") => {
                print_usage();
                bail!("unknown option {}", flag);
            }
            _ => positional.push(args[i].clone()),
        }
        i += 1;
    }

    if positional.is_empty() {
        print_usage();
        bail!("missing word list path");
    }
    let wordlist = &positional[0];

    // Letters may come as one argument, many single-letter arguments, or
    // interactively when omitted.
    let board_arg = if positional.len() > 1 {
        positional[1..].concat()
    } else {
        println!("Enter letters:");
        let line: String = read!("{}\n");
        line
    };

    let dictionary = Dictionary::from_file(wordlist)?;
    let grid = build_grid(&board_arg, side)?;
    tracing::debug!("searching a {0}x{0} board: {1}", grid.side(), grid.letters());

    let strategy = if use_matcher {
        "matcher"
    } else if parallel {
        "dfs-parallel"
    } else {
        "dfs"
    };

    let started = Instant::now();
    let results = if use_matcher {
        Matcher::new(&grid, &dictionary).search_all()
    } else if parallel {
        Searcher::new(&grid, &dictionary).search_all_parallel()
    } else {
        Searcher::new(&grid, &dictionary).search_all()
    };
    let elapsed = started.elapsed();

    let words = results.into_sorted_vec();
    if json {
        let report = SearchReport {
            side: grid.side(),
            letters: grid.letters(),
            strategy,
            word_count: words.len(),
            words,
            elapsed_ms: elapsed.as_millis(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for word in &words {
            println!("{}", word);
        }
        println!("{} words in {:.2?}", words.len(), elapsed);
    }

    Ok(())
}
