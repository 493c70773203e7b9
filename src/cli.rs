// src/cli.rs
use std::collections::HashSet;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use color_eyre::eyre::{eyre, Result, WrapErr};
use log::LevelFilter;

use crate::lexicon::Lexicon;
use crate::logger::{self, LineLogger};
use crate::params::Params;
use crate::scan::{self, Detection};
use crate::scoring::{Classification, NameClassifier};

const USAGE: &str = "\
Usage: cli [--data <dir>] [--log <file>] [-v] [--all] [--text <file>] [NAME ...]

  --data <dir>    lexicon directory (default: data)
  --log <file>    append log lines to <file> instead of stderr
  -v, --verbose   debug logging
  --all           also print names that did not match
  --text <file>   scan a plain-text file for candidate names
  NAME ...        names to classify; read one per line from stdin if none";

/// Parse, set up logging, load the lexicon, classify.
pub fn run() -> Result<()> {
    let params = parse_args(std::env::args().skip(1))?;
    init_logging(&params)?;

    let lexicon = Lexicon::load_dir(&params.data_dir)
        .wrap_err("could not load the name lexicon")?;
    let classifier = NameClassifier::new(lexicon);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(path) = &params.text_file {
        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("could not read {}", path.display()))?;
        let mut seen = HashSet::new();
        let found = scan::dedup_by_confidence(scan::scan_text(&classifier, &text, &mut seen));
        log::info!("{}: {} candidate(s) matched", path.display(), found.len());
        for d in &found {
            write_detection(&mut out, d)?;
        }
    }

    if !params.names.is_empty() {
        for name in &params.names {
            emit(&mut out, &params, name, &classifier.classify(name))?;
        }
    } else if params.reads_stdin() {
        for line in io::stdin().lock().lines() {
            let line = line?;
            let name = line.trim();
            if name.is_empty() { continue; }
            emit(&mut out, &params, name, &classifier.classify(name))?;
        }
    }

    out.flush()?;
    Ok(())
}

pub fn parse_args<I>(args: I) -> Result<Params>
where
    I: IntoIterator<Item = String>,
{
    let mut params = Params::new();
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        match a.as_str() {
            "--data" => params.data_dir = PathBuf::from(args.next().ok_or_else(|| eyre!("Missing value for --data"))?),
            "--log" => params.log_file = Some(PathBuf::from(args.next().ok_or_else(|| eyre!("Missing value for --log"))?)),
            "--text" => params.text_file = Some(PathBuf::from(args.next().ok_or_else(|| eyre!("Missing value for --text"))?)),
            "-v" | "--verbose" => params.verbose = true,
            "--all" => params.show_all = true,
            "-h" | "--help" => {
                eprintln!("{USAGE}");
                std::process::exit(0);
            }
            "--" => {
                params.names.extend(args.by_ref());
            }
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(eyre!("Unknown arg: {}", flag));
            }
            other => params.names.push(s!(other)),
        }
    }

    Ok(params)
}

fn init_logging(params: &Params) -> Result<()> {
    let level = if params.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    let logger = match &params.log_file {
        Some(path) => LineLogger::file(path, level)
            .wrap_err_with(|| format!("could not open log file {}", path.display()))?,
        None => LineLogger::stderr(level),
    };
    logger::init(logger).wrap_err("could not install the logger")?;
    Ok(())
}

/// `<name>\t<yes|no>\t<pct>%\t<reasons>`
pub fn format_row(name: &str, is_match: bool, confidence: f64, reasons: &[String]) -> String {
    let verdict = if is_match { "yes" } else { "no" };
    let pct = format!("{:.0}%", confidence * 100.0);
    join!(name, "\t", verdict, "\t", &pct, "\t", &reasons.join(", "))
}

fn emit<W: Write>(out: &mut W, params: &Params, name: &str, c: &Classification) -> io::Result<()> {
    if !c.is_indonesian && !params.show_all {
        return Ok(());
    }
    writeln!(out, "{}", format_row(name, c.is_indonesian, c.confidence, &c.reasons()))
}

fn write_detection<W: Write>(out: &mut W, d: &Detection) -> io::Result<()> {
    writeln!(out, "{}", format_row(&d.name, true, d.confidence, &d.reasons))
}
