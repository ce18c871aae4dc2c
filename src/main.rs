pub mod entity;
pub mod error;
pub mod files;
pub mod normalizer;
pub mod parser;
pub mod translator;

use std::path::{Path, PathBuf};
use std::process;

use anyhow::Context;
use log::{debug, info};
use structopt::StructOpt;

use crate::translator::Target;

const PREVIEW_CHARS: usize = 500;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "notedown",
    about = "Turns Markdown into something the note editor accepts"
)]
struct Opt {
    #[structopt(long = "debug")]
    pub debug: bool,
    #[structopt(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Convert to HTML, written to <name>.html
    Html(ConvertOpt),
    /// Strip to plain text, written to <name>_note.txt
    Text(ConvertOpt),
    /// Reduce to the Markdown the editor supports, written to <name>_note.md
    Markdown(ConvertOpt),
    /// Expand tabs, unify line endings and trim trailing whitespace in place
    Normalize(NormalizeOpt),
}

#[derive(Debug, StructOpt)]
struct ConvertOpt {
    /// Markdown file, or - for standard input
    #[structopt(parse(from_os_str))]
    pub input: PathBuf,
    /// Write here instead of next to the input
    #[structopt(short = "o", long = "output", parse(from_os_str))]
    pub output: Option<PathBuf>,
    /// Print the result instead of writing a file
    #[structopt(long = "stdout")]
    pub stdout: bool,
    /// Print the result (only the beginning, except for HTML) after writing it
    #[structopt(long = "preview")]
    pub preview: bool,
}

#[derive(Debug, StructOpt)]
struct NormalizeOpt {
    /// Markdown file to rewrite, or - for standard input
    #[structopt(parse(from_os_str))]
    pub input: PathBuf,
    /// Write here instead of overwriting the input (or printing it, for -)
    #[structopt(short = "o", long = "output", parse(from_os_str))]
    pub output: Option<PathBuf>,
}

fn init_logger(debug: bool) {
    let level = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// HTML is shown whole so it can be copied from the console; the other
/// targets only show their beginning.
fn preview(target: Target, content: &str) -> String {
    match target {
        Target::Html => content.to_string(),
        Target::PlainText | Target::Markdown => content.chars().take(PREVIEW_CHARS).collect(),
    }
}

fn run(opt: &Opt) -> anyhow::Result<()> {
    match &opt.cmd {
        Command::Html(convert) => run_convert(Target::Html, convert),
        Command::Text(convert) => run_convert(Target::PlainText, convert),
        Command::Markdown(convert) => run_convert(Target::Markdown, convert),
        Command::Normalize(normalize) => run_normalize(normalize),
    }
}

fn run_convert(target: Target, opt: &ConvertOpt) -> anyhow::Result<()> {
    let content = files::read_input(&opt.input)?;
    let markdown = parser::parse_markdown(&content);
    debug!(">>> markdown = {:?}", &markdown);
    let converted = translator::translate(target, &markdown);

    let output = match &opt.output {
        _ if opt.stdout => None,
        Some(path) => Some(path.clone()),
        None if files::is_stdin(&opt.input) => None,
        None => Some(files::derive_output_path(
            &opt.input,
            target.output_suffix(),
        )),
    };
    let Some(output) = output else {
        println!("{}", converted);
        return Ok(());
    };

    files::write_output(&output, &converted)
        .with_context(|| format!("could not convert {}", opt.input.display()))?;
    info!("converted: {}", output.display());
    if opt.preview {
        println!("{}", preview(target, &converted));
    }
    Ok(())
}

/// `None` means the result goes to standard output.
fn normalize_output(opt: &NormalizeOpt) -> Option<&Path> {
    match &opt.output {
        Some(path) => Some(path.as_path()),
        None if files::is_stdin(&opt.input) => None,
        None => Some(opt.input.as_path()),
    }
}

fn run_normalize(opt: &NormalizeOpt) -> anyhow::Result<()> {
    let content = files::read_input(&opt.input)?;
    let normalized = normalizer::normalize(&content);
    let Some(output) = normalize_output(opt) else {
        println!("{}", normalized);
        return Ok(());
    };
    files::write_output(output, &normalized)
        .with_context(|| format!("could not normalize {}", opt.input.display()))?;
    info!("normalized: {}", output.display());
    Ok(())
}

fn main() {
    let opt = Opt::from_args();
    init_logger(opt.debug);
    debug!(">>> opt = {:?}", &opt);
    if let Err(err) = run(&opt) {
        eprintln!("error: {:#}", err);
        process::exit(1);
    }
}
