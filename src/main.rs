// fortscript CLI

use anyhow::Context;
use clap::{Parser, Subcommand};
use console::style;
use fortscript::config::{DEFAULT_RUNTIME, RUNTIME_ENV};
use fortscript::driver::{self, DriverError};
use fortscript::pipeline::{self, CompileError, Stage};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::Level;

const VERSION: &str = "fortscript 0.0.1: FORTRAN subset to JavaScript";

#[derive(Parser)]
#[command(name = "fortscript", version, about = VERSION)]
struct Cli {
    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// No banner and no progress bar
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Translate a .f90s / .f70s file to a .js file next to it
    Build {
        file: PathBuf,
        /// Write the script here instead of <stem>.js
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Lex and parse only
    Check { file: PathBuf },
    /// Translate and execute with a JavaScript runtime
    Run {
        file: PathBuf,
        #[arg(long, env = RUNTIME_ENV, default_value = DEFAULT_RUNTIME)]
        runtime: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if !cli.quiet {
        print_header();
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_failure(&cli.command, &err);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Cmd::Build { file, output } => {
            let progress = pipeline_progress(cli.quiet, Stage::COUNT);
            let report = driver::build_file(file, output.as_deref(), |stage| {
                advance_progress(&progress, stage)
            });
            progress.finish_and_clear();
            let report = report.with_context(|| format!("building {}", file.display()))?;

            println!(
                "{} JavaScript code generated and saved to {} ({} bytes)",
                style("✔").green().bold(),
                style(report.output.display()).yellow(),
                report.bytes
            );
        }
        Cmd::Check { file } => {
            let source = driver::read_source(file)?;
            let program = pipeline::check(&source)
                .map_err(DriverError::from)
                .with_context(|| format!("checking {}", file.display()))?;
            println!(
                "{} Syntax check passed: {} statements",
                style("✔").green().bold(),
                program.statements.len()
            );
        }
        Cmd::Run { file, runtime } => {
            let source = driver::read_source(file)?;
            let progress = pipeline_progress(cli.quiet, Stage::COUNT);
            let script = pipeline::transpile_observed(&source, |stage| {
                advance_progress(&progress, stage)
            });
            progress.finish_and_clear();
            let script = script
                .map_err(DriverError::from)
                .with_context(|| format!("translating {}", file.display()))?;

            driver::run_script(&script, runtime)?;
            if !cli.quiet {
                println!("\n{} Program executed successfully!", style("✔").green().bold());
            }
        }
    }
    Ok(())
}

fn pipeline_progress(quiet: bool, stages: u64) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(stages);
    if let Ok(bar_style) = ProgressStyle::with_template("PIPELINE [{bar:40.green}] {msg}") {
        bar.set_style(bar_style.progress_chars("━━-"));
    }
    bar.set_message("Starting...");
    bar
}

fn advance_progress(progress: &ProgressBar, stage: Stage) {
    progress.set_message(stage.label());
    progress.inc(1);
}

fn print_header() {
    println!(
        "{line}\n{title}\n{line}",
        line = style("━").dim().to_string().repeat(60),
        title = style(VERSION).cyan().bold()
    );
}

fn report_failure(command: &Cmd, err: &anyhow::Error) {
    let driver_error = err.downcast_ref::<DriverError>();
    let phase = match driver_error {
        Some(DriverError::Compile(compile)) => compile.stage(),
        Some(
            DriverError::RuntimeSpawn { .. }
            | DriverError::RuntimeInput { .. }
            | DriverError::RuntimeFailed { .. },
        ) => "Runtime",
        _ => "Setup",
    };

    eprintln!();
    eprintln!("{} Stage: {}", style("✘").red().bold(), style(phase).red().bold());

    // driver errors already print their io cause, stop the chain there
    let mut causes = err.chain();
    if let Some(head) = causes.next() {
        eprintln!("{} {}", style("Error:").red().bold(), head);
        if !head.is::<DriverError>() {
            for cause in causes {
                eprintln!("  {}", cause);
                if cause.is::<DriverError>() {
                    break;
                }
            }
        }
    }

    if let Some(DriverError::Compile(compile)) = driver_error {
        if let Some(line) = compile.line() {
            let marker = match compile {
                CompileError::Lex(lex) => Some(lex.character),
                CompileError::Parse(_) => None,
            };
            print_source_line(source_file(command), line, marker);
        }
    }
}

fn print_source_line(file: &Path, line: usize, marker: Option<char>) {
    let Ok(source) = std::fs::read_to_string(file) else {
        return;
    };
    let Some(text) = source.lines().nth(line.saturating_sub(1)) else {
        return;
    };
    eprintln!("{:>4} | {}", line, style(text).dim());
    if let Some(caret) = caret_line(text, marker) {
        eprintln!("     | {}", style(caret).red().bold());
    }
}

/// Caret under the offending character, or under the whole line when the
/// error has no single character to point at.
fn caret_line(text: &str, marker: Option<char>) -> Option<String> {
    let trimmed = text.trim_start();
    if trimmed.is_empty() {
        return None;
    }
    let indent = text.len() - trimmed.len();
    let (column, width) = match marker.and_then(|ch| text.find(ch)) {
        Some(byte) => (text[..byte].chars().count(), 1),
        None => (text[..indent].chars().count(), trimmed.trim_end().chars().count()),
    };
    Some(format!("{}{}", " ".repeat(column), "^".repeat(width)))
}

fn source_file(command: &Cmd) -> &Path {
    match command {
        Cmd::Build { file, .. } | Cmd::Check { file } | Cmd::Run { file, .. } => file,
    }
}
