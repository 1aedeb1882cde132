//! csv2docx CLI - Word feedback report builder

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;

use csv2docx::{
    is_special, read_input, render, JsonFormat, NamedInput, ReportConfig, ReportGenerator,
    Section, Term, REPORT_FILE_NAME,
};

#[derive(Parser)]
#[command(name = "csv2docx")]
#[command(version)]
#[command(about = "Assemble CSV tables into a Word feedback report", long_about = None)]
struct Cli {
    /// Input CSV files or directories, in upload order
    #[arg(value_name = "INPUT")]
    inputs: Vec<PathBuf>,

    /// Output file
    #[arg(short, long, value_name = "FILE", default_value = REPORT_FILE_NAME)]
    output: PathBuf,

    #[command(flatten)]
    report: ReportArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the Word report
    Generate {
        /// Input CSV files or directories, in upload order
        #[arg(value_name = "INPUT")]
        inputs: Vec<PathBuf>,

        /// Output file
        #[arg(short, long, value_name = "FILE", default_value = REPORT_FILE_NAME)]
        output: PathBuf,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Print the assembled document without writing a report
    Preview {
        /// Input CSV files or directories, in upload order
        #[arg(value_name = "INPUT")]
        inputs: Vec<PathBuf>,

        /// Print the document model as JSON
        #[arg(long)]
        json: bool,

        /// Output compact JSON
        #[arg(long, requires = "json")]
        compact: bool,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Show version information
    Version,
}

/// Front-matter values.
#[derive(Args, Clone)]
struct ReportArgs {
    /// Academic term
    #[arg(long, value_enum, default_value = "spring")]
    term: TermArg,

    /// Year shown in the front matter
    #[arg(long, default_value = "2025")]
    year: String,

    /// Semester shown in the front matter
    #[arg(long, default_value = "4")]
    semester: String,

    /// Section letter (A-Z)
    #[arg(long, default_value = "A")]
    section: Section,
}

impl From<ReportArgs> for ReportConfig {
    fn from(args: ReportArgs) -> Self {
        ReportConfig::new()
            .with_term(args.term.into())
            .with_year(args.year)
            .with_semester(args.semester)
            .with_section(args.section)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum TermArg {
    /// Spring term
    Spring,
    /// Monsoon term
    Monsoon,
}

impl From<TermArg> for Term {
    fn from(term: TermArg) -> Self {
        match term {
            TermArg::Spring => Term::Spring,
            TermArg::Monsoon => Term::Monsoon,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Generate {
            inputs,
            output,
            report,
        }) => cmd_generate(&inputs, &output, report.into()),
        Some(Commands::Preview {
            inputs,
            json,
            compact,
            report,
        }) => cmd_preview(&inputs, json, compact, report.into()),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => cmd_generate(&cli.inputs, &cli.output, cli.report.into()),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Expand directories into their `.csv` files, sorted by file name.
///
/// Plain file arguments keep their command-line position.
fn collect_input_paths(args: &[PathBuf]) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let mut paths = Vec::new();
    for arg in args {
        if arg.is_dir() {
            let mut found: Vec<PathBuf> = fs::read_dir(arg)?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| p.is_file() && has_csv_extension(p))
                .collect();
            found.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
            debug!("{}: {} CSV file(s)", arg.display(), found.len());
            paths.extend(found);
        } else {
            paths.push(arg.clone());
        }
    }
    Ok(paths)
}

fn has_csv_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
}

fn read_inputs(
    args: &[PathBuf],
    pb: &ProgressBar,
) -> Result<Vec<NamedInput>, Box<dyn std::error::Error>> {
    let paths = collect_input_paths(args)?;
    pb.set_length(paths.len() as u64 + 1);

    let mut inputs = Vec::with_capacity(paths.len());
    for path in &paths {
        pb.set_message(format!("Reading {}...", path.display()));
        inputs.push(read_input(path)?);
        pb.inc(1);
    }
    Ok(inputs)
}

fn cmd_generate(
    inputs: &[PathBuf],
    output: &Path,
    config: ReportConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let pb = ProgressBar::new(1);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    let inputs = read_inputs(inputs, &pb)?;
    let names: Vec<String> = inputs.iter().map(|i| i.name.clone()).collect();

    pb.set_message("Generating report...");
    let report = ReportGenerator::new(config).generate(inputs)?;
    report.write_to(output)?;
    pb.inc(1);
    pb.finish_with_message("Done!");

    let headings = report.document().section_headings();
    println!("\n{} {}", "Saved to".green().bold(), output.display());
    if headings.is_empty() {
        println!("  {} front matter only", "└─".dimmed());
    }
    for (i, heading) in headings.iter().enumerate() {
        let branch = if i + 1 == headings.len() { "└─" } else { "├─" };
        println!("  {} {}", branch.dimmed(), heading);
    }
    if names.iter().filter(|n| is_special(n)).count() > 1 {
        println!(
            "{} more than one cross table was supplied; all were placed last",
            "Note:".yellow()
        );
    }

    Ok(())
}

fn cmd_preview(
    inputs: &[PathBuf],
    json: bool,
    compact: bool,
    config: ReportConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let inputs = collect_input_paths(inputs)?
        .iter()
        .map(|p| read_input(p))
        .collect::<csv2docx::Result<Vec<_>>>()?;
    let doc = ReportGenerator::new(config).build_document(inputs)?;

    if json {
        let format = if compact {
            JsonFormat::Compact
        } else {
            JsonFormat::Pretty
        };
        println!("{}", render::to_json(&doc, format)?);
    } else {
        println!("{}", doc.plain_text());
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "csv2docx".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("CSV to Word feedback report tool");
    println!();
    println!("License: MIT");
}
