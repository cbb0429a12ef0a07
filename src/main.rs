use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use diffcheck::areas::checker::DiffChecker;
use diffcheck::artifacts::core::{ColorMode, OutputFormat, PagerWriter, should_page};
use diffcheck::artifacts::diff::alignment::DEFAULT_MAX_CELLS;
use diffcheck::artifacts::diff::diff_source::{DiffSource, STDIN_PATH};
use diffcheck::artifacts::diff::normalizer::Normalization;
use diffcheck::artifacts::diff::options::DiffOptions;
use diffcheck::artifacts::diff::tokenizer::Granularity;
use minus::Pager;
use std::path::Path;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "diffcheck",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Compare two texts by line, word or character",
    long_about = "This is a text diff checker, written in Rust. \
    It aligns two texts with a longest-common-subsequence diff and prints \
    the result as a unified patch, as inline markup, or as a summary.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ComparisonArgs {
    #[arg(
        short,
        long,
        default_value = "line",
        env = "DIFFCHECK_GRANULARITY",
        help = "Comparison unit: line, word or char"
    )]
    granularity: Granularity,
    #[arg(short = 'i', long, help = "Ignore case differences")]
    ignore_case: bool,
    #[arg(
        short = 'w',
        long,
        help = "Collapse runs of spaces and tabs and trim the whole text"
    )]
    ignore_whitespace: bool,
}

impl ComparisonArgs {
    fn options(&self) -> DiffOptions {
        DiffOptions::default()
            .with_granularity(self.granularity)
            .with_normalization(Normalization::from_flags(
                self.ignore_case,
                self.ignore_whitespace,
            ))
    }
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "compare",
        about = "Show the differences between two texts",
        long_about = "This command compares two files (use - for standard input) \
        and prints their differences. Exits with 1 on differences when --exit-code is set."
    )]
    Compare {
        #[arg(index = 1, help = "The original text")]
        old: String,
        #[arg(index = 2, help = "The modified text")]
        new: String,
        #[command(flatten)]
        comparison: ComparisonArgs,
        #[arg(
            short = 'U',
            long = "unified",
            default_value_t = 3,
            allow_negative_numbers = true,
            env = "DIFFCHECK_CONTEXT",
            help = "Number of context lines around each change"
        )]
        context: isize,
        #[arg(
            short,
            long,
            help = "Output format: unified, inline or stat (default: unified for lines, inline otherwise)"
        )]
        format: Option<OutputFormat>,
        #[arg(
            long,
            default_value_t = DEFAULT_MAX_CELLS,
            env = "DIFFCHECK_MAX_CELLS",
            help = "Largest alignment table before falling back to a full rewrite"
        )]
        max_cells: usize,
        #[arg(
            long,
            default_value_t = 10_000,
            env = "DIFFCHECK_TIMEOUT_MS",
            help = "Give up when the alignment takes longer than this"
        )]
        timeout_ms: u64,
        #[arg(
            short = 'N',
            long,
            help = "Treat a missing file as empty"
        )]
        new_file: bool,
        #[arg(long, help = "Exit with 1 when the texts differ")]
        exit_code: bool,
        #[arg(
            long,
            default_value = "auto",
            env = "DIFFCHECK_COLOR",
            help = "Color output: auto, always or never"
        )]
        color: ColorMode,
        #[arg(long, help = "Do not pipe output through a pager")]
        no_pager: bool,
    },
    #[command(
        name = "tokenize",
        about = "Print the tokens of a text",
        long_about = "This command normalizes a file (use - for standard input) \
        and prints one token per line, quoted, as the comparison sees them."
    )]
    Tokenize {
        #[arg(index = 1, help = "The text to split")]
        file: String,
        #[command(flatten)]
        comparison: ComparisonArgs,
    },
}

async fn load(path: &str, absent_as_empty: bool) -> Result<DiffSource> {
    if path == STDIN_PATH {
        DiffSource::from_stdin().await
    } else {
        DiffSource::from_file(Path::new(path), absent_as_empty).await
    }
}

async fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Compare {
            old,
            new,
            comparison,
            context,
            format,
            max_cells,
            timeout_ms,
            new_file,
            exit_code,
            color,
            no_pager,
        } => {
            if old == STDIN_PATH && new == STDIN_PATH {
                anyhow::bail!("Only one side can be read from standard input");
            }

            color.apply();
            let options = comparison
                .options()
                .with_context(context)
                .with_max_cells(max_cells);
            let format = format.unwrap_or(match options.granularity {
                Granularity::Line => OutputFormat::Unified,
                Granularity::Word | Granularity::Char => OutputFormat::Inline,
            });

            let old = load(&old, new_file).await?;
            let new = load(&new, new_file).await?;

            let pager = should_page(no_pager).then(Pager::new);
            let writer: Box<dyn std::io::Write> = match &pager {
                Some(pager) => Box::new(PagerWriter::new(pager.clone())),
                None => Box::new(std::io::stdout()),
            };

            let checker = DiffChecker::new(options, writer)
                .with_timeout(Duration::from_millis(timeout_ms));
            let differs = checker.compare(&old, &new, format).await?;

            if let Some(pager) = pager {
                minus::page_all(pager)?;
            }

            Ok(if exit_code && differs { 1 } else { 0 })
        }
        Commands::Tokenize { file, comparison } => {
            let source = load(&file, false).await?;
            let checker = DiffChecker::new(comparison.options(), Box::new(std::io::stdout()));

            checker.tokenize(&source)?;

            Ok(0)
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let runtime = tokio::runtime::Runtime::new()?;
    let status = runtime.block_on(run(cli));
    // A timed-out alignment keeps its worker busy; don't wait for it.
    runtime.shutdown_timeout(Duration::from_millis(100));

    match status? {
        0 => Ok(()),
        code => std::process::exit(code),
    }
}
