//! CLI for verse-tools - Enrich scripture and catechism references in Markdown documents.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use verse_tools::{book_entries, enrich_markdown, load_config};

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

/// Enrich scripture and catechism references in Markdown documents
#[derive(Parser)]
#[command(name = "verse-tools")]
#[command(version)]
#[command(after_help = "\
Examples:
  verse-tools enrich notes.md
  verse-tools enrich notes.md -o enriched.md
  verse-tools enrich notes.md --in-place
  echo 'John 3:16' | verse-tools enrich -
  verse-tools books --json")]
struct Cli {
    /// Enable debug logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enrich references in a Markdown file
    #[command(after_help = "\
Examples:
  verse-tools enrich homily.md
  verse-tools enrich homily.md --bible-version KJV -o out.md
  verse-tools enrich homily.md --template '[[{abbrev} {chapter}:{verse}]]'
  verse-tools enrich draft.md --no-cross-refs --in-place

Recognized references: 'Genesis 1:1', '1 Samuel 16:1, 16:4-13', 'CCC 528-530',
and backtick-wrapped forms like `Matthew 5:3-12`.

The BIBLE_VERSION_CODE, CROSS_REFERENCE_TEMPLATE, and
INCLUDE_CROSS_REFERENCE_LINKS environment variables provide defaults;
flags take precedence.")]
    Enrich {
        /// Input Markdown file (use '-' for stdin)
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long, conflicts_with = "in_place")]
        output: Option<PathBuf>,

        /// Overwrite the input file with the enriched result
        #[arg(long)]
        in_place: bool,

        /// Bible version code for Bible Gateway URLs (e.g. NRSVCE, KJV)
        #[arg(long)]
        bible_version: Option<String>,

        /// Cross-reference link template; placeholders {abbrev}, {chapter},
        /// {chapter2}, {verse}
        #[arg(long)]
        template: Option<String>,

        /// Skip internal cross-reference links, keep external links only
        #[arg(long)]
        no_cross_refs: bool,
    },

    /// List the known books and their abbreviations
    Books {
        /// Emit the registry as JSON
        #[arg(long)]
        json: bool,
    },
}

// ---------------------------------------------------------------------------
// AppError — semantic exit codes
// ---------------------------------------------------------------------------

#[derive(Error, Debug)]
enum AppError {
    /// Exit 10 — input file not found / unreadable
    #[error("{0}\n  hint: verify the file path is correct")]
    InputFile(String),

    /// Exit 11 — cannot write the result
    #[error("{0}\n  hint: check that the output directory exists and is writable")]
    OutputFile(String),

    /// Exit 2 — invalid flag combination, matching clap's usage errors
    #[error("{0}\n  hint: see 'verse-tools enrich --help' for flag usage")]
    Usage(String),
}

impl AppError {
    fn exit_code(&self) -> i32 {
        match self {
            AppError::InputFile(_) => 10,
            AppError::OutputFile(_) => 11,
            AppError::Usage(_) => 2,
        }
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Commands::Enrich {
            input,
            output,
            in_place,
            bible_version,
            template,
            no_cross_refs,
        } => enrich_command(
            &input,
            output.as_deref(),
            in_place,
            bible_version,
            template,
            no_cross_refs,
        ),
        Commands::Books { json } => books_command(json),
    }
}

/// Logs go to stderr; stdout is reserved for the enriched document.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("verse_tools=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// Enrich a Markdown document.
fn enrich_command(
    input: &Path,
    output: Option<&Path>,
    in_place: bool,
    bible_version: Option<String>,
    template: Option<String>,
    no_cross_refs: bool,
) -> Result<(), AppError> {
    let from_stdin = input == Path::new("-");
    if in_place && from_stdin {
        return Err(AppError::Usage(
            "--in-place requires a file path, not stdin".to_string(),
        ));
    }

    // 1. Read the document (support '-' for stdin)
    let markdown = if from_stdin {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| AppError::InputFile(format!("failed to read from stdin: {}", e)))?;
        buf
    } else {
        fs::read_to_string(input)
            .map_err(|e| AppError::InputFile(format!("'{}': {}", input.display(), e)))?
    };

    // 2. Environment defaults, then flag overrides
    let mut config = load_config();
    if let Some(version) = bible_version {
        config.bible_version = version;
    }
    if let Some(template) = template {
        config.cross_reference_template = template;
    }
    if no_cross_refs {
        config.include_cross_reference_links = false;
    }

    // 3. Enrich
    let result = enrich_markdown(&markdown, &config);

    // 4. Write to the input file, the chosen output file, or stdout
    let destination = if in_place { Some(input) } else { output };
    if let Some(path) = destination {
        fs::write(path, &result)
            .map_err(|e| AppError::OutputFile(format!("'{}': {}", path.display(), e)))?;
        if in_place {
            eprintln!("enriched {} in place", input.display());
        } else {
            eprintln!("wrote {}", path.display());
        }
    } else {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        write!(handle, "{}", result)
            .map_err(|e| AppError::OutputFile(format!("stdout: {}", e)))?;
    }

    Ok(())
}

/// One row of the `books` listing.
#[derive(Serialize)]
struct BookRow {
    name: &'static str,
    abbrev: &'static str,
    single_chapter: bool,
}

/// List the book registry.
fn books_command(json: bool) -> Result<(), AppError> {
    let rows: Vec<BookRow> = book_entries()
        .iter()
        .map(|&(name, info)| BookRow {
            name,
            abbrev: info.abbrev,
            single_chapter: info.single_chapter,
        })
        .collect();

    if json {
        let rendered = serde_json::to_string_pretty(&rows)
            .map_err(|e| AppError::OutputFile(format!("stdout: {}", e)))?;
        println!("{}", rendered);
    } else {
        for row in rows {
            let marker = if row.single_chapter {
                "  (single chapter)"
            } else {
                ""
            };
            println!("{:<22} {}{}", row.name, row.abbrev, marker);
        }
    }

    Ok(())
}
