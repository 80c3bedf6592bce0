//! promptshelf CLI - render the Awesome Prompt Engineering list

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use log::error;

use promptshelf::{error_page, DocumentCache, Fetcher, JsonFormat, Promptshelf, ShelfResult};

#[derive(Parser)]
#[command(name = "promptshelf")]
#[command(version)]
#[command(about = "Render the Awesome Prompt Engineering list as a categorized HTML page", long_about = None)]
struct Cli {
    /// Output HTML file (default mode; stdout if not specified)
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(flatten)]
    source: SourceArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the resource list as an HTML page
    Render {
        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Dump the parsed document as JSON
    Json {
        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Show a summary of the parsed document
    Info {
        #[command(flatten)]
        source: SourceArgs,
    },
}

#[derive(Args, Clone)]
struct SourceArgs {
    /// Local markdown file tried before the remote URL
    #[arg(long, value_name = "FILE")]
    source: Option<PathBuf>,

    /// Remote URL fetched when the local file is missing or empty
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Skip the cache for this run
    #[arg(long)]
    no_cache: bool,

    /// Directory holding the cache blob (defaults to the OS temp dir)
    #[arg(long, value_name = "DIR")]
    cache_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Render { output, source }) => cmd_render(output, source),
        Some(Commands::Json {
            output,
            compact,
            source,
        }) => cmd_json(output, compact, source),
        Some(Commands::Info { source }) => cmd_info(source),
        None => cmd_render(cli.output, cli.source),
    }
}

fn load(source: &SourceArgs) -> promptshelf::Result<ShelfResult> {
    let mut fetcher = Fetcher::new();
    if let Some(path) = &source.source {
        fetcher = fetcher.with_local_path(path);
    }
    if let Some(url) = &source.url {
        fetcher = fetcher.with_remote_url(url);
    }

    let mut shelf = Promptshelf::new().with_fetcher(fetcher);
    if !source.no_cache {
        let cache = match &source.cache_dir {
            Some(dir) => DocumentCache::new(dir.join("promptshelf-cache.json")),
            None => DocumentCache::in_temp_dir(),
        };
        shelf = shelf.with_cache(cache);
    }
    shelf.load()
}

fn cmd_render(output: Option<PathBuf>, source: SourceArgs) -> ExitCode {
    let result = match load(&source) {
        Ok(result) => result,
        Err(err) => {
            error!("load failed: {}", err);
            eprintln!("{} {}", "error:".red().bold(), err);
            // No partial page on failure: the output is replaced wholesale
            // with the error state and its retry affordance.
            if let Some(path) = &output {
                if let Err(write_err) = fs::write(path, error_page()) {
                    eprintln!("{} {}", "error:".red().bold(), write_err);
                }
            }
            return ExitCode::FAILURE;
        }
    };

    let html = match result.to_html() {
        Ok(html) => html,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            return ExitCode::FAILURE;
        }
    };

    write_output(output, &html, "page")
}

fn cmd_json(output: Option<PathBuf>, compact: bool, source: SourceArgs) -> ExitCode {
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = match load(&source).and_then(|result| result.to_json(format)) {
        Ok(json) => json,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            return ExitCode::FAILURE;
        }
    };

    write_output(output, &json, "document")
}

fn cmd_info(source: SourceArgs) -> ExitCode {
    let result = match load(&source) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            return ExitCode::FAILURE;
        }
    };

    let doc = result.document();
    println!("{}", "Document summary".bold());
    println!("  sections: {}", doc.section_count());
    println!("  tables:   {}", doc.table_count());
    println!("  lines:    {}", doc.content_line_count());
    for (name, section) in &doc.sections {
        let detail = if section.has_subsections() {
            format!("{} subsections", section.subsections.len())
        } else if section.table.is_some() {
            format!(
                "table, {} rows",
                section.table.as_ref().map(|t| t.row_count()).unwrap_or(0)
            )
        } else {
            format!("{} lines", section.content.len())
        };
        println!("  {} {}", name.cyan(), format!("({})", detail).dimmed());
    }
    ExitCode::SUCCESS
}

fn write_output(output: Option<PathBuf>, content: &str, what: &str) -> ExitCode {
    match output {
        Some(path) => match fs::write(&path, content) {
            Ok(()) => {
                println!(
                    "{} {} written to {}",
                    "ok:".green().bold(),
                    what,
                    path.display()
                );
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("{} {}", "error:".red().bold(), err);
                ExitCode::FAILURE
            }
        },
        None => {
            println!("{}", content);
            ExitCode::SUCCESS
        }
    }
}
