//! Calorie Counter CLI
//!
//! Command-line interface for the food calorie search.
//! Runs the interactive terminal widget by default, or one-shot commands.

use calorie_counter::{format_table, pad_to_width, AppConfig, PatternMode, SearchState};
use clap::{Parser, Subcommand, ValueEnum};
use console::style;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

/// Calorie Counter - look up calories for common foods
///
/// Plain queries match anywhere in a food name; `*` matches any run of
/// characters (e.g. "*berry").
#[derive(Parser)]
#[command(name = "calorie-counter")]
#[command(author = "Calorie Counter Contributors")]
#[command(version)]
#[command(about = "Look up calories for common foods", long_about = None)]
struct Cli {
    /// JSON config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log file (default: calorie-counter.log next to the executable)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Pass regex metacharacters in wildcard queries through unescaped
    #[arg(long, global = true)]
    raw_patterns: bool,

    /// Results per page
    #[arg(long, global = true)]
    page_size: Option<usize>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive search widget (default)
    Tui,

    /// Search foods by name
    Search {
        /// Search text; `*` is a wildcard (use -- before text starting with -)
        #[arg(allow_hyphen_values = true)]
        query: Vec<String>,

        /// Number of result pages to show
        #[arg(short, long, default_value = "1")]
        pages: usize,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Print the whole catalog
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Dump the word index built from food names
    Words {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            std::process::exit(1);
        }
    };

    let result = config
        .level_filter()
        .and_then(|level| calorie_counter::logging::init(config.log_file.as_deref(), level))
        .and_then(|()| {
            calorie_counter::logging::separator("startup");
            log::info!(target: "MAIN", "Calorie Counter {} starting up", calorie_counter::VERSION);

            match cli.command.unwrap_or(Commands::Tui) {
                Commands::Tui => calorie_counter::tui::run(config.engine(), config.search_state()),
                Commands::Search {
                    query,
                    pages,
                    output,
                } => cmd_search(&config, &query.join(" "), pages, output),
                Commands::List { output } => cmd_list(&config, output),
                Commands::Words { output } => cmd_words(&config, output),
            }
        });

    calorie_counter::logging::flush();

    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }
}

/// Config file (if any) with command-line overrides applied
fn load_config(cli: &Cli) -> calorie_counter::Result<AppConfig> {
    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    if let Some(path) = &cli.log_file {
        config.log_file = Some(path.clone());
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if cli.raw_patterns {
        config.pattern_mode = PatternMode::Raw;
    }
    if let Some(page_size) = cli.page_size {
        config.page_size = page_size;
    }

    config.validate()?;
    Ok(config)
}

/// Search command implementation
fn cmd_search(
    config: &AppConfig,
    query: &str,
    pages: usize,
    output: OutputFormat,
) -> calorie_counter::Result<()> {
    let engine = config.engine();
    let mut state: SearchState = config.search_state();
    state.query = query.to_string();
    state.submit(&engine);

    for _ in 1..pages {
        if !state.load_more() {
            break;
        }
    }

    if output == OutputFormat::Json {
        println!(
            "{}",
            serde_json::json!({
                "query": state.query,
                "warning": state.warning.map(|w| w.message()),
                "total": state.results.len(),
                "showing": state.visible().len(),
                "remaining": state.remaining(),
                "results": state.visible(),
            })
        );
        return Ok(());
    }

    if let Some(warning) = state.warning {
        println!("{} {}", style("!").yellow().bold(), style(warning).yellow());
        return Ok(());
    }

    if let Some(summary) = state.summary() {
        println!("{} {}", style("→").cyan().bold(), style(summary).bold());
    }
    println!();
    print_table(state.visible());

    if state.has_more() {
        println!();
        println!(
            "  {}",
            style(format!(
                "{} more result(s), use --pages {} to see them",
                state.remaining(),
                pages.max(1) + 1
            ))
            .dim()
        );
    }

    Ok(())
}

/// List command implementation
fn cmd_list(config: &AppConfig, output: OutputFormat) -> calorie_counter::Result<()> {
    let engine = config.engine();
    let records = engine.catalog().records();

    if output == OutputFormat::Json {
        println!("{}", serde_json::json!(records));
        return Ok(());
    }

    println!(
        "{} {} foods in catalog",
        style("→").cyan().bold(),
        style(records.len()).green()
    );
    println!();
    print_table(records);

    Ok(())
}

/// Words command implementation
fn cmd_words(config: &AppConfig, output: OutputFormat) -> calorie_counter::Result<()> {
    let engine = config.engine();
    let index = engine.index();
    let tokens = index.tokens();

    if output == OutputFormat::Json {
        let entries: Vec<serde_json::Value> = tokens
            .iter()
            .map(|token| {
                let bucket = index.get(token);
                serde_json::json!({
                    "token": token,
                    "count": bucket.len(),
                    "ids": bucket.iter().map(|r| r.id).collect::<Vec<_>>(),
                })
            })
            .collect();
        println!("{}", serde_json::Value::Array(entries));
        return Ok(());
    }

    println!(
        "{} {} distinct words",
        style("→").cyan().bold(),
        style(index.len()).green()
    );
    println!();

    let width = tokens.iter().map(|t| t.width()).max().unwrap_or(0);
    for token in tokens {
        let bucket = index.get(token);
        let ids = bucket
            .iter()
            .map(|r| r.id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        println!(
            "  {} {} {}",
            style(pad_to_width(token, width, false)).cyan(),
            style(format!("{:>3}", bucket.len())).yellow(),
            style(format!("[{}]", ids)).dim()
        );
    }

    Ok(())
}

fn print_table(records: &[calorie_counter::FoodRecord]) {
    let mut lines = format_table(records).into_iter();
    if let Some(header) = lines.next() {
        println!("  {}", style(header).bold().underlined());
    }
    for line in lines {
        println!("  {}", line);
    }
}
