use std::error::Error as StdError;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Local;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use log::{debug, info};

use cheatsheet::content::Topic;
use cheatsheet::{Assembler, Error, RenderedPdf};

/// Renders the built-in cheat sheets to PDF.
///
/// Fonts must be present under `assets/fonts` next to the binary or the `cheatsheet` crate, or
/// provided via the `CHEATSHEET_FONTS_DIR` environment variable.
#[derive(Parser)]
#[command(name = "cheatsheet", author, version, about = "Render reference cheat sheets to PDF")]
struct Cli {
    /// Print "Page N" at the bottom of every page.
    #[arg(long, global = true)]
    page_numbers: bool,

    /// Add an outline entry for every section.
    #[cfg(feature = "bookmarks")]
    #[arg(long, global = true)]
    bookmarks: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Git commands, grouped by workflow.
    Git(OutputArgs),

    /// Docker and Docker Compose commands.
    Docker(OutputArgs),

    /// Laravel commands with essential/advanced/new labels.
    Laravel(OutputArgs),

    /// Basic CSS properties next to their Tailwind classes.
    #[command(name = "css-basics", aliases = ["css_basics", "css"])]
    CssBasics(OutputArgs),

    /// Flexbox properties next to their Tailwind classes.
    Flexbox(OutputArgs),

    /// CSS Grid properties next to their Tailwind classes.
    Grid(OutputArgs),

    /// Render every topic into one directory.
    #[command(name = "all", aliases = ["run-all", "run_all"])]
    All {
        /// Directory to write into; created when missing.
        #[arg(short, long, value_name = "DIR", default_value = ".")]
        dir: PathBuf,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Output file; defaults to the topic's file name in the current directory.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let jobs = match jobs(&cli.command) {
        Ok(jobs) => jobs,
        Err(err) => fail(None, &err),
    };

    for (topic, path) in jobs {
        match render_topic(&cli, topic, &path) {
            Ok(rendered) => report(topic, &path, &rendered),
            Err(err) => fail(Some(topic), &err),
        }
    }
}

/// Resolves the command into the topics to render and their output paths.
fn jobs(command: &Commands) -> Result<Vec<(Topic, PathBuf)>, Error> {
    let single = |topic: Topic, args: &OutputArgs| -> Result<Vec<(Topic, PathBuf)>, Error> {
        let path = args
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(topic.default_file_name()));
        Ok(vec![(topic, path)])
    };

    match command {
        Commands::Git(args) => single(Topic::Git, args),
        Commands::Docker(args) => single(Topic::Docker, args),
        Commands::Laravel(args) => single(Topic::Laravel, args),
        Commands::CssBasics(args) => single(Topic::CssBasics, args),
        Commands::Flexbox(args) => single(Topic::Flexbox, args),
        Commands::Grid(args) => single(Topic::Grid, args),
        Commands::All { dir } => {
            fs::create_dir_all(dir).map_err(|source| Error::Io {
                path: dir.clone(),
                source,
            })?;
            debug!("Rendering {} topics into {}", Topic::all().len(), dir.display());
            Ok(Topic::all()
                .iter()
                .map(|&topic| (topic, dir.join(topic.default_file_name())))
                .collect())
        }
    }
}

fn render_topic(cli: &Cli, topic: Topic, path: &Path) -> Result<RenderedPdf, Error> {
    let assembler = Assembler::new(topic.style().with_page_numbers(cli.page_numbers));
    let document = topic.document();
    info!("Rendering {} to {}", topic, path.display());

    #[cfg(feature = "bookmarks")]
    if cli.bookmarks {
        let rendered = assembler.render_with_bookmarks(&document)?;
        fs::write(path, &rendered.bytes).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        return Ok(rendered);
    }

    assembler.render_to_path(&document, path)
}

fn report(topic: Topic, path: &Path, rendered: &RenderedPdf) {
    println!(
        "{} {} cheat sheet saved to {}",
        "\u{2713}".green().bold(),
        topic,
        path.display().to_string().cyan()
    );
    println!(
        "  {} bytes, {} page(s), created {}",
        rendered.bytes.len(),
        rendered.page_count,
        Local::now().format("%Y-%m-%d %H:%M:%S")
    );
}

/// Prints `err` with its cause chain and a remediation hint, then exits with status 1.
fn fail(topic: Option<Topic>, err: &Error) -> ! {
    match topic {
        Some(topic) => eprintln!(
            "{} rendering {} ({}): {}",
            "Error".red().bold(),
            topic,
            err.class(),
            err
        ),
        None => eprintln!("{} ({}): {}", "Error".red().bold(), err.class(), err),
    }
    print_error_sources(err);
    eprintln!("  {} {}", "hint:".yellow(), err.remediation_hint());
    std::process::exit(1);
}

fn print_error_sources(mut error: &(dyn StdError + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
