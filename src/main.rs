//! Discolor - tag text with Discord ANSI colors.
//!
//! # Usage
//!
//! ```bash
//! discolor "Hello world"
//! discolor --tag world=red --print "Hello world"
//! echo "some text" | discolor --tag text=bold --print
//! ```

use std::fs::File;
use std::io::{IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;

use discolor::app::{App, DEFAULT_TEXT};
use discolor::config::{
    ConfigFlags, PaletteMode, clear_config_flags, global_config_path, load_config_flags,
    local_override_path, parse_flag_tokens, save_config_flags,
};
use discolor::markup::StyleCode;
use discolor::session::Session;

/// Tag text with Discord ANSI colors and get the Discord markdown
#[derive(Parser, Debug)]
#[command(name = "discolor", version, about, long_about = None)]
struct Cli {
    /// Text to style (defaults to --file, then stdin, then a welcome message)
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Read the text from a file
    #[arg(short, long, value_name = "PATH", conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Style the first occurrence of SELECTION (repeatable, applied in order)
    #[arg(short, long = "tag", value_name = "SELECTION=STYLE", value_parser = parse_tag)]
    tags: Vec<Tag>,

    /// Print the Discord markdown and exit
    #[arg(long, conflicts_with = "plain")]
    print: bool,

    /// Print the text without markup and exit
    #[arg(long)]
    plain: bool,

    /// Start with the Discord markdown pane hidden
    #[arg(long)]
    hide_markdown: bool,

    /// Start with the preview focused
    #[arg(long)]
    focus_preview: bool,

    /// Preview colors
    #[arg(long, value_enum)]
    palette: Option<PaletteMode>,

    /// Write logs to a file instead of stderr
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

#[derive(Debug, Clone)]
struct Tag {
    selection: String,
    code: StyleCode,
}

fn parse_tag(s: &str) -> Result<Tag> {
    let (selection, style) = s
        .rsplit_once('=')
        .context("expected SELECTION=STYLE, e.g. world=red")?;
    let code = style.parse::<StyleCode>()?;
    Ok(Tag {
        selection: selection.to_string(),
        code,
    })
}

/// Install the tracing subscriber.
///
/// Without a log file, events go to stderr for one-shot output and are
/// discarded while the TUI owns the terminal.
fn init_logging(log_file: Option<&Path>, interactive: bool) -> Result<()> {
    let Some(path) = log_file else {
        let builder = tracing_subscriber::fmt().with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        );
        if interactive {
            builder.with_writer(std::io::sink).init();
        } else {
            builder.with_writer(std::io::stderr).init();
        }
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::DEBUG.into()),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

fn read_initial_text(cli: &Cli) -> Result<String> {
    if let Some(text) = &cli.text {
        return Ok(text.clone());
    }
    if let Some(path) = &cli.file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        return Ok(strip_trailing_newline(text));
    }
    let mut stdin = std::io::stdin();
    if !stdin.is_terminal() {
        let mut text = String::new();
        stdin
            .read_to_string(&mut text)
            .context("Failed to read stdin")?;
        return Ok(strip_trailing_newline(text));
    }
    Ok(DEFAULT_TEXT.to_string())
}

fn main() -> Result<()> {
    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    let interactive = !(cli.print || cli.plain);
    init_logging(effective.log_file.as_deref(), interactive)?;

    let mut session = Session::new(read_initial_text(&cli)?);
    let mut skipped = Vec::new();
    for tag in &cli.tags {
        if !session.apply_style(&tag.selection, tag.code) {
            tracing::warn!(
                selection = %tag.selection,
                code = %tag.code,
                "selection not found, tag skipped"
            );
            skipped.push(tag.selection.as_str());
        }
    }

    if !interactive {
        let output = if cli.print {
            session.discord_markdown()
        } else {
            session.plain_text()
        };
        let mut out = std::io::stdout().lock();
        writeln!(out, "{output}").context("Failed to write output")?;
        return Ok(());
    }

    let mut app = App::new(session.source_text())
        .with_session(session)
        .with_startup_notice((!skipped.is_empty()).then(|| {
            format!("Tag selection not found: {}", skipped.join(", "))
        }))
        .with_focus_preview(effective.focus_preview)
        .with_markdown_visible(!effective.hide_markdown)
        .with_palette_mode(effective.palette.unwrap_or_default())
        .with_config_paths(
            Some(global_path.clone()),
            if local_path.exists() {
                Some(local_path.clone())
            } else {
                None
            },
        );

    app.run().context("Application error")
}
