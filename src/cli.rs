use std::path::{Path, PathBuf};

mod check;
mod render;
mod terminal;

use anyhow::Context;
use check::Check;
use clap::ArgAction;
use govuk_form_builder::{document::Format, Config, FormDocument, Markup};
use render::Render;
use tracing::instrument;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a builder configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = match &self.config {
            Some(path) => Config::load(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => Config::default(),
        };

        self.command.run(&config)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Render form documents to HTML
    Render(Render),

    /// Validate form documents without writing any output
    Check(Check),

    /// Write a configuration file holding the default settings
    Init(Init),
}

impl Command {
    fn run(self, config: &Config) -> anyhow::Result<()> {
        match self {
            Self::Render(command) => command.run(config)?,
            Self::Check(command) => command.run(config)?,
            Self::Init(command) => command.run()?,
        }
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
pub struct Init {
    /// Where to write the configuration
    #[arg(default_value = "govuk-form.toml")]
    path: PathBuf,
}

impl Init {
    #[instrument(level = "debug", skip(self))]
    fn run(self) -> anyhow::Result<()> {
        if self.path.exists() {
            anyhow::bail!("{} already exists", self.path.display());
        }

        Config::default()
            .save(&self.path)
            .with_context(|| format!("failed to write {}", self.path.display()))?;

        println!("Wrote default configuration to {}", self.path.display());
        Ok(())
    }
}

/// Expands the given paths into form documents.
///
/// Files are taken as given. Directories are walked recursively and every
/// file with a recognised extension is collected, in path order.
fn collect_documents(paths: &[PathBuf]) -> anyhow::Result<Vec<PathBuf>> {
    let mut documents = Vec::new();

    for path in paths {
        if !path.is_dir() {
            documents.push(path.clone());
            continue;
        }

        for entry in walkdir::WalkDir::new(path).sort_by_file_name() {
            let entry = entry?;
            if entry.file_type().is_file() && Format::from_path(entry.path()).is_some() {
                documents.push(entry.into_path());
            }
        }
    }

    tracing::debug!(count = documents.len(), "collected form documents");
    Ok(documents)
}

fn render_document(path: &Path, config: &Config) -> anyhow::Result<Markup> {
    let document = FormDocument::load(path)?;
    document
        .render(config)
        .with_context(|| format!("failed to render {}", path.display()))
}
