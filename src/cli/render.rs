use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Parser;
use govuk_form_builder::Config;
use tracing::{info, instrument};

use super::{collect_documents, render_document};

#[derive(Debug, Parser)]
#[command(about = "Render form documents to HTML")]
pub struct Render {
    /// Form documents, or directories containing them
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Write one `.html` file per document into this directory instead of
    /// printing to stdout
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,
}

impl Render {
    #[instrument(level = "debug", skip(self, config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let documents = collect_documents(&self.paths)?;
        if documents.is_empty() {
            anyhow::bail!("no form documents found");
        }

        if let Some(dir) = &self.output_dir {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }

        let mut stdout = io::stdout().lock();
        for path in &documents {
            let markup = render_document(path, config)?;

            match &self.output_dir {
                Some(dir) => {
                    let target = dir.join(output_name(path));
                    fs::write(&target, markup.as_str())
                        .with_context(|| format!("failed to write {}", target.display()))?;
                    info!(source = %path.display(), target = %target.display(), "rendered form");
                }
                None => writeln!(stdout, "{markup}")?,
            }
        }

        Ok(())
    }
}

/// `forms/person.yaml` becomes `person.html`.
fn output_name(path: &Path) -> PathBuf {
    let mut name = PathBuf::from(path.file_stem().unwrap_or(path.as_os_str()));
    name.set_extension("html");
    name
}
