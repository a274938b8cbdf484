use std::path::PathBuf;

use clap::Parser;
use govuk_form_builder::Config;
use tracing::instrument;

use super::{collect_documents, render_document, terminal::Colorize};

#[derive(Debug, Parser)]
#[command(about = "Check that form documents load and render")]
pub struct Check {
    /// Form documents, or directories containing them
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Only report failures
    #[arg(long, short)]
    quiet: bool,
}

impl Check {
    #[instrument(level = "debug", skip(self, config))]
    pub fn run(self, config: &Config) -> anyhow::Result<()> {
        let documents = collect_documents(&self.paths)?;

        let failures = self.check_all(&documents, config);

        if !self.quiet {
            let summary = format!("{} checked, {} failed", documents.len(), failures);
            println!("{}", summary.dim());
        }

        if failures > 0 {
            anyhow::bail!("{failures} form document(s) failed to render");
        }
        Ok(())
    }

    fn check_all(&self, documents: &[PathBuf], config: &Config) -> usize {
        let mut failures = 0;

        for path in documents {
            match render_document(path, config) {
                Ok(_) => {
                    if !self.quiet {
                        println!("{} {}", "ok".passed(), path.display());
                    }
                }
                Err(error) => {
                    failures += 1;
                    println!("{} {}: {error:#}", "error".failed(), path.display());
                }
            }
        }

        failures
    }
}
