//! CLI argument definitions.

use anyhow::{Context, Result};
use clap::Parser;

/// Multi-agent system generator
///
/// Turns natural-language requirements into a generated Python demo system:
/// a planning agent designs the modules, then code, front-end, and test
/// agents generate the files into the output directory.
#[derive(Parser, Debug, Clone)]
#[command(name = "devcrew")]
#[command(about = "Multi-agent system generator")]
#[command(version)]
pub struct Args {
    /// Requirements text for the system to generate
    #[arg(long, value_name = "TEXT")]
    pub requirements: Option<String>,

    /// Path to a file containing the requirements
    #[arg(long, value_name = "PATH")]
    pub requirements_file: Option<String>,

    /// Output directory for generated files
    #[arg(long, value_name = "DIR", default_value = "output")]
    pub output_dir: String,

    /// Serve the web interface instead of running one generation
    #[arg(long)]
    pub serve: bool,

    /// Port for the web interface
    #[arg(long, value_name = "PORT", default_value_t = 7860)]
    pub port: u16,

    /// Bind on all interfaces so the web link can be shared on the network
    ///
    /// Also enabled by setting SHARE=1 in the environment.
    #[arg(long)]
    pub share: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Validate the argument combination for the selected mode
    pub fn validate(&self) -> Result<()> {
        if self.serve {
            return Ok(());
        }
        if self.requirements.is_none() && self.requirements_file.is_none() {
            anyhow::bail!(
                "Provide --requirements or --requirements-file, or start the web UI with --serve"
            );
        }
        Ok(())
    }

    /// Load the requirements text from the argument or the file
    pub fn load_requirements(&self) -> Result<String> {
        if let Some(text) = &self.requirements {
            return Ok(text.clone());
        }
        let path = self
            .requirements_file
            .as_ref()
            .context("No requirements provided")?;
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read requirements from {}", path))
    }

    /// Whether the web UI should be exposed beyond localhost
    pub fn share_enabled(&self) -> bool {
        if self.share {
            return true;
        }
        matches!(
            std::env::var("SHARE").unwrap_or_default().to_lowercase().as_str(),
            "1" | "true" | "yes"
        )
    }
}
