//! Command-line interface: argument parsing and command dispatch.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use pianolabs_page::{SiteConfig, Stylesheet, render_landing_page};
use tracing::info;

use crate::config::load_config;
use crate::site::{Manifest, build_site};

/// Stylesheet file written by `build --css linked`.
pub const LINKED_CSS_FILE: &str = "styles.css";

#[derive(Parser, Debug)]
#[command(name = "pianolabs")]
#[command(about = "Render the PianoLabs landing page to static HTML")]
#[command(version)]
pub struct Args {
    /// Site config file (default: ./pianolabs.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// URL prefix for step images, overrides the config file
    #[arg(long, global = true)]
    pub image_base: Option<String>,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(
        long,
        global = true,
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error", "off"]
    )]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write index.html (and styles.css when linked) to the output directory
    Build {
        /// Output directory
        #[arg(long, default_value = "dist")]
        out: PathBuf,

        /// Stylesheet delivery, overrides the config file
        #[arg(long, value_enum)]
        css: Option<CssMode>,

        /// Directory the site's static files are served from; step images are checked against it
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },

    /// Print the rendered document to stdout
    Render,

    /// Print the page content as JSON
    Manifest,
}

/// `--css` values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CssMode {
    /// Embed CSS in the document head
    Inline,
    /// Write styles.css and link it
    Linked,
}

impl Args {
    /// Config file merged with command-line overrides.
    pub fn site_config(&self) -> Result<SiteConfig> {
        let cwd = std::env::current_dir().context("cannot determine working directory")?;
        let mut config = load_config(self.config.as_deref(), &cwd)?;

        if let Some(image_base) = &self.image_base {
            config.image_base = image_base.clone();
        }
        if let Command::Build { css: Some(mode), .. } = &self.command {
            config.stylesheet = match mode {
                CssMode::Inline => Stylesheet::Inline,
                CssMode::Linked => Stylesheet::Linked {
                    href: LINKED_CSS_FILE.to_string(),
                },
            };
        }

        Ok(config)
    }
}

/// Run the parsed command.
pub fn run(args: &Args) -> Result<()> {
    let config = args.site_config()?;

    match &args.command {
        Command::Build {
            out, static_dir, ..
        } => {
            let report = build_site(&config, out, static_dir.as_deref())?;
            if !report.missing_assets.is_empty() {
                info!(
                    missing = report.missing_assets.len(),
                    "build finished with missing step images"
                );
            }
        }
        Command::Render => {
            let html = render_landing_page(&config);
            write_stdout(&html)?;
        }
        Command::Manifest => {
            let json = Manifest::new(&config).to_json()?;
            write_stdout(&json)?;
        }
    }

    Ok(())
}

fn write_stdout(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{text}").context("failed to write to stdout")?;
    stdout.flush().context("failed to flush stdout")?;
    Ok(())
}
