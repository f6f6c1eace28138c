// SPDX-License-Identifier: MIT
//
// ds-tokens — inspect the design system's tokens from a terminal.
//
// This is the binary that wires the token crates to a command line:
//
//   ds-vars       → flat, ordered variable maps
//   ds-color      → palettes, semantic colors, gradients
//   ds-typography → font stacks, weights, type scales
//
// Each subcommand is a lookup followed by one render call:
//
//   argv → clap → Command → table lookup → report::* → stdout
//
// Logging goes to stderr and is off below `warn` unless raised with -v or
// the DS_TOKENS_LOG filter.

mod cli;
mod report;

use std::process;

use anyhow::Context;
use clap::Parser;
use ds_color::find_color;
use ds_typography::{responsive_style_to_presentation, style_to_presentation};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};

/// Environment variable holding a full tracing filter directive.
const LOG_ENV: &str = "DS_TOKENS_LOG";

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli.command) {
        Ok(out) => print!("{out}"),
        Err(e) => {
            eprintln!("ds-tokens: {e:#}");
            process::exit(1);
        }
    }
}

fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Execute one subcommand and return everything it prints.
fn run(command: Command) -> anyhow::Result<String> {
    tracing::info!(?command, "running");
    match command {
        Command::Colors { mode, output } => report::vars(
            ds_color::css_variables(mode),
            output.filter.as_ref(),
            output.format,
        ),
        Command::Palette { name, format } => {
            let palette = ds_color::palette(&name)
                .with_context(|| format!("unknown palette `{name}`"))?;
            report::palette(palette, format)
        }
        Command::Find { color } => Ok(report::matches(color, &find_color(color))),
        Command::Typography { device, output } => report::vars(
            ds_typography::css_variables(device),
            output.filter.as_ref(),
            output.format,
        ),
        Command::Scales => Ok(report::scales()),
        Command::Style { scale, name, mobile } => style(&scale, &name, mobile.as_deref()),
    }
}

fn style(scale_name: &str, name: &str, mobile: Option<&str>) -> anyhow::Result<String> {
    let scale = ds_typography::scale(scale_name)
        .with_context(|| format!("unknown scale `{scale_name}` (see `ds-tokens scales`)"))?;
    let style = scale
        .get(name)
        .with_context(|| format!("scale `{scale_name}` has no style `{name}`"))?;

    let json = match mobile {
        None => serde_json::to_string_pretty(&style_to_presentation(style))?,
        Some(mobile_name) => {
            let counterpart = scale
                .mobile_counterpart()
                .with_context(|| format!("scale `{scale_name}` has no mobile counterpart"))?;
            let mobile_style = counterpart.get(mobile_name).with_context(|| {
                format!("scale `{}` has no style `{mobile_name}`", counterpart.name())
            })?;
            serde_json::to_string_pretty(&responsive_style_to_presentation(style, mobile_style))?
        }
    };
    Ok(json + "\n")
}

// ─── Tests ──────────────────────────────────────────────────────────────────
