// SPDX-License-Identifier: MIT
//
// Command-line surface of the ds-tokens inspector.
//
// Every subcommand is read-only: it looks a table up, flattens or formats
// it, and prints the result to stdout. Typed arguments (mode, device, hex
// color, filter regex) parse through their own `FromStr` impls, so a bad
// value is rejected by clap with the library's error message.

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use ds_color::{HexColor, Mode};
use ds_typography::Device;
use regex::Regex;

#[derive(Parser, Debug)]
#[command(name = "ds-tokens", version)]
#[command(about = "Inspect design tokens: palettes, semantic colors and type scales")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace). DS_TOKENS_LOG
    /// overrides this with a full filter directive.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the flattened color variables for a mode
    Colors {
        /// Color mode: light (everything) or dark (semantic overrides only)
        #[arg(long, default_value = "light")]
        mode: Mode,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the shades of one palette
    Palette {
        /// Palette name, e.g. `blue` or `cool-gray`
        name: String,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// List every palette shade and semantic role that resolves to a color
    Find {
        /// Color as #RGB or #RRGGBB
        color: HexColor,
    },

    /// Print the flattened typography variables for a device class
    Typography {
        /// Device class: desktop or mobile
        #[arg(long, default_value = "desktop")]
        device: Device,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List every type scale
    Scales,

    /// Print one style as a presentation object (JSON)
    Style {
        /// Scale name, e.g. `web-headline` (see `ds-tokens scales`)
        scale: String,

        /// Style name within the scale, e.g. `headline01`
        name: String,

        /// Add a responsive override from the scale's mobile counterpart
        #[arg(long, value_name = "NAME")]
        mobile: Option<String>,
    },
}

/// Output options shared by the variable-map commands.
#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Only print variables whose name matches this regex
    #[arg(long, value_name = "REGEX")]
    pub filter: Option<Regex>,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    /// Aligned `name  value` lines
    #[default]
    Text,
    /// A JSON object, in table order
    Json,
}

// ─── Tests ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("ds-tokens").chain(args.iter().copied()))
    }

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn colors_defaults() {
        let cli = parse(&["colors"]).unwrap();
        match cli.command {
            Command::Colors { mode, output } => {
                assert_eq!(mode, Mode::Light);
                assert_eq!(output.format, Format::Text);
                assert!(output.filter.is_none());
            }
            other => panic!("expected colors, got {other:?}"),
        }
    }

    #[test]
    fn colors_with_options() {
        let cli = parse(&["colors", "--mode", "dark", "--filter", "^text-", "--format", "json"])
            .unwrap();
        match cli.command {
            Command::Colors { mode, output } => {
                assert_eq!(mode, Mode::Dark);
                assert_eq!(output.format, Format::Json);
                assert!(output.filter.unwrap().is_match("text-primary"));
            }
            other => panic!("expected colors, got {other:?}"),
        }
    }

    #[test]
    fn bad_mode_is_rejected() {
        let err = parse(&["colors", "--mode", "dim"]).unwrap_err();
        assert!(err.to_string().contains("unknown color mode `dim`"));
    }

    #[test]
    fn bad_regex_is_rejected() {
        assert!(parse(&["typography", "--filter", "("]).is_err());
    }

    #[test]
    fn find_parses_hex() {
        let cli = parse(&["find", "#3a5cf3"]).unwrap();
        match cli.command {
            Command::Find { color } => assert_eq!(color.to_string(), "#3A5CF3"),
            other => panic!("expected find, got {other:?}"),
        }
        assert!(parse(&["find", "blue"]).is_err());
    }

    #[test]
    fn style_with_mobile() {
        let cli = parse(&["style", "web-headline", "headline01", "--mobile", "headline02"]).unwrap();
        match cli.command {
            Command::Style { scale, name, mobile } => {
                assert_eq!(scale, "web-headline");
                assert_eq!(name, "headline01");
                assert_eq!(mobile.as_deref(), Some("headline02"));
            }
            other => panic!("expected style, got {other:?}"),
        }
    }

    #[test]
    fn verbose_counts() {
        let cli = parse(&["-vv", "scales"]).unwrap();
        assert_eq!(cli.verbose, 2);
        let cli = parse(&["typography", "--device", "mobile", "-v"]).unwrap();
        assert_eq!(cli.verbose, 1);
    }
}
