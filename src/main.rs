//! This is a CLI tool to chart the card counts of a game of War using the
//! *visualizer* library.
//!
//! # Usage
//!
//! To see its features, execute `$ war-chart --help`.
//!
//! # Examples
//!
//! *Open the chart of a game log in a window*
//! ```shell
//! $ war-chart game.csv
//! ```
//!
//! *Save the chart with the swapped theme and a custom color for the second player*
//! ```shell
//! $ war-chart game.csv -t swapped --second-color '#2e7d32' -o war.svg
//! ```

use anyhow::{bail, Context};
use clap::Parser;
use env_logger::Env;
use log::{debug, warn};
use std::path::PathBuf;
use visualizer::export::{save_chart, IMAGE_SIZE};
use visualizer::theme::{parse_hex_color, Theme, ThemeName};
use visualizer::turn_reader::{self, ColumnNames, FIRST_PLAYER_COLUMN, SECOND_PLAYER_COLUMN};
use visualizer::visualizer::render_plot;

/// Possible arguments for the executable.
#[derive(Debug, Parser)]
#[clap(about, author, version)]
pub struct Args {
    /// Path of the CSV game log, one row per turn.
    pub input: PathBuf,
    /// Color theme of the bars.
    /// Available themes: classic, swapped, material.
    #[arg(short, long, default_value = "classic")]
    pub theme: String,
    /// Color of the first player's bars as #rrggbb, replaces the theme color.
    #[arg(long)]
    pub first_color: Option<String>,
    /// Color of the second player's bars as #rrggbb, replaces the theme color.
    #[arg(long)]
    pub second_color: Option<String>,
    /// Column with the first player's number of cards.
    #[arg(long, default_value = FIRST_PLAYER_COLUMN)]
    pub first_column: String,
    /// Column with the second player's number of cards.
    #[arg(long, default_value = SECOND_PLAYER_COLUMN)]
    pub second_column: String,
    /// Save the chart to this file (.svg, .png, .bmp, .jpg) or directory
    /// instead of opening a window.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// The log level of the application.
    #[arg(short, long, default_value = "error")]
    pub log_level: String,
}

/// Builds the [`Theme`] from the theme name and the optional color overrides.
fn resolve_theme(
    name: &str,
    first_color: Option<&str>,
    second_color: Option<&str>,
) -> anyhow::Result<Theme> {
    let Some(theme_name) = ThemeName::from_name(name) else {
        bail!(
            "No theme called '{}' available. Try classic, swapped, or material.",
            name
        );
    };

    let mut theme = Theme::named(theme_name);
    if let Some(color) = first_color {
        warn!("First player color {} replaces the {} theme color", color, theme_name.name());
        theme = theme.with_first(parse_hex_color(color).context("Invalid --first-color")?);
    }
    if let Some(color) = second_color {
        warn!("Second player color {} replaces the {} theme color", color, theme_name.name());
        theme = theme.with_second(parse_hex_color(color).context("Invalid --second-color")?);
    }
    Ok(theme)
}

/// Main endpoint for the executable.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Init logger
    let env = Env::default().filter_or("WAR_CHART_LOG", args.log_level.as_str());
    let _ = env_logger::try_init_from_env(env);

    let theme = resolve_theme(
        &args.theme,
        args.first_color.as_deref(),
        args.second_color.as_deref(),
    )?;

    let columns = ColumnNames {
        first: args.first_column,
        second: args.second_column,
    };
    let log = turn_reader::read(&args.input, &columns)?;
    match log.constant_total() {
        Some(total) => debug!("{} cards in play on every turn", total),
        None => debug!("Cards in play vary between turns, at most {}", log.max_total()),
    }

    if let Some(output) = args.output {
        let path = save_chart(&output, &log, &theme, IMAGE_SIZE)?;
        println!("Chart saved to {}", path.display());
        Ok(())
    } else {
        render_plot(log, theme)
    }
}
