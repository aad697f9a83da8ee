//! Stacked bar charts of a two-player game of War.
//!
//! A game log is a CSV file with one row per turn and a column with the
//! number of cards each player holds:
//!
//! ```text
//! turn,red_player_cards,blue_player_cards
//! 0,26,26
//! 1,25,27
//! ```
//!
//! # Quick Start
//!
//! ```no_run
//! use visualizer::theme::Theme;
//! use visualizer::turn_reader::{read, ColumnNames};
//! use visualizer::visualizer::render_plot;
//!
//! let log = read("game.csv", &ColumnNames::default())?;
//! render_plot(log, Theme::default())?; // blocks until the window is closed
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! The same chart can be written to a file with [`export::save_chart`].
//!
//! # Available Themes
//!
//! | Name       | First player | Second player |
//! |------------|--------------|---------------|
//! | `classic`  | `#c0504e`    | `#558ed3`     |
//! | `swapped`  | `#558ed3`    | `#c0504e`     |
//! | `material` | `RED_400`    | `BLUE_400`    |

pub mod chart;
pub mod export;
pub mod theme;
pub mod turn_log;
pub mod turn_reader;
pub mod visualizer;
