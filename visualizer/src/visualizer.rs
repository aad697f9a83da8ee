use anyhow::anyhow;
use druid::{AppLauncher, Widget, WindowDesc};
use log::{error, info};
use plotters_druid::Plot;

use crate::chart::draw_chart;
use crate::theme::Theme;
use crate::turn_log::TurnLog;

pub const WINDOW_SIZE: (f64, f64) = (1280.0, 900.0);

/// Opens the chart of `log` in a window and blocks until it is closed.
pub fn render_plot(log: TurnLog, theme: Theme) -> anyhow::Result<()> {
    let title = log.title();
    info!("Opening window '{}'", title);

    let main_window = WindowDesc::new(move || chart_builder(log, theme))
        .title(title)
        .window_size(WINDOW_SIZE)
        .resizable(true);

    AppLauncher::with_window(main_window)
        .launch(())
        .map_err(|e| anyhow!("Could not launch the chart window: {}", e))
}

fn chart_builder(log: TurnLog, theme: Theme) -> impl Widget<()> {
    // The widget repaints on every resize, errors can only be logged here
    Plot::new(move |_size, _data, root| {
        if let Err(e) = draw_chart(root, &log, &theme) {
            error!("Could not draw the chart: {:#}", e);
        }
    })
}
