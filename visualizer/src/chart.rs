use log::debug;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;

use crate::theme::Theme;
use crate::turn_log::{TurnLog, BAR_WIDTH};

pub const FIRST_PLAYER_LABEL: &str = "First player cards";
pub const SECOND_PLAYER_LABEL: &str = "Second player cards";
pub const X_DESC: &str = "Turns";
pub const Y_DESC: &str = "Number of cards";

/// Bottom-left and top-right corner of a bar segment.
pub type Segment = [(f64, f64); 2];

/// Headroom above the tallest bar.
const Y_MARGIN: f64 = 1.05;

/// Axis ranges of a chart, independent of any drawing backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
}

impl ChartLayout {
    pub fn of(log: &TurnLog) -> Self {
        let half = BAR_WIDTH / 2.0;
        let y_top = (log.max_total() as f64 * Y_MARGIN).max(1.0);
        ChartLayout {
            x_range: -half..(log.turns() as f64 - half),
            y_range: 0.0..y_top,
        }
    }
}

/// Only whole numbers get a tick label, turns and cards are never fractional.
fn integer_label(value: &f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        String::new()
    }
}

/// Corners of the rectangles drawn for every turn, in chart coordinates:
/// the first player's base segments and the second player's segments
/// stacked on top of them.
pub fn segments(log: &TurnLog) -> (Vec<Segment>, Vec<Segment>) {
    log.bars()
        .iter()
        .map(|bar| {
            let (base_bottom, base_top) = bar.base_segment();
            let (top_bottom, top_top) = bar.top_segment();
            (
                [(bar.left(), base_bottom as f64), (bar.right(), base_top as f64)],
                [(bar.left(), top_bottom as f64), (bar.right(), top_top as f64)],
            )
        })
        .unzip()
}

/// Draws the stacked bar chart of `log` on `root`: the first player's cards
/// at the bottom of every bar, the second player's cards on top.
pub fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    log: &TurnLog,
    theme: &Theme,
) -> anyhow::Result<()>
where
    DB::ErrorType: 'static,
{
    let layout = ChartLayout::of(log);
    debug!("Drawing {} turns with layout {:?}", log.turns(), layout);

    // Background color
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(root);

    chart
        .caption(log.title(), ("sans-serif", 24).into_font())
        .margin(20)
        .set_left_and_bottom_label_area_size(45);

    let mut chart_context = chart.build_cartesian_2d(layout.x_range, layout.y_range)?;

    chart_context
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(X_DESC)
        .y_desc(Y_DESC)
        .x_label_formatter(&integer_label)
        .y_label_formatter(&integer_label)
        .draw()?;

    let (base, top) = segments(log);
    let first = theme.first;
    let second = theme.second;

    chart_context
        .draw_series(
            base.into_iter()
                .map(|corners| Rectangle::new(corners, first.filled())),
        )?
        .label(FIRST_PLAYER_LABEL)
        .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], first.filled()));

    chart_context
        .draw_series(
            top.into_iter()
                .map(|corners| Rectangle::new(corners, second.filled())),
        )?
        .label(SECOND_PLAYER_LABEL)
        .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], second.filled()));

    chart_context
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeName;

    #[test]
    fn test_layout() {
        let log = TurnLog::new(vec![26, 25], vec![26, 27]).unwrap();
        let layout = ChartLayout::of(&log);
        assert_eq!(-0.5..1.5, layout.x_range, "Every turn gets a full bar width");
        assert_eq!(0.0, layout.y_range.start);
        assert!(layout.y_range.end >= 52.0, "The tallest bar must fit");
    }

    #[test]
    fn test_layout_of_empty_hands() {
        let log = TurnLog::new(vec![0], vec![0]).unwrap();
        assert_eq!(0.0..1.0, ChartLayout::of(&log).y_range);
    }

    #[test]
    fn test_segments_are_stacked() {
        let log = TurnLog::new(vec![26, 25], vec![26, 27]).unwrap();
        let (base, top) = segments(&log);

        assert_eq!(
            vec![[(-0.5, 0.0), (0.5, 26.0)], [(0.5, 0.0), (1.5, 25.0)]],
            base,
            "The first player's cards form the base of every bar"
        );
        assert_eq!(
            vec![[(-0.5, 26.0), (0.5, 52.0)], [(0.5, 25.0), (1.5, 52.0)]],
            top,
            "The second player's cards start where the base ends"
        );

        let layout = ChartLayout::of(&log);
        for [(left, bottom), (right, upper)] in base.iter().chain(top.iter()) {
            assert!(layout.x_range.start <= *left && *right <= layout.x_range.end);
            assert!(layout.y_range.start <= *bottom && *upper <= layout.y_range.end);
        }
    }

    #[test]
    fn test_segments_of_a_finished_game() {
        // The second player has lost all cards on the last turn
        let log = TurnLog::new(vec![50, 54], vec![4, 0]).unwrap();
        let (base, top) = segments(&log);
        assert_eq!(2, base.len(), "One base segment per turn");
        assert_eq!([(0.5, 0.0), (1.5, 54.0)], base[1]);
        assert_eq!(
            [(0.5, 54.0), (1.5, 54.0)],
            top[1],
            "An empty hand is a segment without height"
        );
    }

    #[test]
    fn test_integer_label() {
        assert_eq!("3", integer_label(&3.0));
        assert_eq!("", integer_label(&2.5));
    }

    #[test]
    #[ignore = "needs system fonts for the caption and labels"]
    fn test_draw_chart_to_svg() {
        let log = TurnLog::new(vec![26, 25], vec![26, 27]).unwrap();

        let render = |theme: Theme| {
            let mut svg = String::new();
            {
                let root = SVGBackend::with_string(&mut svg, (640, 480)).into_drawing_area();
                draw_chart(&root, &log, &theme).unwrap();
                root.present().unwrap();
            }
            svg
        };

        let classic = render(Theme::named(ThemeName::Classic));
        let swapped = render(Theme::named(ThemeName::Swapped));
        assert!(classic.contains("War game - 2 turns"));
        assert!(classic.contains(FIRST_PLAYER_LABEL));
        assert!(classic.contains(SECOND_PLAYER_LABEL));
        assert_eq!(
            classic.matches("<rect").count(),
            swapped.matches("<rect").count(),
            "Themes must not change the geometry"
        );
    }
}
