use crate::viewport::CoordinateMapper;

/// Vertical distance from the x axis line to its tick labels
const X_LABEL_OFFSET: f64 = 15.0;
/// When the x axis sits inside this band above the bottom edge, its labels
/// anchor to the bottom edge instead of below the axis
const X_LABEL_EDGE_BAND: f64 = 20.0;
/// Bottom-edge anchor for x labels
const X_LABEL_EDGE_INSET: f64 = 5.0;
/// Horizontal distance from the y axis line to its right-aligned tick labels
const Y_LABEL_OFFSET: f64 = 5.0;
/// When the y axis sits left of this column, its labels anchor to a fixed
/// left-edge column instead of beside the axis
const Y_LABEL_EDGE_BAND: f64 = 35.0;
/// Left-edge anchor column for y labels
const Y_LABEL_EDGE_INSET: f64 = 30.0;
/// Baseline nudge keeping y labels vertically centered on their grid line
const Y_LABEL_BASELINE: f64 = 4.0;
/// Tick values this close to zero (but not exactly zero) get no label, so
/// that rounding noise does not crowd the origin
const ZERO_LABEL_EPSILON: f64 = 0.01;

/// A tick label anchored in device space
#[derive(Debug, Clone, PartialEq)]
pub struct TickLabel {
    /// The labelled domain/range value
    pub value: f64,
    /// The value formatted for display, one decimal place
    pub text: String,
    /// Device x of the label anchor
    pub x: f64,
    /// Device y of the label anchor
    pub y: f64,
}

/// Static geometry of the plot background: grid lines, axis lines and tick
/// labels. Independent of the plotted expression.
#[derive(Debug, Clone, PartialEq)]
pub struct GridGeometry {
    /// Device x of each vertical grid line, left to right
    pub verticals: Vec<f64>,
    /// Device y of each horizontal grid line, top to bottom
    pub horizontals: Vec<f64>,
    /// Device y of the x axis line, when it crosses the canvas
    pub x_axis: Option<f64>,
    /// Device x of the y axis line, when it crosses the canvas
    pub y_axis: Option<f64>,
    /// Labels along the x direction
    pub x_labels: Vec<TickLabel>,
    /// Labels along the y direction
    pub y_labels: Vec<TickLabel>,
}

/// Compute the grid, axis and label geometry for one render pass.
///
/// Produces `divisions + 1` evenly spaced vertical and horizontal grid lines
/// spanning the canvas. An axis line is included only when its device
/// coordinate falls inside the canvas. Labels are placed at each grid
/// division, offset away from the axis they follow, falling back to a fixed
/// screen-edge anchor when the axis sits too close to that edge.
pub fn compute_grid(mapper: &CoordinateMapper, divisions: u32) -> GridGeometry {
    let divisions = divisions.max(1);
    let n = f64::from(divisions);
    let width = mapper.width();
    let height = mapper.height();
    let viewport = *mapper.viewport();

    let verticals: Vec<f64> = (0..=divisions).map(|i| width / n * f64::from(i)).collect();
    let horizontals: Vec<f64> = (0..=divisions).map(|i| height / n * f64::from(i)).collect();

    let (origin_x, origin_y) = mapper.to_device(0.0, 0.0);
    let x_axis = if origin_y >= 0.0 && origin_y <= height {
        Some(origin_y)
    } else {
        None
    };
    let y_axis = if origin_x >= 0.0 && origin_x <= width {
        Some(origin_x)
    } else {
        None
    };

    let x_label_y = if origin_y > height - X_LABEL_EDGE_BAND {
        height - X_LABEL_EDGE_INSET
    } else {
        origin_y + X_LABEL_OFFSET
    };
    let y_label_x = if origin_x > Y_LABEL_EDGE_BAND {
        origin_x - Y_LABEL_OFFSET
    } else {
        Y_LABEL_EDGE_INSET
    };

    let mut x_labels = Vec::with_capacity(verticals.len());
    let mut y_labels = Vec::with_capacity(horizontals.len());
    for i in 0..=divisions {
        let step = f64::from(i) / n;

        let value = viewport.x_min + viewport.x_range() * step;
        if value.abs() > ZERO_LABEL_EPSILON || value == 0.0 {
            x_labels.push(TickLabel {
                value,
                text: format!("{:.1}", value),
                x: width * step,
                y: x_label_y,
            });
        }

        let value = viewport.y_min + viewport.y_range() * step;
        if value.abs() > ZERO_LABEL_EPSILON || value == 0.0 {
            y_labels.push(TickLabel {
                value,
                text: format!("{:.1}", value),
                x: y_label_x,
                y: height - height * step + Y_LABEL_BASELINE,
            });
        }
    }

    GridGeometry {
        verticals,
        horizontals,
        x_axis,
        y_axis,
        x_labels,
        y_labels,
    }
}

#[cfg(test)]
mod tests {
    use super::compute_grid;
    use crate::viewport::{CoordinateMapper, Viewport};
    use test_case::test_case;

    fn grid(viewport: Viewport, divisions: u32) -> super::GridGeometry {
        let mapper = CoordinateMapper::new(viewport, 800, 600).unwrap();
        compute_grid(&mapper, divisions)
    }

    #[test_case(10 ; "ten divisions")]
    #[test_case(4 ; "four divisions")]
    #[test_case(1 ; "one division")]
    fn line_counts(divisions: u32) {
        let grid = grid(Viewport::default(), divisions);
        assert_eq!(grid.verticals.len(), divisions as usize + 1);
        assert_eq!(grid.horizontals.len(), divisions as usize + 1);
    }

    #[test]
    fn lines_are_evenly_spaced() {
        let grid = grid(Viewport::default(), 10);
        for pair in grid.verticals.windows(2) {
            assert!((pair[1] - pair[0] - 80.0).abs() < 1e-9);
        }
        for pair in grid.horizontals.windows(2) {
            assert!((pair[1] - pair[0] - 60.0).abs() < 1e-9);
        }
        assert_eq!(grid.verticals[0], 0.0);
        assert_eq!(*grid.verticals.last().unwrap(), 800.0);
    }

    #[test]
    fn axes_cross_centered_viewport() {
        let grid = grid(Viewport::default(), 10);
        assert_eq!(grid.x_axis, Some(300.0));
        assert_eq!(grid.y_axis, Some(400.0));
    }

    #[test]
    fn axes_absent_when_origin_is_off_screen() {
        let grid = grid(Viewport::new(1.0, 5.0, 2.0, 6.0), 10);
        assert_eq!(grid.x_axis, None);
        assert_eq!(grid.y_axis, None);
    }

    #[test]
    fn labels_use_one_decimal_place() {
        let grid = grid(Viewport::default(), 10);
        assert_eq!(grid.x_labels[0].text, "-10.0");
        assert_eq!(grid.x_labels.last().unwrap().text, "10.0");
        let zero = grid.x_labels.iter().find(|l| l.value == 0.0).unwrap();
        assert_eq!(zero.text, "0.0");
    }

    #[test]
    fn near_zero_labels_are_suppressed() {
        // 0.005 lands exactly on a division of [-0.02, 0.03] but is
        // indistinguishable from the origin on screen
        let grid = grid(Viewport::new(-0.02, 0.03, -10.0, 10.0), 10);
        assert!(grid.x_labels.iter().all(|l| l.value.abs() > 0.01 || l.value == 0.0));
        assert!(grid.x_labels.len() < 11);
    }

    #[test]
    fn labels_offset_from_centered_axes() {
        let grid = grid(Viewport::default(), 10);
        // x labels hang 15 px under the x axis, y labels sit 5 px left of the
        // y axis
        assert!(grid.x_labels.iter().all(|l| (l.y - 315.0).abs() < 1e-9));
        assert!(grid.y_labels.iter().all(|l| (l.x - 395.0).abs() < 1e-9));
    }

    #[test]
    fn labels_fall_back_to_screen_edges() {
        // Origin far below and far left of the viewport
        let grid = grid(Viewport::new(1.0, 5.0, 1.0, 5.0), 10);
        assert!(grid.x_labels.iter().all(|l| (l.y - 595.0).abs() < 1e-9));
        assert!(grid.y_labels.iter().all(|l| (l.x - 30.0).abs() < 1e-9));
    }
}
