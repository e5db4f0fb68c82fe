use crate::error::Error;
use crate::expr::Expr;
use crate::grid::{compute_grid, GridGeometry};
use crate::sampler::{sample, Polyline, SampleOptions};
use crate::viewport::{CoordinateMapper, Viewport};

/// Canvas dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

/// Tuning for a render pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Number of grid divisions along each canvas edge
    pub divisions: u32,
    /// Curve sampling parameters
    pub samples: SampleOptions,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            divisions: 10,
            samples: SampleOptions::default(),
        }
    }
}

/// Everything a drawing layer needs for one frame.
///
/// `error_message` reports an invalid expression; the grid and axes are still
/// present so the caller can draw an empty plot behind the message.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutput {
    /// The curve, split into continuous visible arcs
    pub polylines: Vec<Polyline>,
    /// Grid lines, axis lines and tick labels
    pub grid: GridGeometry,
    /// Why the curve is missing, when it is
    pub error_message: Option<String>,
}

/// Render `expression` as a function of `x` over `viewport`, with default
/// options.
///
/// This is one full synchronous pass; nothing is cached between calls. The
/// only hard failure is a degenerate viewport. An expression that cannot be
/// parsed or references unknown names completes the render with an empty
/// curve and `error_message` set.
///
/// # Examples
///
/// ```
/// # use curvecalc::{render, CanvasSize, Viewport};
/// let canvas = CanvasSize { width: 800, height: 600 };
/// let frame = render("sin(x)", &Viewport::default(), canvas).unwrap();
/// assert!(frame.error_message.is_none());
/// assert!(!frame.polylines.is_empty());
///
/// let frame = render("sin(", &Viewport::default(), canvas).unwrap();
/// assert!(frame.error_message.is_some());
/// assert!(frame.polylines.is_empty());
/// ```
pub fn render(
    expression: &str,
    viewport: &Viewport,
    canvas: CanvasSize,
) -> Result<RenderOutput, Error> {
    render_with(expression, viewport, canvas, &RenderOptions::default())
}

/// Render `expression` over `viewport` with explicit options.
pub fn render_with(
    expression: &str,
    viewport: &Viewport,
    canvas: CanvasSize,
    options: &RenderOptions,
) -> Result<RenderOutput, Error> {
    let mapper = CoordinateMapper::new(*viewport, canvas.width, canvas.height)?;
    let grid = compute_grid(&mapper, options.divisions);

    let (polylines, error_message) = match Expr::parse(expression) {
        Err(err) => (Vec::new(), Some(err.to_string())),
        Ok(expr) => {
            let mut unbound: Vec<&str> = expr
                .variables()
                .into_iter()
                .filter(|name| *name != "x")
                .collect();
            if unbound.is_empty() {
                (sample(&expr, &mapper, &options.samples), None)
            } else {
                unbound.sort_unstable();
                let err = Error::NameError(format!("name '{}' is not defined", unbound[0]));
                (Vec::new(), Some(err.to_string()))
            }
        }
    };

    Ok(RenderOutput {
        polylines,
        grid,
        error_message,
    })
}

#[cfg(test)]
mod tests {
    use super::{render, render_with, CanvasSize, RenderOptions};
    use crate::sampler::SampleOptions;
    use crate::viewport::Viewport;
    use crate::Error;

    const CANVAS: CanvasSize = CanvasSize {
        width: 800,
        height: 600,
    };

    #[test]
    fn valid_expression() {
        let frame = render("x^2", &Viewport::default(), CANVAS).unwrap();
        assert!(frame.error_message.is_none());
        assert_eq!(frame.polylines.len(), 1);
        assert_eq!(frame.grid.verticals.len(), 11);
    }

    #[test]
    fn invalid_expression_still_renders_grid() {
        let frame = render("2 +* 3", &Viewport::default(), CANVAS).unwrap();
        assert!(frame.polylines.is_empty());
        assert!(frame.error_message.is_some());
        assert_eq!(frame.grid.verticals.len(), 11);
        assert_eq!(frame.grid.x_axis, Some(300.0));
    }

    #[test]
    fn unknown_name_is_reported_once() {
        let frame = render("x + q", &Viewport::default(), CANVAS).unwrap();
        assert!(frame.polylines.is_empty());
        assert_eq!(
            frame.error_message.as_deref(),
            Some("NameError: name 'q' is not defined")
        );
    }

    #[test]
    fn degenerate_viewport_fails() {
        let flat = Viewport::new(5.0, 5.0, -10.0, 10.0);
        match render("x", &flat, CANVAS) {
            Err(Error::DegenerateViewport(_)) => {}
            other => panic!("expected DegenerateViewport, got {:?}", other),
        }
    }

    #[test]
    fn options_are_honored() {
        let options = RenderOptions {
            divisions: 4,
            samples: SampleOptions {
                oversampling: 1,
                margin: 100.0,
            },
        };
        let frame = render_with("x", &Viewport::default(), CANVAS, &options).unwrap();
        assert_eq!(frame.grid.verticals.len(), 5);
        assert_eq!(frame.polylines[0].points.len(), 800);
    }
}
