use crate::expr::Expr;
use crate::viewport::CoordinateMapper;
use std::collections::HashMap;

/// One continuous, drawable run of connected device-space points.
///
/// Distinct polylines represent branches of the curve separated by a
/// discontinuity, an undefined region or an off-screen excursion.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    /// Device coordinates, in increasing-x order
    pub points: Vec<(f64, f64)>,
}

/// Tuning knobs for curve sampling.
///
/// The defaults sample at twice the pixel width and keep points within a
/// 100 px band past the canvas edges, so steep near-asymptote segments stay
/// connected while genuinely off-screen excursions break the curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleOptions {
    /// Samples taken per pixel of canvas width
    pub oversampling: u32,
    /// Vertical slack past the canvas edges, in pixels, inside which
    /// out-of-range points still extend the current polyline
    pub margin: f64,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            oversampling: 2,
            margin: 100.0,
        }
    }
}

/// Sample `expr` as a function of `x` across the mapper's viewport, producing
/// device-space polylines split at discontinuities.
///
/// The expression is evaluated at `oversampling × width` evenly spaced x
/// values from the left edge of the viewport up to (excluding) the right
/// edge. A sample that fails to evaluate, evaluates to a non-finite number,
/// or maps further than `margin` pixels above or below the canvas terminates
/// the current polyline; the next valid sample starts a new one. Runs shorter
/// than two points are not drawable and are discarded.
///
/// If every sample fails the result is simply empty; it is the caller's job
/// to decide whether that warrants an error message.
pub fn sample(expr: &Expr, mapper: &CoordinateMapper, options: &SampleOptions) -> Vec<Polyline> {
    let viewport = *mapper.viewport();
    let count = (f64::from(options.oversampling) * mapper.width()) as usize;

    let mut polylines = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();
    let mut bindings: HashMap<String, f64> = HashMap::with_capacity(1);
    bindings.insert("x".to_string(), 0.0);

    for i in 0..count {
        let x = viewport.x_min + (i as f64 / count as f64) * viewport.x_range();
        if let Some(slot) = bindings.get_mut("x") {
            *slot = x;
        }

        let y = match expr.eval(&bindings) {
            Ok(y) if y.is_finite() => y,
            _ => {
                flush(&mut polylines, &mut current);
                continue;
            }
        };

        let (px, py) = mapper.to_device(x, y);
        if py < -options.margin || py > mapper.height() + options.margin {
            flush(&mut polylines, &mut current);
            continue;
        }
        current.push((px, py));
    }
    flush(&mut polylines, &mut current);
    polylines
}

/// Close the current run, keeping it only when it is drawable
fn flush(polylines: &mut Vec<Polyline>, current: &mut Vec<(f64, f64)>) {
    if current.len() > 1 {
        polylines.push(Polyline {
            points: std::mem::take(current),
        });
    } else {
        current.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{sample, SampleOptions};
    use crate::expr::Expr;
    use crate::viewport::{CoordinateMapper, Viewport};

    fn run(expression: &str) -> Vec<super::Polyline> {
        let expr = Expr::parse(expression).unwrap();
        let mapper = CoordinateMapper::new(Viewport::default(), 800, 600).unwrap();
        sample(&expr, &mapper, &SampleOptions::default())
    }

    #[test]
    fn straight_line_is_one_polyline() {
        let polylines = run("x");
        assert_eq!(polylines.len(), 1);
        assert_eq!(polylines[0].points.len(), 1600);
    }

    #[test]
    fn parabola_is_one_polyline() {
        // y runs far above the viewport near the edges; the visible arc stays
        // in one piece
        let polylines = run("x^2");
        assert_eq!(polylines.len(), 1);
    }

    #[test]
    fn tangent_splits_at_asymptotes() {
        let polylines = run("tan(x)");
        assert!(
            polylines.len() >= 2,
            "expected disjoint branches, got {}",
            polylines.len()
        );
    }

    #[test]
    fn reciprocal_splits_at_pole() {
        let polylines = run("1/x");
        assert!(polylines.len() >= 2);
    }

    #[test]
    fn undefined_region_is_skipped() {
        // sqrt is NaN for x < 0, so only the right half of the domain plots
        let polylines = run("sqrt(x)");
        assert_eq!(polylines.len(), 1);
        let first_x = polylines[0].points[0].0;
        assert!(first_x >= 400.0 - 1.0);
    }

    #[test]
    fn points_are_in_increasing_x_order() {
        for polyline in run("sin(x)") {
            for pair in polyline.points.windows(2) {
                assert!(pair[0].0 < pair[1].0);
            }
        }
    }

    #[test]
    fn unbound_variable_yields_nothing() {
        assert!(run("q + 1").is_empty());
    }

    #[test]
    fn margin_is_respected() {
        let expr = Expr::parse("x^2").unwrap();
        let mapper = CoordinateMapper::new(Viewport::default(), 800, 600).unwrap();
        let wide = SampleOptions {
            margin: 1e9,
            ..SampleOptions::default()
        };
        // With an effectively unlimited band nothing ever leaves it
        assert_eq!(sample(&expr, &mapper, &wide).len(), 1);
        let polylines = sample(&expr, &mapper, &wide);
        assert_eq!(polylines[0].points.len(), 1600);
    }
}
