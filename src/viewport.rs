use crate::error::Error;

/// The visible rectangular region of the plot, in mathematical units.
///
/// Both ranges are expected to have strictly positive width; a zero-width
/// range is rejected when a [`CoordinateMapper`](struct.CoordinateMapper.html)
/// is built from the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Left edge of the visible domain
    pub x_min: f64,
    /// Right edge of the visible domain
    pub x_max: f64,
    /// Bottom edge of the visible range
    pub y_min: f64,
    /// Top edge of the visible range
    pub y_max: f64,
}

impl Viewport {
    /// Create a viewport from its four edges
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Width of the visible domain
    pub fn x_range(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Height of the visible range
    pub fn y_range(&self) -> f64 {
        self.y_max - self.y_min
    }
}

impl Default for Viewport {
    /// The `[-10, 10] × [-10, 10]` rectangle
    fn default() -> Self {
        Self::new(-10.0, 10.0, -10.0, 10.0)
    }
}

/// Affine mapping between domain coordinates and device pixels for one
/// viewport and canvas size.
///
/// Device y grows downward, so the mapping inverts the y axis: `y_min` lands
/// on the bottom edge of the canvas.
///
/// # Examples
///
/// ```
/// # use curvecalc::{CoordinateMapper, Viewport};
/// let mapper = CoordinateMapper::new(Viewport::default(), 800, 600).unwrap();
/// assert_eq!(mapper.to_device(0.0, 0.0), (400.0, 300.0));
/// assert_eq!(mapper.to_domain(400.0, 300.0), (0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CoordinateMapper {
    viewport: Viewport,
    width: f64,
    height: f64,
}

impl CoordinateMapper {
    /// Build a mapper for `viewport` on a `width` × `height` pixel canvas.
    ///
    /// Fails with [`Error::DegenerateViewport`](enum.Error.html) when either
    /// axis range has zero or non-finite width, since such a viewport cannot
    /// be mapped without producing `NaN` coordinates.
    pub fn new(viewport: Viewport, width: u32, height: u32) -> Result<Self, Error> {
        if viewport.x_range() == 0.0 || !viewport.x_range().is_finite() {
            return Err(Error::DegenerateViewport(
                "x axis range has no width".into(),
            ));
        }
        if viewport.y_range() == 0.0 || !viewport.y_range().is_finite() {
            return Err(Error::DegenerateViewport(
                "y axis range has no width".into(),
            ));
        }
        Ok(Self {
            viewport,
            width: f64::from(width.max(1)),
            height: f64::from(height.max(1)),
        })
    }

    /// The viewport this mapper was built from
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Canvas width in pixels
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Canvas height in pixels
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Map a domain point to device pixels
    pub fn to_device(&self, x: f64, y: f64) -> (f64, f64) {
        let px = (x - self.viewport.x_min) / self.viewport.x_range() * self.width;
        let py = self.height - (y - self.viewport.y_min) / self.viewport.y_range() * self.height;
        (px, py)
    }

    /// Map device pixels back to the domain point they came from
    pub fn to_domain(&self, px: f64, py: f64) -> (f64, f64) {
        let x = self.viewport.x_min + px / self.width * self.viewport.x_range();
        let y = self.viewport.y_min + (self.height - py) / self.height * self.viewport.y_range();
        (x, y)
    }

    /// Device coordinates of the origin `(0, 0)`, or `None` when the origin
    /// falls outside the canvas
    pub fn origin_device(&self) -> Option<(f64, f64)> {
        let (px, py) = self.to_device(0.0, 0.0);
        if px >= 0.0 && px <= self.width && py >= 0.0 && py <= self.height {
            Some((px, py))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CoordinateMapper, Viewport};
    use crate::Error;

    fn mapper() -> CoordinateMapper {
        CoordinateMapper::new(Viewport::default(), 800, 600).unwrap()
    }

    #[test]
    fn device_corners() {
        let mapper = mapper();
        assert_eq!(mapper.to_device(-10.0, -10.0), (0.0, 600.0));
        assert_eq!(mapper.to_device(10.0, 10.0), (800.0, 0.0));
        assert_eq!(mapper.to_device(0.0, 0.0), (400.0, 300.0));
    }

    #[test]
    fn round_trip() {
        let mapper = CoordinateMapper::new(Viewport::new(-3.0, 7.0, 0.5, 2.5), 640, 480).unwrap();
        let points = [(-3.0, 0.5), (7.0, 2.5), (0.0, 1.0), (1.25, 2.125)];
        for &(x, y) in &points {
            let (px, py) = mapper.to_device(x, y);
            let (x2, y2) = mapper.to_domain(px, py);
            assert!((x - x2).abs() < 1e-9, "x round trip failed for {}", x);
            assert!((y - y2).abs() < 1e-9, "y round trip failed for {}", y);
        }
    }

    #[test]
    fn origin() {
        assert_eq!(mapper().origin_device(), Some((400.0, 300.0)));

        let shifted =
            CoordinateMapper::new(Viewport::new(1.0, 5.0, -10.0, 10.0), 800, 600).unwrap();
        assert_eq!(shifted.origin_device(), None);

        let edge = CoordinateMapper::new(Viewport::new(0.0, 5.0, -10.0, 10.0), 800, 600).unwrap();
        assert_eq!(edge.origin_device(), Some((0.0, 300.0)));
    }

    #[test]
    fn degenerate() {
        let flat = Viewport::new(5.0, 5.0, -10.0, 10.0);
        match CoordinateMapper::new(flat, 800, 600) {
            Err(Error::DegenerateViewport(_)) => {}
            other => panic!("expected DegenerateViewport, got {:?}", other),
        }

        let thin = Viewport::new(-10.0, 10.0, 2.0, 2.0);
        assert!(CoordinateMapper::new(thin, 800, 600).is_err());

        let broken = Viewport::new(f64::NAN, 10.0, -10.0, 10.0);
        assert!(CoordinateMapper::new(broken, 800, 600).is_err());
    }
}
