use crate::foundation::core::{BezPath, Point, Rect};

/// Ordered boundary samples. The closing segment from the last point back to the first is
/// implicit.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Contour {
    pub points: Vec<Point>,
}

impl Contour {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Closed polyline: `MoveTo` the first point, `LineTo` the rest, then `ClosePath`.
    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let mut it = self.points.iter();
        let Some(&first) = it.next() else {
            return path;
        };
        path.move_to(first);
        for &p in it {
            path.line_to(p);
        }
        path.close_path();
        path
    }

    pub fn bounding_box(&self) -> Option<Rect> {
        let (&first, rest) = self.points.split_first()?;
        Some(
            rest.iter()
                .fold(Rect::from_points(first, first), |r, &p| r.union_pt(p)),
        )
    }

    /// Length of the implicit closing segment.
    pub fn closing_gap(&self) -> f64 {
        match (self.points.first(), self.points.last()) {
            (Some(a), Some(b)) => a.distance(*b),
            _ => 0.0,
        }
    }
}
