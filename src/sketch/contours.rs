use image::GrayImage;
use imageproc::contours::{BorderType, find_contours};
use imageproc::point::Point;

/// Which side of the mask a boundary traces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryKind {
    Outer,
    Hole,
}

/// One connected edge boundary: an ordered point chain in pixel coordinates.
/// `parent` is the index of the enclosing boundary in the full set, if any.
#[derive(Debug, Clone)]
pub struct Boundary {
    pub points: Vec<Point<u32>>,
    pub kind: BoundaryKind,
    pub parent: Option<usize>,
}

impl Boundary {
    pub fn is_top_level(&self) -> bool {
        self.parent.is_none()
    }
}

/// Trace every boundary in the binary mask (outer borders and holes,
/// nested ones included), compressing each point chain.
pub fn trace_all(mask: &GrayImage) -> Vec<Boundary> {
    find_contours::<u32>(mask)
        .into_iter()
        .map(|contour| Boundary {
            points: compress_chain(contour.points),
            kind: match contour.border_type {
                BorderType::Outer => BoundaryKind::Outer,
                BorderType::Hole => BoundaryKind::Hole,
            },
            parent: contour.parent,
        })
        .collect()
}

/// Trace only the outermost boundaries (those not enclosed by any other).
pub fn trace_outer(mask: &GrayImage) -> Vec<Boundary> {
    trace_all(mask)
        .into_iter()
        .filter(Boundary::is_top_level)
        .collect()
}

/// Simple point-chain approximation: merge straight runs so only the
/// endpoints of each horizontal, vertical, or diagonal segment survive.
/// Order is preserved; no curve fitting.
pub fn compress_chain(points: Vec<Point<u32>>) -> Vec<Point<u32>> {
    if points.len() < 3 {
        return points;
    }

    let direction = |from: Point<u32>, to: Point<u32>| -> (i64, i64) {
        let dx = i64::from(to.x) - i64::from(from.x);
        let dy = i64::from(to.y) - i64::from(from.y);
        (dx.signum(), dy.signum())
    };

    let mut compressed = Vec::with_capacity(points.len());
    compressed.push(points[0]);
    for window in points.windows(3) {
        if direction(window[0], window[1]) != direction(window[1], window[2]) {
            compressed.push(window[1]);
        }
    }
    compressed.push(points[points.len() - 1]);
    compressed
}
