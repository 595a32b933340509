//! Planar point type and the track-geometry queries shared by the decision
//! core.
//!
//! Coordinates are screen-space `f64` pixels with `y` growing downwards, so a
//! positive heading change turns clockwise on screen.  Nothing here depends on
//! that convention; headings are plain `atan2` angles.
//!
//! Every function is pure and deterministic.  Centerline slices are treated
//! as closed loops: neighbour lookups wrap modulo the slice length.

use std::f64::consts::PI;

/// A 2-D point (or vector) in track space.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance_to(self, other: Point2) -> f64 {
        distance(self, other)
    }

    /// Angle of the vector `self → other`, in radians.
    #[inline]
    pub fn heading_to(self, other: Point2) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }
}

impl From<(f64, f64)> for Point2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Point2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

// ── Distance & projection ─────────────────────────────────────────────────────

/// Euclidean distance between two points.
#[inline]
pub fn distance(p1: Point2, p2: Point2) -> f64 {
    (p2.x - p1.x).hypot(p2.y - p1.y)
}

/// Nearest centerline point to `pos` and its index.
///
/// Linear scan front to back; on ties the first minimal index wins.
///
/// # Panics
/// Panics if `centerline` is empty.  `duel_track::Track` construction rejects
/// empty centerlines, so queries through a track never hit this.
pub fn closest_point_on_track(pos: Point2, centerline: &[Point2]) -> (Point2, usize) {
    let mut best_index = 0;
    let mut best_point = centerline[0];
    let mut min_dist = f64::INFINITY;

    for (i, &point) in centerline.iter().enumerate() {
        let d = distance(pos, point);
        if d < min_dist {
            min_dist = d;
            best_point = point;
            best_index = i;
        }
    }
    (best_point, best_index)
}

// ── Curvature ─────────────────────────────────────────────────────────────────

/// Normalised direction change at `p1`, in `[0, 1]`.
///
/// `0` means `p0 → p1 → p2` is straight, `1` means a full reversal.  A
/// zero-length leg has no direction, and is reported as straight so callers
/// never see NaN.
pub fn compute_curvature(p0: Point2, p1: Point2, p2: Point2) -> f64 {
    let v1 = (p1.x - p0.x, p1.y - p0.y);
    let v2 = (p2.x - p1.x, p2.y - p1.y);

    let mag1 = v1.0.hypot(v1.1);
    let mag2 = v2.0.hypot(v2.1);
    if mag1 == 0.0 || mag2 == 0.0 {
        return 0.0;
    }

    let cos_angle = ((v1.0 * v2.0 + v1.1 * v2.1) / (mag1 * mag2)).clamp(-1.0, 1.0);
    cos_angle.acos() / PI
}

// ── Headings ──────────────────────────────────────────────────────────────────

/// Direction from `centerline[index]` to the next point (wrapping).
pub fn track_heading(centerline: &[Point2], index: usize) -> f64 {
    future_heading(centerline, index, 1)
}

/// Direction from `centerline[index]` to the point `look_ahead` steps further
/// along the loop.
///
/// Used to anticipate where the track is going rather than where it points
/// right now.
pub fn future_heading(centerline: &[Point2], index: usize, look_ahead: usize) -> f64 {
    let n = centerline.len();
    let from = centerline[index % n];
    let to = centerline[(index + look_ahead) % n];
    from.heading_to(to)
}

/// Wrap an angle difference into `[-π, π]` via `atan2(sin Δ, cos Δ)`.
///
/// Headings accumulate without bound on vehicles; this is the only place they
/// are brought back into range.
#[inline]
pub fn normalize_angle(delta: f64) -> f64 {
    delta.sin().atan2(delta.cos())
}
