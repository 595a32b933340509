//! The immutable race track.
//!
//! # Data layout
//!
//! The centerline is an ordered, closed polyline stored with its first point
//! duplicated at the end:
//!
//! ```text
//! centerline = [p0, p1, …, pk, p0]
//! ```
//!
//! All neighbour lookups wrap modulo `centerline.len()`, so the duplicate
//! closing point is a real index.  Checkpoints are indices into the
//! centerline; they never point at the closing duplicate.
//!
//! A `Track` is validated once at construction and never mutated after.
//! It is shared read-only by every vehicle, agent and tracker in a race.

use duel_core::Point2;
use duel_core::geo::{
    closest_point_on_track, compute_curvature, distance, future_heading, track_heading,
};

use crate::{TrackError, TrackResult};

/// Number of evenly spaced checkpoints placed by [`Track::new`].
pub const DEFAULT_CHECKPOINT_COUNT: usize = 4;

/// Closed centerline, width, and checkpoint indices.
///
/// Fields are private so the invariants established by [`Track::new`] hold
/// for the whole lifetime of the value.
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    centerline:  Vec<Point2>,
    width:       f64,
    checkpoints: Vec<usize>,
}

impl Track {
    /// Build a track from raw centerline points.
    ///
    /// Closes the loop by appending the first point when the last one
    /// differs, then places [`DEFAULT_CHECKPOINT_COUNT`] evenly spaced
    /// checkpoints starting at index 0.
    ///
    /// Fails fast when the centerline has fewer than two distinct points,
    /// contains non-finite coordinates, or `width` is not a positive finite
    /// number.
    pub fn new(points: Vec<Point2>, width: f64) -> TrackResult<Self> {
        let centerline = close_loop(validate_points(points)?);
        validate_width(width)?;

        // Exclude the closing duplicate when spacing checkpoints.
        let total = centerline.len() - 1;
        let mut checkpoints: Vec<usize> = (0..DEFAULT_CHECKPOINT_COUNT)
            .map(|k| k * total / DEFAULT_CHECKPOINT_COUNT)
            .collect();
        checkpoints.dedup();

        Ok(Self { centerline, width, checkpoints })
    }

    /// Build a track with explicit checkpoint indices.
    ///
    /// Checkpoints must start at 0 (the start/finish line), be strictly
    /// increasing, and stay below the closing duplicate point.
    pub fn with_checkpoints(
        points:      Vec<Point2>,
        width:       f64,
        checkpoints: Vec<usize>,
    ) -> TrackResult<Self> {
        let centerline = close_loop(validate_points(points)?);
        validate_width(width)?;

        let last_valid = centerline.len() - 1;
        match checkpoints.first() {
            None => {
                return Err(TrackError::InvalidCheckpoints("no checkpoints given".into()));
            }
            Some(&first) if first != 0 => {
                return Err(TrackError::InvalidCheckpoints(format!(
                    "first checkpoint must be index 0, got {first}"
                )));
            }
            Some(_) => {}
        }
        if checkpoints.len() > usize::from(u16::MAX) {
            return Err(TrackError::InvalidCheckpoints(format!(
                "{} checkpoints exceed the supported maximum",
                checkpoints.len()
            )));
        }
        if let Some(w) = checkpoints.windows(2).find(|w| w[0] >= w[1]) {
            return Err(TrackError::InvalidCheckpoints(format!(
                "checkpoints must be strictly increasing ({} then {})",
                w[0], w[1]
            )));
        }
        if let Some(&bad) = checkpoints.iter().find(|&&c| c >= last_valid) {
            return Err(TrackError::InvalidCheckpoints(format!(
                "checkpoint {bad} out of range (centerline has {last_valid} distinct slots)"
            )));
        }

        Ok(Self { centerline, width, checkpoints })
    }

    // ── Read-only query interface ─────────────────────────────────────────

    /// The closed centerline, closing duplicate included.
    #[inline]
    pub fn centerline(&self) -> &[Point2] {
        &self.centerline
    }

    /// Number of centerline points, closing duplicate included.
    #[inline]
    pub fn point_count(&self) -> usize {
        self.centerline.len()
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Off-track threshold: distance to the centerline beyond this is off
    /// the tarmac.
    #[inline]
    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }

    #[inline]
    pub fn checkpoint_indices(&self) -> &[usize] {
        &self.checkpoints
    }

    /// Centerline position of the `k`-th checkpoint.
    pub fn checkpoint_position(&self, k: usize) -> Option<Point2> {
        self.checkpoints.get(k).map(|&i| self.centerline[i])
    }

    /// Start/finish point (centerline index 0).
    #[inline]
    pub fn start_point(&self) -> Point2 {
        self.centerline[0]
    }

    // ── Geometry ──────────────────────────────────────────────────────────

    /// Nearest centerline point to `pos` and its index.
    #[inline]
    pub fn closest_point(&self, pos: Point2) -> (Point2, usize) {
        closest_point_on_track(pos, &self.centerline)
    }

    /// Distance from `pos` to its nearest centerline point.
    pub fn distance_to_center(&self, pos: Point2) -> f64 {
        let (closest, _) = self.closest_point(pos);
        distance(pos, closest)
    }

    /// `true` while `pos` is within half the track width of the centerline.
    pub fn is_on_track(&self, pos: Point2) -> bool {
        self.distance_to_center(pos) <= self.half_width()
    }

    /// Curvature at `index` from its wrapped neighbours `index − 1` and
    /// `index + 1`.
    pub fn curvature_at(&self, index: usize) -> f64 {
        let n = self.centerline.len();
        let i = index % n;
        let p0 = self.centerline[(i + n - 1) % n];
        let p1 = self.centerline[i];
        let p2 = self.centerline[(i + 1) % n];
        compute_curvature(p0, p1, p2)
    }

    /// Local direction of travel at `index`.
    #[inline]
    pub fn heading_at(&self, index: usize) -> f64 {
        track_heading(&self.centerline, index)
    }

    /// Direction from `index` to the point `look_ahead` steps ahead.
    #[inline]
    pub fn future_heading(&self, index: usize, look_ahead: usize) -> f64 {
        future_heading(&self.centerline, index, look_ahead)
    }

    /// Total polyline length of the closed loop.
    pub fn length(&self) -> f64 {
        self.centerline
            .windows(2)
            .map(|w| distance(w[0], w[1]))
            .sum()
    }
}

// ── Construction helpers ──────────────────────────────────────────────────────

fn validate_points(points: Vec<Point2>) -> TrackResult<Vec<Point2>> {
    if let Some(index) = points.iter().position(|p| !p.x.is_finite() || !p.y.is_finite()) {
        return Err(TrackError::NonFinitePoint { index });
    }
    let Some(&first) = points.first() else {
        return Err(TrackError::TooFewPoints { distinct: 0 });
    };
    if points.iter().all(|&p| p == first) {
        return Err(TrackError::TooFewPoints { distinct: 1 });
    }
    Ok(points)
}

fn validate_width(width: f64) -> TrackResult<()> {
    if width.is_finite() && width > 0.0 {
        Ok(())
    } else {
        Err(TrackError::InvalidWidth(width))
    }
}

fn close_loop(mut points: Vec<Point2>) -> Vec<Point2> {
    if points.first() != points.last() {
        let first = points[0];
        points.push(first);
    }
    points
}
