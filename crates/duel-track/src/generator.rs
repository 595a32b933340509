//! Procedural oval generator.
//!
//! The loop is built from `num_segments` arcs around a common centre.  Each
//! arc sweeps a random angle at a random radius chosen by its
//! [`SegmentKind`]; consecutive arcs therefore join with radial steps that
//! read as kinks and chicanes.  A short linear blend closes the gap back to
//! the first point, and the whole polyline is re-centred on `center`.
//!
//! Generation is fully determined by the `SimRng` passed in.

use duel_core::{Point2, SimRng};
use tracing::debug;

use crate::{Track, TrackError, TrackResult};

/// Character of one generated section.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SegmentKind {
    /// Gentle sweep close to the base radius.
    Straight,
    /// Medium sweep with moderate radius jitter.
    SmoothCurve,
    /// Large sweep pulled well inside the base radius.
    TightCurve,
}

impl SegmentKind {
    pub const ALL: [SegmentKind; 3] = [Self::Straight, Self::SmoothCurve, Self::TightCurve];

    /// Angle swept by the segment, radians: `(min, max)`.
    pub fn angle_range(self) -> (f64, f64) {
        match self {
            Self::Straight    => (0.1, 0.3),
            Self::SmoothCurve => (0.4, 0.8),
            Self::TightCurve  => (1.0, 1.5),
        }
    }

    /// Radius offset from the base radius: `(min, max)`.
    pub fn radius_offset_range(self) -> (f64, f64) {
        match self {
            Self::Straight    => (-30.0, 30.0),
            Self::SmoothCurve => (-60.0, 60.0),
            Self::TightCurve  => (-120.0, -60.0),
        }
    }
}

/// Generator parameters.  Defaults reproduce the reference 1000×800 layout.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TrackGenConfig {
    /// Centre the finished loop is translated onto.
    pub center: Point2,
    pub width: f64,
    pub base_radius: f64,
    pub num_segments: usize,
    /// Points sampled per segment.
    pub segment_points: usize,
    /// Linear points closing the gap from the last arc back to the start.
    pub blend_points: usize,
}

impl Default for TrackGenConfig {
    fn default() -> Self {
        Self {
            center:         Point2::new(500.0, 400.0),
            width:          60.0,
            base_radius:    300.0,
            num_segments:   10,
            segment_points: 30,
            blend_points:   10,
        }
    }
}

/// Builds random closed tracks from a [`TrackGenConfig`].
#[derive(Clone, Debug, Default)]
pub struct OvalGenerator {
    pub config: TrackGenConfig,
}

impl OvalGenerator {
    pub fn new(config: TrackGenConfig) -> Self {
        Self { config }
    }

    /// Generate a track.  Same RNG state, same track.
    pub fn generate(&self, rng: &mut SimRng) -> TrackResult<Track> {
        let cfg = &self.config;
        if cfg.num_segments == 0 || cfg.segment_points == 0 {
            return Err(TrackError::Generator(
                "num_segments and segment_points must be positive".into(),
            ));
        }
        if !(cfg.base_radius.is_finite() && cfg.base_radius > 0.0) {
            return Err(TrackError::Generator(format!(
                "base_radius must be positive, got {}",
                cfg.base_radius
            )));
        }

        let kinds: Vec<(SegmentKind, f64, f64)> = (0..cfg.num_segments)
            .map(|_| {
                let kind = SegmentKind::ALL[rng.gen_range(0..SegmentKind::ALL.len())];
                let (a_lo, a_hi) = kind.angle_range();
                let (r_lo, r_hi) = kind.radius_offset_range();
                let sweep = rng.gen_range(a_lo..a_hi);
                let radius = cfg.base_radius + rng.gen_range(r_lo..r_hi);
                (kind, sweep, radius)
            })
            .collect();

        let mut points =
            Vec::with_capacity(cfg.num_segments * cfg.segment_points + cfg.blend_points);
        let mut angle = 0.0_f64;
        for &(_, sweep, radius) in &kinds {
            for i in 0..cfg.segment_points {
                let t = i as f64 / cfg.segment_points as f64;
                let local = angle + t * sweep;
                points.push(Point2::new(
                    cfg.center.x + radius * local.cos(),
                    cfg.center.y + radius * local.sin(),
                ));
            }
            angle += sweep;
        }

        let start = points[0];
        let end = points[points.len() - 1];
        for i in 0..cfg.blend_points {
            let t = i as f64 / cfg.blend_points as f64;
            points.push(Point2::new(
                end.x + t * (start.x - end.x),
                end.y + t * (start.y - end.y),
            ));
        }

        let n = points.len() as f64;
        let avg_x = points.iter().map(|p| p.x).sum::<f64>() / n;
        let avg_y = points.iter().map(|p| p.y).sum::<f64>() / n;
        for p in &mut points {
            p.x += cfg.center.x - avg_x;
            p.y += cfg.center.y - avg_y;
        }

        let tight = kinds.iter().filter(|(k, _, _)| *k == SegmentKind::TightCurve).count();
        debug!(
            segments = cfg.num_segments,
            tight_curves = tight,
            total_sweep = angle,
            points = points.len(),
            "generated oval track"
        );
        Track::new(points, cfg.width)
    }
}
