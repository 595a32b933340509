//! Ordered checkpoint tracking.
//!
//! A vehicle crosses a checkpoint when its progress index moves forward past
//! the checkpoint's centerline index between two observations.  Crossings
//! only count in order: checkpoint 0 arms the tracker, then 1, 2, … must
//! follow; crossing checkpoint 0 again after all of them completes a lap.
//!
//! Progress indices are nearest-point projections, so they can jump several
//! indices in one tick at kinks in the centerline.  A forward move of less
//! than half the loop counts as driving; anything longer is a step backwards
//! and crosses nothing.  The very first observation has no previous index and
//! instead counts if it lands within the capture window of the target.
//!
//! The tracker only consumes progress indices, so it works with whatever
//! projection the caller uses (normally `Vehicle::track_info`).

use duel_core::CheckpointId;

use crate::Track;

/// Default capture window, in centerline indices.
pub const DEFAULT_CAPTURE_WINDOW: usize = 5;

/// Result of feeding one progress index to a [`LapTracker`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LapEvent {
    /// Nothing new this tick.
    None,
    /// The next expected checkpoint was crossed.
    Checkpoint(CheckpointId),
    /// Checkpoint 0 was crossed after all the others; carries the new lap
    /// count.
    LapCompleted(u32),
}

/// Per-vehicle lap progress.
#[derive(Clone, Debug)]
pub struct LapTracker {
    checkpoints: Vec<usize>,
    /// Distinct centerline points; the closing duplicate maps onto 0.
    ring:        usize,
    window:      usize,
    /// Position in `checkpoints` of the next expected crossing.
    /// `checkpoints.len()` means checkpoint 0 again (lap line).
    next:        usize,
    /// Progress index at the previous observation.
    prev:        Option<usize>,
    laps:        u32,
}

impl LapTracker {
    pub fn new(track: &Track) -> Self {
        Self::with_window(track, DEFAULT_CAPTURE_WINDOW)
    }

    /// `window` is clamped to at least 1.
    pub fn with_window(track: &Track, window: usize) -> Self {
        Self {
            checkpoints: track.checkpoint_indices().to_vec(),
            ring:        (track.point_count() - 1).max(1),
            window:      window.max(1),
            next:        0,
            prev:        None,
            laps:        0,
        }
    }

    /// Feed the vehicle's current progress index.
    ///
    /// One observation can cross more than one checkpoint; a completed lap
    /// takes precedence over a checkpoint in the returned event.
    pub fn observe(&mut self, progress_index: usize) -> LapEvent {
        let cur = progress_index % self.ring;
        let prev = self.prev.replace(cur);

        let mut event = LapEvent::None;
        for _ in 0..self.checkpoints.len() {
            let target_pos = self.target_position();
            if !self.crossed(prev, cur, self.checkpoints[target_pos]) {
                break;
            }
            if self.next == self.checkpoints.len() {
                self.laps += 1;
                self.next = 1;
                event = LapEvent::LapCompleted(self.laps);
            } else {
                self.next += 1;
                if !matches!(event, LapEvent::LapCompleted(_)) {
                    event = LapEvent::Checkpoint(CheckpointId(target_pos as u16));
                }
            }
        }
        event
    }

    /// `true` once every checkpoint has been crossed in order since the last
    /// crossing of checkpoint 0.
    #[inline]
    pub fn all_checkpoints_crossed(&self) -> bool {
        self.next == self.checkpoints.len()
    }

    #[inline]
    pub fn laps(&self) -> u32 {
        self.laps
    }

    /// The checkpoint the vehicle must cross next.
    #[inline]
    pub fn next_checkpoint(&self) -> CheckpointId {
        CheckpointId(self.target_position() as u16)
    }

    fn target_position(&self) -> usize {
        if self.next == self.checkpoints.len() { 0 } else { self.next }
    }

    /// Indices from `from` forward to `to` around the loop.
    fn ahead(&self, from: usize, to: usize) -> usize {
        (to + self.ring - from) % self.ring
    }

    fn crossed(&self, prev: Option<usize>, cur: usize, checkpoint: usize) -> bool {
        match prev {
            None => self.ahead(checkpoint, cur) < self.window,
            Some(prev) => {
                let step = self.ahead(prev, cur);
                let offset = self.ahead(prev, checkpoint);
                2 * step < self.ring && offset > 0 && offset <= step
            }
        }
    }
}
