//! Per-agent driving personality.

use crate::{AgentError, AgentResult};

/// Immutable weights for the lookahead heuristic.
///
/// The default reproduces the reference driver.  [`cautious`](Self::cautious)
/// and [`aggressive`](Self::aggressive) trade progress against staying
/// centred without changing the search itself.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AgentConfig {
    /// Score per centerline index reached.
    pub progress_weight: f64,
    /// Score lost per unit of distance from the centerline.
    pub centering_weight: f64,
    /// Score lost when the simulated end state is off the tarmac.
    pub off_track_penalty: f64,
    /// Ticks simulated per candidate action.
    pub lookahead_depth: u32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            progress_weight:   1.0,
            centering_weight:  0.1,
            off_track_penalty: 1000.0,
            lookahead_depth:   3,
        }
    }
}

impl AgentConfig {
    /// Low progress weight, strong pull toward the centerline, longer
    /// horizon.
    pub fn cautious() -> Self {
        Self {
            progress_weight:   0.8,
            centering_weight:  0.5,
            off_track_penalty: 1000.0,
            lookahead_depth:   5,
        }
    }

    /// High progress weight, almost no centering.
    pub fn aggressive() -> Self {
        Self {
            progress_weight:   1.3,
            centering_weight:  0.02,
            off_track_penalty: 1000.0,
            lookahead_depth:   3,
        }
    }

    pub fn validate(&self) -> AgentResult<()> {
        let weights = [
            ("progress_weight",   self.progress_weight),
            ("centering_weight",  self.centering_weight),
            ("off_track_penalty", self.off_track_penalty),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(AgentError::InvalidWeight { name, value });
            }
        }
        if self.lookahead_depth == 0 {
            return Err(AgentError::ZeroLookahead);
        }
        Ok(())
    }
}
