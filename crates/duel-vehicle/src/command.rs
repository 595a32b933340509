//! Discrete commands a driver applies to a vehicle each tick.

/// Continuous commands above this accelerate.
pub const ACCELERATE_THRESHOLD: f64 = 0.3;

/// Continuous commands below this brake.
pub const BRAKE_THRESHOLD: f64 = -0.3;

/// One of the three steering choices available per tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SteeringAction {
    /// Heading decreases by the turn rate.
    Left,
    /// Heading increases by the turn rate.
    Right,
    /// Heading unchanged.
    Straight,
}

impl SteeringAction {
    /// Candidate order used by lookahead search.  Ties resolve to the
    /// earliest entry.
    pub const ALL: [SteeringAction; 3] = [Self::Left, Self::Right, Self::Straight];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left     => "left",
            Self::Right    => "right",
            Self::Straight => "straight",
        }
    }
}

impl std::fmt::Display for SteeringAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discrete longitudinal action derived from a continuous command in
/// `[-1, 1]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ThrottleCommand {
    Accelerate,
    Brake,
    /// Coast: passive friction only.
    Maintain,
}

impl ThrottleCommand {
    /// Map a speed-controller command onto a discrete action.
    ///
    /// `> 0.3` accelerates, `< -0.3` brakes, anything else (NaN included)
    /// maintains.
    pub fn from_command(command: f64) -> Self {
        if command > ACCELERATE_THRESHOLD {
            Self::Accelerate
        } else if command < BRAKE_THRESHOLD {
            Self::Brake
        } else {
            Self::Maintain
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Accelerate => "accelerate",
            Self::Brake      => "brake",
            Self::Maintain   => "maintain",
        }
    }
}

impl std::fmt::Display for ThrottleCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
