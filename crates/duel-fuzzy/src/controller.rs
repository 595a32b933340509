//! Curvature-aware speed controller.
//!
//! Two inputs, one output:
//!
//! | Variable       | Universe   | Terms (triangle `a, b, c`)                                       |
//! |----------------|------------|------------------------------------------------------------------|
//! | `speed`        | `[0, 15]`  | slow `0,0,6` · medium `4,8,12` · fast `10,15,15`                 |
//! | `curve`        | `[0, 1]`   | gentle `0,0,0.6` · sharp `0.4,1,1`                               |
//! | `acceleration` | `[-1, 1]`  | brake `-1,-1,0` · maintain `-0.5,0,0.5` · accelerate `0,1,1`     |
//!
//! Rules: fast∧sharp→brake, fast∧gentle→maintain, slow∧gentle→accelerate,
//! slow∧sharp→maintain, medium∧sharp→brake, medium∧gentle→maintain.

use crate::{FuzzyResult, FuzzySystem, FuzzySystemBuilder, Inference, LinguisticVariable, Triangle, Universe};

pub const SPEED_MAX: f64 = 15.0;
pub const CURVATURE_MAX: f64 = 1.0;

/// Maps `(speed, curvature)` to an acceleration command in `[-1, 1]`.
///
/// Build once at startup and pass by reference into every decision; the
/// controller holds no per-call state.
#[derive(Clone, Debug)]
pub struct SpeedController {
    system: FuzzySystem<2>,
}

impl SpeedController {
    /// The standard six-rule controller.
    pub fn new() -> FuzzyResult<Self> {
        let speed = LinguisticVariable::new("speed", Universe::new(0.0, SPEED_MAX, 0.1)?)
            .term("slow", Triangle::new(0.0, 0.0, 6.0)?)?
            .term("medium", Triangle::new(4.0, 8.0, 12.0)?)?
            .term("fast", Triangle::new(10.0, 15.0, 15.0)?)?;

        let curve = LinguisticVariable::new("curve", Universe::new(0.0, CURVATURE_MAX, 0.01)?)
            .term("gentle", Triangle::new(0.0, 0.0, 0.6)?)?
            .term("sharp", Triangle::new(0.4, 1.0, 1.0)?)?;

        let acceleration = LinguisticVariable::new("acceleration", Universe::new(-1.0, 1.0, 0.01)?)
            .term("brake", Triangle::new(-1.0, -1.0, 0.0)?)?
            .term("maintain", Triangle::new(-0.5, 0.0, 0.5)?)?
            .term("accelerate", Triangle::new(0.0, 1.0, 1.0)?)?;

        let system = FuzzySystemBuilder::<2>::new()
            .input(speed)
            .input(curve)
            .output(acceleration)
            .rule(&[("speed", "fast"), ("curve", "sharp")], "brake")
            .rule(&[("speed", "fast"), ("curve", "gentle")], "maintain")
            .rule(&[("speed", "slow"), ("curve", "gentle")], "accelerate")
            .rule(&[("speed", "slow"), ("curve", "sharp")], "maintain")
            .rule(&[("speed", "medium"), ("curve", "sharp")], "brake")
            .rule(&[("speed", "medium"), ("curve", "gentle")], "maintain")
            .build()?;

        Ok(Self { system })
    }

    /// Wrap a custom two-input system (`[speed, curvature]`).
    pub fn from_system(system: FuzzySystem<2>) -> Self {
        Self { system }
    }

    /// Acceleration command for the given speed and curvature.
    ///
    /// Total over all inputs: out-of-range values saturate at the domain
    /// edges, NaN reads as the lower edge.
    pub fn acceleration_action(&self, speed: f64, curvature: f64) -> f64 {
        self.system.evaluate([speed, curvature]).crisp
    }

    /// Full inference result, rule strengths included.
    pub fn infer(&self, speed: f64, curvature: f64) -> Inference {
        self.system.evaluate([speed, curvature])
    }

    pub fn system(&self) -> &FuzzySystem<2> {
        &self.system
    }
}
