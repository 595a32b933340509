//! Universes of discourse and linguistic variables.

use crate::{FuzzyError, FuzzyResult, Triangle};

// ── Universe ──────────────────────────────────────────────────────────────────

/// Closed interval `[min, max]` sampled every `step`.
///
/// Inputs are clamped into the interval before fuzzification; output
/// universes are sampled for defuzzification.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Universe {
    min:  f64,
    max:  f64,
    step: f64,
}

impl Universe {
    pub fn new(min: f64, max: f64, step: f64) -> FuzzyResult<Self> {
        if !(min.is_finite() && max.is_finite() && step.is_finite()) {
            return Err(FuzzyError::InvalidUniverse("bounds and step must be finite".into()));
        }
        if min >= max {
            return Err(FuzzyError::InvalidUniverse(format!("min {min} must be below max {max}")));
        }
        if step <= 0.0 || step > max - min {
            return Err(FuzzyError::InvalidUniverse(format!("step {step} out of range")));
        }
        Ok(Self { min, max, step })
    }

    #[inline]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    #[inline]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.min + self.max)
    }

    /// Saturate `x` into the universe.  NaN maps to `min`.
    #[inline]
    pub fn clamp(&self, x: f64) -> f64 {
        if x.is_nan() { self.min } else { x.clamp(self.min, self.max) }
    }

    /// Evenly spaced samples from `min` to `max`, both included.
    pub fn samples(&self) -> Vec<f64> {
        let n = ((self.max - self.min) / self.step).round() as usize;
        (0..=n)
            .map(|i| (self.min + i as f64 * self.step).min(self.max))
            .collect()
    }
}

// ── LinguisticVariable ────────────────────────────────────────────────────────

/// A named quantity with named fuzzy terms over a universe.
#[derive(Clone, Debug)]
pub struct LinguisticVariable {
    name:     String,
    universe: Universe,
    terms:    Vec<(String, Triangle)>,
}

impl LinguisticVariable {
    pub fn new(name: impl Into<String>, universe: Universe) -> Self {
        Self { name: name.into(), universe, terms: Vec::new() }
    }

    /// Add a term.  Term names must be unique within the variable.
    pub fn term(mut self, name: impl Into<String>, shape: Triangle) -> FuzzyResult<Self> {
        let name = name.into();
        if self.term_index(&name).is_some() {
            return Err(FuzzyError::DuplicateTerm { variable: self.name, term: name });
        }
        self.terms.push((name, shape));
        Ok(self)
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    pub fn term_names(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|(n, _)| n.as_str())
    }

    pub fn term_index(&self, name: &str) -> Option<usize> {
        self.terms.iter().position(|(n, _)| n == name)
    }

    pub(crate) fn shape(&self, term: usize) -> &Triangle {
        &self.terms[term].1
    }

    pub(crate) fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Membership of `x` (clamped into the universe) in term `term`.
    pub fn membership(&self, term: usize, x: f64) -> f64 {
        self.terms[term].1.membership(self.universe.clamp(x))
    }
}
