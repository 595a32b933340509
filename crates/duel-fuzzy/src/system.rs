//! Fuzzy inference system and its builder.

use tracing::trace;

use crate::defuzz::centroid;
use crate::{FuzzyError, FuzzyResult, LinguisticVariable};

// ── Rules ─────────────────────────────────────────────────────────────────────

/// `IF in[i0] is t0 AND in[i1] is t1 … THEN out is consequent`, resolved to
/// indices.
#[derive(Clone, Debug)]
struct Rule {
    /// `(input index, term index)` pairs.
    antecedents: Vec<(usize, usize)>,
    consequent:  usize,
}

/// A rule as written by the caller, resolved at build time.
struct RuleSpec {
    antecedents: Vec<(String, String)>,
    consequent:  String,
}

// ── Inference ─────────────────────────────────────────────────────────────────

/// Result of one evaluation.
#[derive(Clone, Debug, PartialEq)]
pub struct Inference {
    /// Defuzzified output, inside the output universe.
    pub crisp: f64,
    /// Firing strength of every rule, in declaration order.
    pub rule_strengths: Vec<f64>,
}

impl Inference {
    /// `true` if at least one rule fired.
    pub fn any_fired(&self) -> bool {
        self.rule_strengths.iter().any(|&s| s > 0.0)
    }
}

// ── FuzzySystem ───────────────────────────────────────────────────────────────

/// A validated Mamdani system with `N` inputs and one output.
///
/// The output universe and each output term are sampled once at build time;
/// evaluation only clips and aggregates those samples.
#[derive(Clone, Debug)]
pub struct FuzzySystem<const N: usize> {
    inputs:       [LinguisticVariable; N],
    output:       LinguisticVariable,
    rules:        Vec<Rule>,
    output_xs:    Vec<f64>,
    /// `output_terms[t][i]` = membership of `output_xs[i]` in term `t`.
    output_terms: Vec<Vec<f64>>,
}

impl<const N: usize> FuzzySystem<N> {
    pub fn inputs(&self) -> &[LinguisticVariable; N] {
        &self.inputs
    }

    pub fn output(&self) -> &LinguisticVariable {
        &self.output
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Evaluate the system for one set of crisp inputs.
    ///
    /// Inputs outside their universes saturate at the nearest bound.  If no
    /// rule fires the output is the midpoint of the output universe.
    pub fn evaluate(&self, inputs: [f64; N]) -> Inference {
        let clamped: [f64; N] =
            std::array::from_fn(|i| self.inputs[i].universe().clamp(inputs[i]));

        let rule_strengths: Vec<f64> = self
            .rules
            .iter()
            .map(|rule| {
                rule.antecedents
                    .iter()
                    .map(|&(var, term)| self.inputs[var].membership(term, clamped[var]))
                    .fold(1.0, f64::min)
            })
            .collect();

        let mut aggregate = vec![0.0_f64; self.output_xs.len()];
        for (rule, &strength) in self.rules.iter().zip(&rule_strengths) {
            if strength <= 0.0 {
                continue;
            }
            let shape = &self.output_terms[rule.consequent];
            for (agg, &mu) in aggregate.iter_mut().zip(shape) {
                *agg = agg.max(mu.min(strength));
            }
        }

        let universe = self.output.universe();
        let crisp = centroid(&self.output_xs, &aggregate)
            .map_or(universe.midpoint(), |c| universe.clamp(c));

        trace!(inputs = ?clamped, strengths = ?rule_strengths, crisp, "fuzzy inference");
        Inference { crisp, rule_strengths }
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Fluent builder for [`FuzzySystem<N>`].
///
/// ```rust,ignore
/// let system = FuzzySystemBuilder::<2>::new()
///     .input(speed)
///     .input(curve)
///     .output(acceleration)
///     .rule(&[("speed", "fast"), ("curve", "sharp")], "brake")
///     .build()?;
/// ```
pub struct FuzzySystemBuilder<const N: usize> {
    inputs: Vec<LinguisticVariable>,
    output: Option<LinguisticVariable>,
    rules:  Vec<RuleSpec>,
}

impl<const N: usize> Default for FuzzySystemBuilder<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> FuzzySystemBuilder<N> {
    pub fn new() -> Self {
        Self { inputs: Vec::with_capacity(N), output: None, rules: Vec::new() }
    }

    /// Append an input variable.  Input order is the order of the array
    /// passed to [`FuzzySystem::evaluate`].
    pub fn input(mut self, variable: LinguisticVariable) -> Self {
        self.inputs.push(variable);
        self
    }

    pub fn output(mut self, variable: LinguisticVariable) -> Self {
        self.output = Some(variable);
        self
    }

    /// Add a conjunctive rule from `(variable, term)` names.
    pub fn rule(mut self, antecedents: &[(&str, &str)], consequent: &str) -> Self {
        self.rules.push(RuleSpec {
            antecedents: antecedents
                .iter()
                .map(|&(v, t)| (v.to_owned(), t.to_owned()))
                .collect(),
            consequent: consequent.to_owned(),
        });
        self
    }

    /// Resolve names, sample the output universe, and return the system.
    pub fn build(self) -> FuzzyResult<FuzzySystem<N>> {
        let output = self.output.ok_or(FuzzyError::MissingOutput)?;
        if self.rules.is_empty() {
            return Err(FuzzyError::NoRules);
        }
        let got = self.inputs.len();
        let inputs: [LinguisticVariable; N] = self
            .inputs
            .try_into()
            .map_err(|_| FuzzyError::InputCountMismatch { expected: N, got })?;

        let rules = self
            .rules
            .into_iter()
            .map(|spec| resolve_rule(spec, &inputs, &output))
            .collect::<FuzzyResult<Vec<_>>>()?;

        let output_xs = output.universe().samples();
        let output_terms = (0..output.term_count())
            .map(|t| {
                let shape = output.shape(t);
                output_xs.iter().map(|&x| shape.membership(x)).collect()
            })
            .collect();

        Ok(FuzzySystem { inputs, output, rules, output_xs, output_terms })
    }
}

fn resolve_rule(
    spec:   RuleSpec,
    inputs: &[LinguisticVariable],
    output: &LinguisticVariable,
) -> FuzzyResult<Rule> {
    let antecedents = spec
        .antecedents
        .into_iter()
        .map(|(var_name, term_name)| {
            let var = inputs
                .iter()
                .position(|v| v.name() == var_name)
                .ok_or_else(|| FuzzyError::UnknownVariable(var_name.clone()))?;
            let term = inputs[var].term_index(&term_name).ok_or(FuzzyError::UnknownTerm {
                variable: var_name,
                term:     term_name,
            })?;
            Ok((var, term))
        })
        .collect::<FuzzyResult<Vec<_>>>()?;

    let consequent = output.term_index(&spec.consequent).ok_or_else(|| {
        FuzzyError::UnknownTerm { variable: output.name().to_owned(), term: spec.consequent }
    })?;

    Ok(Rule { antecedents, consequent })
}
