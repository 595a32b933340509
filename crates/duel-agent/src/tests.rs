//! Unit tests for duel-agent.

use duel_core::Point2;
use duel_track::Track;
use duel_vehicle::{Vehicle, VehicleParams};

use crate::{AgentConfig, HeuristicAgent};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// 1000 × 400 rectangle, one point every 10 units, driven counter-clockwise
/// starting along the bottom edge (+x).  Width 40.
fn rectangle_track() -> Track {
    let mut pts = Vec::new();
    for i in 0..100 { pts.push(Point2::new(i as f64 * 10.0, 0.0)); }
    for i in 0..40  { pts.push(Point2::new(1000.0, i as f64 * 10.0)); }
    for i in 0..100 { pts.push(Point2::new(1000.0 - i as f64 * 10.0, 400.0)); }
    for i in 0..40  { pts.push(Point2::new(0.0, 400.0 - i as f64 * 10.0)); }
    Track::new(pts, 40.0).unwrap()
}

fn car(x: f64, y: f64, heading: f64, speed: f64) -> Vehicle {
    Vehicle::new(Point2::new(x, y), heading, VehicleParams::default())
        .unwrap()
        .with_speed(speed)
}

fn default_agent() -> HeuristicAgent {
    HeuristicAgent::new(AgentConfig::default()).unwrap()
}

// ── AgentConfig ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod config {
    use crate::{AgentConfig, AgentError};

    #[test]
    fn default_matches_reference_driver() {
        let c = AgentConfig::default();
        assert_eq!(c.progress_weight, 1.0);
        assert_eq!(c.centering_weight, 0.1);
        assert_eq!(c.off_track_penalty, 1000.0);
        assert_eq!(c.lookahead_depth, 3);
    }

    #[test]
    fn presets_are_valid_and_distinct() {
        let cautious = AgentConfig::cautious();
        let aggressive = AgentConfig::aggressive();
        cautious.validate().unwrap();
        aggressive.validate().unwrap();
        assert!(cautious.progress_weight < aggressive.progress_weight);
        assert!(cautious.centering_weight > aggressive.centering_weight);
    }

    #[test]
    fn bad_weights_rejected() {
        let nan = AgentConfig { centering_weight: f64::NAN, ..AgentConfig::default() };
        assert!(matches!(
            nan.validate(),
            Err(AgentError::InvalidWeight { name: "centering_weight", .. })
        ));

        let negative = AgentConfig { off_track_penalty: -1.0, ..AgentConfig::default() };
        assert!(negative.validate().is_err());

        let zero_depth = AgentConfig { lookahead_depth: 0, ..AgentConfig::default() };
        assert!(matches!(zero_depth.validate(), Err(AgentError::ZeroLookahead)));
    }

    #[test]
    fn agent_construction_validates() {
        let bad = AgentConfig { lookahead_depth: 0, ..AgentConfig::default() };
        assert!(crate::HeuristicAgent::new(bad).is_err());
    }
}

// ── Scoring ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scoring {
    use super::*;

    #[test]
    fn centred_and_aligned_scores_its_index() {
        let track = rectangle_track();
        let v = car(520.0, 0.0, 0.0, 0.0);
        assert!((default_agent().score_state(&v, &track) - 52.0).abs() < 1e-9);
    }

    #[test]
    fn off_track_penalty_dominates() {
        let track = rectangle_track();
        let agent = default_agent();
        let inside = car(520.0, 15.0, 0.0, 0.0);
        let outside = car(520.0, 25.0, 0.0, 0.0);
        let gap = agent.score_state(&inside, &track) - agent.score_state(&outside, &track);
        assert!((gap - 1001.0).abs() < 1e-9, "gap {gap}");
    }

    #[test]
    fn heading_error_costs_half_per_radian() {
        let track = rectangle_track();
        let agent = default_agent();
        let aligned = agent.score_state(&car(520.0, 0.0, 0.0, 0.0), &track);
        let skewed = agent.score_state(&car(520.0, 0.0, 0.4, 0.0), &track);
        assert!((aligned - skewed - 0.2).abs() < 1e-9);
    }

    #[test]
    fn heading_error_wraps() {
        let track = rectangle_track();
        let agent = default_agent();
        let a = agent.score_state(&car(520.0, 0.0, 0.3, 0.0), &track);
        let b = agent.score_state(&car(520.0, 0.0, 0.3 + 4.0 * std::f64::consts::PI, 0.0), &track);
        assert!((a - b).abs() < 1e-9);
    }

    #[test]
    fn evaluate_leaves_vehicle_untouched() {
        let track = rectangle_track();
        let v = car(500.0, 0.0, 0.0, 8.0);
        let before = v;
        let _ = default_agent().scores(&v, &track);
        assert_eq!(v, before);
    }

    #[test]
    fn seam_is_a_progress_cliff() {
        // Index 279 is the last distinct point; index 0 is the start line.
        let track = rectangle_track();
        let agent = default_agent();
        let before_seam = agent.score_state(&car(0.0, 10.0, -std::f64::consts::FRAC_PI_2, 0.0), &track);
        let after_seam = agent.score_state(&car(10.0, 0.0, 0.0, 0.0), &track);
        assert!(before_seam > after_seam + 200.0);
    }
}

// ── Decisions ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod decisions {
    use duel_vehicle::SteeringAction;

    use super::*;
    use crate::{SteeringPolicy, StraightPolicy};

    #[test]
    fn aligned_on_straight_goes_straight() {
        let track = rectangle_track();
        let v = car(500.0, 0.0, 0.0, 0.0);
        assert_eq!(default_agent().decide_action(&v, &track), SteeringAction::Straight);
    }

    #[test]
    fn steers_away_from_the_edge() {
        // Right would end outside the half width; straight stays off-centre.
        let track = rectangle_track();
        let agent = default_agent();
        let v = car(500.0, 18.0, 0.0, 8.0);
        let [left, right, straight] = agent.scores(&v, &track);
        assert!(left > straight);
        assert!(right < left - 900.0);
        assert_eq!(agent.decide_action(&v, &track), SteeringAction::Left);
    }

    #[test]
    fn corrects_heading() {
        let track = rectangle_track();
        let v = car(500.0, 0.0, -0.3, 8.0);
        assert_eq!(default_agent().decide_action(&v, &track), SteeringAction::Right);
    }

    #[test]
    fn ties_keep_the_first_candidate() {
        // Zero turn rate makes every candidate identical.
        let track = rectangle_track();
        let params = VehicleParams { turn_rate: 0.0, ..VehicleParams::default() };
        let v = Vehicle::new(Point2::new(500.0, 5.0), 0.1, params).unwrap().with_speed(4.0);
        let agent = default_agent();
        let [l, r, s] = agent.scores(&v, &track);
        assert_eq!(l, r);
        assert_eq!(r, s);
        assert_eq!(agent.decide_action(&v, &track), SteeringAction::Left);
    }

    #[test]
    fn deterministic() {
        let track = rectangle_track();
        let agent = default_agent();
        let v = car(730.0, -7.5, 0.2, 6.0);
        let first = agent.decide_action(&v, &track);
        for _ in 0..10 {
            assert_eq!(agent.decide_action(&v, &track), first);
        }
    }

    #[test]
    fn straight_policy_never_turns() {
        let track = rectangle_track();
        let v = car(500.0, 18.0, 1.0, 8.0);
        assert_eq!(StraightPolicy.decide(&v, &track), SteeringAction::Straight);
        assert_eq!(StraightPolicy.name(), "straight");
    }

    #[test]
    fn policies_work_as_trait_objects() {
        let track = rectangle_track();
        let policies: Vec<Box<dyn SteeringPolicy>> = vec![
            Box::new(HeuristicAgent::named("cautious", AgentConfig::cautious()).unwrap()),
            Box::new(StraightPolicy),
        ];
        let v = car(500.0, 0.0, 0.0, 0.0);
        for p in &policies {
            assert_eq!(p.decide(&v, &track), SteeringAction::Straight);
        }
        assert_eq!(policies[0].name(), "cautious");
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn decision_is_a_pure_function(
            x in -100.0f64..1100.0,
            y in -100.0f64..500.0,
            heading in -10.0f64..10.0,
            speed in 0.0f64..8.0,
        ) {
            let track = rectangle_track();
            let agent = default_agent();
            let v = car(x, y, heading, speed);
            let a = agent.decide_action(&v, &track);
            let b = agent.decide_action(&v, &track);
            prop_assert_eq!(a, b);

            let scores = agent.scores(&v, &track);
            let best = scores.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            let idx = duel_vehicle::SteeringAction::ALL.iter().position(|&s| s == a).unwrap();
            prop_assert_eq!(scores[idx], best);
        }
    }
}
