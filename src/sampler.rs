use rand::Rng;
use rand::distributions::{Bernoulli, Distribution};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};
use crate::model::{adjusted_probability, round_to, theoretical_probability};
use crate::roster::Player;

/// One player's outcome at one cell. Field names on disk follow the
/// detail report columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRecord {
    pub player: String,
    pub distance: u32,
    pub x: f64,
    pub z: f64,
    #[serde(rename = "p_teorica")]
    pub theoretical: f64,
    #[serde(rename = "tiros")]
    pub shots: u32,
    #[serde(rename = "goles")]
    pub goals: u32,
    #[serde(rename = "p_empirica")]
    pub empirical: f64,
}

pub fn sample_cell<R: Rng + ?Sized>(
    player: &Player,
    distance: u32,
    x: f64,
    z: f64,
    shot_count: u32,
    rng: &mut R,
) -> Result<SimulationRecord> {
    if shot_count == 0 {
        return Err(SimError::invalid("shots", "must be > 0"));
    }

    let p_teo = theoretical_probability(player.skill, distance as f64, x, z);
    let p_real = adjusted_probability(p_teo, player.pressure);
    let trial = Bernoulli::new(p_real).map_err(|e| {
        SimError::InvariantViolation(format!("adjusted probability {p_real} rejected: {e}"))
    })?;

    let goals = (0..shot_count).filter(|_| trial.sample(&mut *rng)).count() as u32;

    Ok(SimulationRecord {
        player: player.name.clone(),
        distance,
        x,
        z,
        theoretical: round_to(p_teo, 4),
        shots: shot_count,
        goals,
        empirical: round_to(goals as f64 / shot_count as f64, 4),
    })
}
