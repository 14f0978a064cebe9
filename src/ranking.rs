use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};
use crate::model::round_to;
use crate::sampler::SimulationRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub player: String,
    #[serde(rename = "goles_totales")]
    pub total_goals: u64,
    #[serde(rename = "tiros_totales")]
    pub total_shots: u64,
    #[serde(rename = "tasa_empirica")]
    pub empirical_rate: f64,
    #[serde(rename = "tasa_teorica_prom")]
    pub theoretical_avg: f64,
}

#[derive(Default)]
struct Totals {
    goals: u64,
    shots: u64,
    theoretical_sum: f64,
    cells: usize,
}

/// Aggregate per-player totals and order them by empirical rate, best first.
///
/// `players` fixes both the expected player set and the tie-break: entries
/// with equal rates keep the order they have in `players`.
pub fn rank_players<S: AsRef<str>>(
    players: &[S],
    records: &[SimulationRecord],
) -> Result<Vec<RankingEntry>> {
    let mut slot: HashMap<&str, usize> = HashMap::with_capacity(players.len());
    for (idx, name) in players.iter().enumerate() {
        if slot.insert(name.as_ref(), idx).is_some() {
            return Err(SimError::InvariantViolation(format!(
                "player '{}' listed twice",
                name.as_ref()
            )));
        }
    }

    let mut totals: Vec<Totals> = players.iter().map(|_| Totals::default()).collect();
    for r in records {
        let Some(&idx) = slot.get(r.player.as_str()) else {
            return Err(SimError::InvariantViolation(format!(
                "record for unknown player '{}'",
                r.player
            )));
        };
        if r.goals > r.shots {
            return Err(SimError::InvariantViolation(format!(
                "record for '{}' has {} goals from {} shots",
                r.player, r.goals, r.shots
            )));
        }
        let t = &mut totals[idx];
        t.goals += u64::from(r.goals);
        t.shots += u64::from(r.shots);
        t.theoretical_sum += r.theoretical;
        t.cells += 1;
    }

    let mut ranking = Vec::with_capacity(players.len());
    for (name, t) in players.iter().zip(&totals) {
        let name = name.as_ref();
        if t.cells == 0 {
            return Err(SimError::InvariantViolation(format!(
                "player '{name}' has no simulation records"
            )));
        }
        if t.shots == 0 {
            return Err(SimError::invalid(
                "shots",
                format!("player '{name}' has zero total shots"),
            ));
        }
        ranking.push(RankingEntry {
            player: name.to_string(),
            total_goals: t.goals,
            total_shots: t.shots,
            empirical_rate: round_to(t.goals as f64 / t.shots as f64, 4),
            theoretical_avg: round_to(t.theoretical_sum / t.cells as f64, 4),
        });
    }

    // Stable, so equal rates stay in roster order.
    ranking.sort_by(|a, b| b.empirical_rate.total_cmp(&a.empirical_rate));
    Ok(ranking)
}

/// Distinct player names in order of first appearance.
pub fn player_order(records: &[SimulationRecord]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut order = Vec::new();
    for r in records {
        if seen.insert(r.player.as_str()) {
            order.push(r.player.clone());
        }
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(player: &str, goals: u32, shots: u32, theoretical: f64) -> SimulationRecord {
        SimulationRecord {
            player: player.to_string(),
            distance: 11,
            x: 0.0,
            z: 0.5,
            theoretical,
            shots,
            goals,
            empirical: round_to(goals as f64 / shots.max(1) as f64, 4),
        }
    }

    #[test]
    fn totals_and_average() {
        let records = vec![rec("A", 3, 10, 0.5), rec("A", 7, 10, 0.7), rec("B", 1, 10, 0.2)];
        let ranking = rank_players(&["A", "B"], &records).unwrap();
        assert_eq!(ranking[0].player, "A");
        assert_eq!(ranking[0].total_goals, 10);
        assert_eq!(ranking[0].total_shots, 20);
        assert_eq!(ranking[0].empirical_rate, 0.5);
        assert_eq!(ranking[0].theoretical_avg, 0.6);
        assert_eq!(ranking[1].empirical_rate, 0.1);
    }

    #[test]
    fn zero_total_shots_is_configuration_error() {
        let records = vec![rec("A", 0, 0, 0.5)];
        let err = rank_players(&["A"], &records).unwrap_err();
        assert!(matches!(err, SimError::InvalidConfiguration { .. }));
    }

    #[test]
    fn duplicate_roster_name_is_rejected() {
        let records = vec![rec("A", 1, 2, 0.5)];
        assert!(matches!(
            rank_players(&["A", "A"], &records),
            Err(SimError::InvariantViolation(_))
        ));
    }

    #[test]
    fn player_order_follows_first_appearance() {
        let records = vec![rec("C", 1, 2, 0.5), rec("A", 1, 2, 0.5), rec("C", 1, 2, 0.5)];
        assert_eq!(player_order(&records), vec!["C".to_string(), "A".to_string()]);
    }
}
