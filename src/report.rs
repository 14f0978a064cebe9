use std::collections::HashMap;

use crate::grid::Grid;
use crate::ranking::RankingEntry;
use crate::sampler::SimulationRecord;

/// (player, distance, x in cm, z in cm). Grid offsets are rounded to two
/// decimals, so hundredths identify a cell exactly.
type CellKey<'a> = (&'a str, u32, i64, i64);

fn centi(v: f64) -> i64 {
    (v * 100.0).round() as i64
}

/// Direct lookup from cell to record, built once per run.
pub struct CellIndex<'a> {
    cells: HashMap<CellKey<'a>, &'a SimulationRecord>,
}

impl<'a> CellIndex<'a> {
    pub fn new(records: &'a [SimulationRecord]) -> Self {
        let cells = records
            .iter()
            .map(|r| ((r.player.as_str(), r.distance, centi(r.x), centi(r.z)), r))
            .collect();
        Self { cells }
    }

    pub fn get(&self, player: &str, distance: u32, x: f64, z: f64) -> Option<&'a SimulationRecord> {
        self.cells
            .get(&(player, distance, centi(x), centi(z)))
            .copied()
    }
}

pub fn render_heatmap(
    index: &CellIndex<'_>,
    player: &str,
    distance: u32,
    xs: &[f64],
    zs: &[f64],
) -> String {
    let header = format!(
        "z/x | {}",
        xs.iter().map(|x| format!("{x:6.2}")).collect::<Vec<_>>().join("  ")
    );

    let rule = "-".repeat(header.chars().count());
    let mut lines = vec![
        format!("=== HEAT MAP - {player} - distance {distance} m ==="),
        header,
        rule,
    ];

    for &z in zs {
        let mut row = vec![format!("{z:4.2} | ")];
        for &x in xs {
            match index.get(player, distance, x, z) {
                Some(r) => row.push(format!("{:6.1}", r.empirical * 100.0)),
                None => row.push("  --- ".to_string()),
            }
        }
        lines.push(row.join(" "));
    }
    lines.join("\n")
}

/// One map per (distance, player), distances outermost.
pub fn render_heatmaps<S: AsRef<str>>(
    records: &[SimulationRecord],
    players: &[S],
    distances: &[u32],
    xs: &[f64],
    zs: &[f64],
) -> Vec<String> {
    let index = CellIndex::new(records);
    let mut maps = Vec::with_capacity(distances.len() * players.len());
    for &distance in distances {
        for player in players {
            maps.push(render_heatmap(&index, player.as_ref(), distance, xs, zs));
        }
    }
    maps
}

pub fn render_banner(players: usize, grid: &Grid, shots: u32, seed: u64) -> String {
    [
        "=== STARTING SIMULATION ===".to_string(),
        format!("Players: {players}"),
        format!(
            "Cells per distance: {} x {} = {}",
            grid.xs.len(),
            grid.zs.len(),
            grid.cells_per_distance()
        ),
        format!("Shots per cell (per player): {shots}"),
        format!("Seed: {seed}"),
        "-".repeat(36),
    ]
    .join("\n")
}

pub fn leaderboard_line(position: usize, entry: &RankingEntry) -> String {
    format!(
        "{:2}. {:10} - EmpRate: {:6.2}%  (goals={}, shots={})",
        position,
        entry.player,
        entry.empirical_rate * 100.0,
        entry.total_goals,
        entry.total_shots
    )
}

pub fn render_leaderboard(ranking: &[RankingEntry]) -> String {
    ranking
        .iter()
        .enumerate()
        .map(|(i, entry)| leaderboard_line(i + 1, entry))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Sorted distinct values of one record axis, for rebuilding a grid from a
/// detail file.
pub fn axis_values(records: &[SimulationRecord], axis: impl Fn(&SimulationRecord) -> f64) -> Vec<f64> {
    let mut values: Vec<f64> = records.iter().map(axis).collect();
    values.sort_by(f64::total_cmp);
    values.dedup_by(|a, b| centi(*a) == centi(*b));
    values
}

pub fn distances_of(records: &[SimulationRecord]) -> Vec<u32> {
    let mut ds: Vec<u32> = records.iter().map(|r| r.distance).collect();
    ds.sort_unstable();
    ds.dedup();
    ds
}
