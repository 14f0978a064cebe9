use rand::Rng;

use crate::error::Result;
use crate::grid::Grid;
use crate::roster::Roster;
use crate::sampler::{SimulationRecord, sample_cell};

pub struct SimulationProgress<'a> {
    pub current: usize,
    pub total: usize,
    pub player: &'a str,
    pub skill: f64,
}

/// Runs every player over every cell (player, then distance, then x, then z)
/// and returns the records in that order. The first sampler error aborts.
pub fn run_simulation<R: Rng + ?Sized>(
    roster: &Roster,
    grid: &Grid,
    shot_count: u32,
    rng: &mut R,
    mut on_progress: impl FnMut(SimulationProgress<'_>),
) -> Result<Vec<SimulationRecord>> {
    let total = roster.len();
    let mut records = Vec::with_capacity(total * grid.total_cells());

    for (idx, player) in roster.players().iter().enumerate() {
        on_progress(SimulationProgress {
            current: idx + 1,
            total,
            player: &player.name,
            skill: player.skill,
        });

        for &distance in &grid.distances {
            for &x in &grid.xs {
                for &z in &grid.zs {
                    records.push(sample_cell(player, distance, x, z, shot_count, rng)?);
                }
            }
        }
        log::debug!("simulated {} ({}/{})", player.name, idx + 1, total);
    }

    Ok(records)
}
