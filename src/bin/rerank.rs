use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};

use penalty_sim::{export, ranking, report};

// Rebuilds heat maps and the leaderboard from a detail CSV written by an
// earlier run, without simulating again.
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .ok_or_else(|| anyhow!("usage: rerank <detalle_*.csv>"))?;

    let records = export::read_detail_csv(&path)
        .with_context(|| format!("reading {}", path.display()))?;
    if records.is_empty() {
        return Err(anyhow!("{} has no rows", path.display()));
    }

    let players = ranking::player_order(&records);
    let ranking = ranking::rank_players(&players, &records)?;
    log::info!("{} records for {} players", records.len(), players.len());

    let xs = report::axis_values(&records, |r| r.x);
    let zs = report::axis_values(&records, |r| r.z);
    let distances = report::distances_of(&records);

    for map in report::render_heatmaps(&records, &players, &distances, &xs, &zs) {
        println!();
        println!("{map}");
    }

    println!();
    println!("=== RANKING ===");
    println!("{}", report::render_leaderboard(&ranking));
    Ok(())
}
