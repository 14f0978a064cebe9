use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use penalty_sim::config::{Args, SimConfig};
use penalty_sim::{export, ranking, report, simulation};

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let cfg = SimConfig::from_args(&args).context("refusing to start simulation")?;

    let seed = cfg.seed.unwrap_or_else(|| rand::thread_rng().next_u64());
    log::info!("rng seed {seed} (pass --seed {seed} to reproduce this run)");
    let mut rng = StdRng::seed_from_u64(seed);

    let grid = &cfg.grid;
    println!();
    println!("{}", report::render_banner(cfg.roster.len(), grid, cfg.shots, seed));

    let records = simulation::run_simulation(&cfg.roster, grid, cfg.shots, &mut rng, |p| {
        println!();
        println!("Simulating player {}/{}: {} (skill={})", p.current, p.total, p.player, p.skill);
    })
    .context("simulation aborted")?;

    let names = cfg.roster.names();
    let ranking = ranking::rank_players(&names, &records).context("ranking failed")?;

    let timestamp = export::run_timestamp();
    let paths = export::save_reports(&cfg.out_dir, &timestamp, &records, &ranking)
        .with_context(|| format!("writing reports under {}", cfg.out_dir.display()))?;
    log::info!("{} detail rows, {} ranking rows written", records.len(), ranking.len());

    println!();
    println!("=== RESULTS SAVED ===");
    println!("{}", paths.detail.display());
    println!("{}", paths.ranking.display());

    if cfg.heatmaps {
        for map in report::render_heatmaps(&records, &names, &grid.distances, &grid.xs, &grid.zs) {
            println!();
            println!("{map}");
        }
    }

    println!();
    println!("=== RANKING ===");
    println!("{}", report::render_leaderboard(&ranking));

    println!();
    println!("=== DONE ===");
    Ok(())
}
