use std::path::PathBuf;

use clap::Parser;

use crate::error::{Result, SimError};
use crate::export::DEFAULT_OUTPUT_DIR;
use crate::grid::Grid;
use crate::roster::Roster;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Monte Carlo penalty-kick scoring simulator")]
pub struct Args {
    /// Shots per cell, per player
    #[arg(long, default_value_t = 80, env = "PENALTY_SHOTS", allow_negative_numbers = true)]
    pub shots: i64,

    /// Lateral grid points across the goal mouth (>= 2)
    #[arg(long, default_value_t = 5, env = "PENALTY_NX", allow_negative_numbers = true)]
    pub nx: i64,

    /// Height grid points between 0.5 m and 2.5 m (>= 2)
    #[arg(long, default_value_t = 3, env = "PENALTY_NZ", allow_negative_numbers = true)]
    pub nz: i64,

    /// Shot distance in meters
    #[arg(long, default_value_t = 11, env = "PENALTY_DIST", allow_negative_numbers = true)]
    pub dist: i64,

    /// Seed for the random generator; drawn at random when absent
    #[arg(long, env = "PENALTY_SEED")]
    pub seed: Option<u64>,

    /// Directory for the CSV reports
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR, env = "PENALTY_OUT_DIR")]
    pub out_dir: PathBuf,

    /// JSON roster file replacing the built-in players
    #[arg(long, env = "PENALTY_ROSTER")]
    pub roster: Option<PathBuf>,

    /// Skip the ASCII heat maps
    #[arg(long, default_value_t = false)]
    pub no_maps: bool,
}

/// Validated run configuration.
#[derive(Debug, Clone)]
pub struct SimConfig {
    pub shots: u32,
    pub grid: Grid,
    pub seed: Option<u64>,
    pub out_dir: PathBuf,
    pub roster: Roster,
    pub heatmaps: bool,
}

impl SimConfig {
    pub fn from_args(args: &Args) -> Result<Self> {
        let shots = positive_u32("shots", args.shots)?;
        let nx = grid_points("nx", args.nx)?;
        let nz = grid_points("nz", args.nz)?;
        let dist = positive_u32("dist", args.dist)?;
        let grid = Grid::build(nx, nz, vec![dist])?;

        let roster = match &args.roster {
            Some(path) => {
                log::info!("loading roster from {}", path.display());
                Roster::from_json_file(path)?
            }
            None => Roster::default_roster(),
        };

        Ok(Self {
            shots,
            grid,
            seed: args.seed,
            out_dir: args.out_dir.clone(),
            roster,
            heatmaps: !args.no_maps,
        })
    }
}

fn positive_u32(parameter: &'static str, value: i64) -> Result<u32> {
    if value <= 0 {
        return Err(SimError::invalid(parameter, format!("must be > 0, got {value}")));
    }
    u32::try_from(value)
        .map_err(|_| SimError::invalid(parameter, format!("{value} is too large")))
}

fn grid_points(parameter: &'static str, value: i64) -> Result<usize> {
    if value < 2 {
        return Err(SimError::invalid(parameter, format!("must be >= 2, got {value}")));
    }
    usize::try_from(value)
        .map_err(|_| SimError::invalid(parameter, format!("{value} is too large")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> Args {
        let mut argv = vec!["penalty_sim"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).expect("args should parse")
    }

    #[test]
    fn defaults_match_documented_values() {
        let args = parse(&[]);
        let cfg = SimConfig::from_args(&args).unwrap();
        assert_eq!(cfg.shots, 80);
        assert_eq!(cfg.grid.xs.len(), 5);
        assert_eq!(cfg.grid.zs.len(), 3);
        assert_eq!(cfg.grid.distances, vec![11]);
        assert_eq!(cfg.out_dir, PathBuf::from("outputs"));
        assert_eq!(cfg.roster.len(), 10);
        assert!(cfg.heatmaps);
    }

    #[test]
    fn invalid_values_name_the_parameter() {
        for (flags, param) in [
            (vec!["--shots", "0"], "shots"),
            (vec!["--shots", "-5"], "shots"),
            (vec!["--nx", "1"], "nx"),
            (vec!["--nz", "1"], "nz"),
            (vec!["--dist", "0"], "dist"),
        ] {
            let err = SimConfig::from_args(&parse(&flags)).unwrap_err();
            match err {
                SimError::InvalidConfiguration { parameter, .. } => assert_eq!(parameter, param),
                other => panic!("expected InvalidConfiguration, got {other:?}"),
            }
        }
    }

    #[test]
    fn flags_override_defaults() {
        let args = parse(&["--shots", "10", "--nx", "2", "--nz", "2", "--dist", "16", "--seed", "9", "--no-maps"]);
        let cfg = SimConfig::from_args(&args).unwrap();
        assert_eq!(cfg.shots, 10);
        assert_eq!(cfg.grid.total_cells(), 4);
        assert_eq!(cfg.grid.distances, vec![16]);
        assert_eq!(cfg.seed, Some(9));
        assert!(!cfg.heatmaps);
    }
}
