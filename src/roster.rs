use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub skill: f64,
    pub pressure: f64,
}

impl Player {
    pub fn new(name: impl Into<String>, skill: f64, pressure: f64) -> Self {
        Self {
            name: name.into(),
            skill,
            pressure,
        }
    }
}

/// Ordered set of shooters. Position in the roster breaks ranking ties.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    players: Vec<Player>,
}

const DEFAULT_ROSTER: &[(&str, f64, f64)] = &[
    ("Lionel", 0.92, 0.03),
    ("Rafael", 0.85, 0.04),
    ("Carlos", 0.78, 0.05),
    ("Hector", 0.74, 0.06),
    ("Diego", 0.70, 0.07),
    ("Marco", 0.68, 0.05),
    ("Pablo", 0.66, 0.06),
    ("Andres", 0.64, 0.07),
    ("Javier", 0.60, 0.08),
    ("Luis", 0.58, 0.09),
];

impl Roster {
    pub fn new(players: Vec<Player>) -> Result<Self> {
        if players.is_empty() {
            return Err(SimError::invalid("roster", "must contain at least one player"));
        }
        let mut seen: HashSet<&str> = HashSet::new();
        for p in &players {
            if p.name.trim().is_empty() {
                return Err(SimError::invalid("roster", "player name must not be empty"));
            }
            if !seen.insert(p.name.as_str()) {
                return Err(SimError::invalid(
                    "roster",
                    format!("duplicate player name '{}'", p.name),
                ));
            }
            if !open_unit(p.skill) {
                return Err(SimError::invalid(
                    "roster",
                    format!("skill of '{}' must be in (0, 1), got {}", p.name, p.skill),
                ));
            }
            if !open_unit(p.pressure) {
                return Err(SimError::invalid(
                    "roster",
                    format!("pressure of '{}' must be in (0, 1), got {}", p.name, p.pressure),
                ));
            }
        }
        Ok(Self { players })
    }

    pub fn default_roster() -> Self {
        Self {
            players: DEFAULT_ROSTER
                .iter()
                .map(|(name, skill, pressure)| Player::new(*name, *skill, *pressure))
                .collect(),
        }
    }

    /// Loads a JSON array of `{ "name", "skill", "pressure" }` objects.
    pub fn from_json_str(raw: &str, origin: &Path) -> Result<Self> {
        let players: Vec<Player> = serde_json::from_str(raw).map_err(|source| SimError::Roster {
            path: origin.to_path_buf(),
            source,
        })?;
        Self::new(players)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| SimError::io(path, e))?;
        Self::from_json_str(&raw, path)
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn names(&self) -> Vec<&str> {
        self.players.iter().map(|p| p.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

fn open_unit(v: f64) -> bool {
    v > 0.0 && v < 1.0
}
