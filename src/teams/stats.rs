use super::{read_dataset, DatasetError};
use crate::models::TeamStatLine;
use crate::utils::comparator::StatKind;
use std::collections::HashMap;
use std::path::Path;

/// Season statistics for every team, loaded once from the static offense
/// and defense datasets and probed by team id during drill-down views.
#[derive(Debug, Clone, Default)]
pub struct TeamStats {
    offense: HashMap<u32, TeamStatLine>,
    defense: HashMap<u32, TeamStatLine>,
}

impl TeamStats {
    pub fn load(offense_path: &Path, defense_path: &Path) -> Result<Self, DatasetError> {
        Ok(Self {
            offense: load_stat_file(offense_path)?,
            defense: load_stat_file(defense_path)?,
        })
    }

    pub fn from_lines(offense: Vec<TeamStatLine>, defense: Vec<TeamStatLine>) -> Self {
        Self {
            offense: index_by_id(offense),
            defense: index_by_id(defense),
        }
    }

    /// The stat line for one team. Teams absent from the dataset get an
    /// all-zero line carrying the requested id.
    pub fn for_team(&self, kind: StatKind, team_id: u32) -> TeamStatLine {
        let table = match kind {
            StatKind::Offense => &self.offense,
            StatKind::Defense => &self.defense,
        };
        table.get(&team_id).cloned().unwrap_or(TeamStatLine {
            id: team_id,
            ..TeamStatLine::default()
        })
    }
}

fn load_stat_file(path: &Path) -> Result<HashMap<u32, TeamStatLine>, DatasetError> {
    let bytes = read_dataset(path)?;
    let lines: Vec<TeamStatLine> =
        serde_json::from_slice(&bytes).map_err(|source| DatasetError::Parse {
            path: path.display().to_string(),
            source,
        })?;
    Ok(index_by_id(lines))
}

fn index_by_id(lines: Vec<TeamStatLine>) -> HashMap<u32, TeamStatLine> {
    lines.into_iter().map(|line| (line.id, line)).collect()
}
