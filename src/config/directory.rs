use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

use crate::domain::AthleteId;

#[derive(Debug, Clone, Deserialize)]
pub struct AthleteConfig {
    pub id: AthleteId,
    pub name: String,
}

/// Maps store athlete ids to display names. Unknown ids get a placeholder label.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "Vec<AthleteConfig>")]
pub struct AthleteDirectory {
    names: HashMap<AthleteId, String>,
}

impl AthleteDirectory {
    pub fn new<I>(athletes: I) -> Self
    where
        I: IntoIterator<Item = (AthleteId, String)>,
    {
        Self {
            names: athletes.into_iter().collect(),
        }
    }

    pub fn name_for(&self, id: AthleteId) -> String {
        self.names
            .get(&id)
            .cloned()
            .unwrap_or_else(|| format!("Athlete {}", id))
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl From<Vec<AthleteConfig>> for AthleteDirectory {
    fn from(athletes: Vec<AthleteConfig>) -> Self {
        Self::new(athletes.into_iter().map(|a| (a.id, a.name)))
    }
}

/// Yearly walk/run targets in kilometres, keyed by display name
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct GoalDirectory {
    goals: BTreeMap<String, f64>,
}

impl GoalDirectory {
    pub fn new<I, S>(goals: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            goals: goals.into_iter().map(|(n, g)| (n.into(), g)).collect(),
        }
    }

    /// Athletes without a configured goal have a goal of zero
    pub fn goal_for(&self, name: &str) -> f64 {
        self.goals.get(name).copied().unwrap_or(0.0)
    }

    pub fn total(&self) -> f64 {
        self.goals.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_athlete_gets_placeholder() {
        let directory = AthleteDirectory::new([(1, "Helle".to_string())]);
        assert_eq!(directory.name_for(1), "Helle");
        assert_eq!(directory.name_for(99), "Athlete 99");
    }

    #[test]
    fn test_goal_lookup_and_total() {
        let goals = GoalDirectory::new([("Kaia", 500.0), ("Jens", 750.0)]);
        assert_eq!(goals.goal_for("Kaia"), 500.0);
        assert_eq!(goals.goal_for("Birgitte"), 0.0);
        assert_eq!(goals.total(), 1250.0);
    }
}
