use std::collections::HashMap;

use crate::config::{AthleteDirectory, GoalDirectory};
use crate::domain::{
    ActivityRecord, AthleteId, GoalAnnotatedEntry, GoalProgress, LeaderboardEntry, ValueField,
};

/// Sum `field` per athlete and rank descending. Athletes keep the order in which
/// they were first seen when their values tie.
pub fn rank_athletes(
    records: &[ActivityRecord],
    field: ValueField,
    athletes: &AthleteDirectory,
) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = group_totals(records, field)
        .into_iter()
        .map(|(id, total)| LeaderboardEntry::new(athletes.name_for(id), field.round(total)))
        .collect();

    sort_descending(&mut entries, |e| e.value);
    entries
}

fn group_totals(records: &[ActivityRecord], field: ValueField) -> Vec<(AthleteId, f64)> {
    let mut totals: Vec<(AthleteId, f64)> = Vec::new();
    let mut index: HashMap<AthleteId, usize> = HashMap::new();

    for record in records {
        let value = record.value_of(field);
        match index.get(&record.athlete_id) {
            Some(&slot) => totals[slot].1 += value,
            None => {
                index.insert(record.athlete_id, totals.len());
                totals.push((record.athlete_id, value));
            }
        }
    }

    totals
}

/// Attach goal progress to each entry. Rank stays by raw value.
pub fn annotate_with_goals(
    entries: Vec<LeaderboardEntry>,
    goals: &GoalDirectory,
) -> Vec<GoalAnnotatedEntry> {
    let mut annotated: Vec<GoalAnnotatedEntry> = entries
        .into_iter()
        .map(|entry| {
            let goal = goals.goal_for(&entry.name);
            let progress = GoalProgress::derive(entry.value, goal);
            GoalAnnotatedEntry {
                name: entry.name,
                value: entry.value,
                goal,
                percentage: progress.percentage,
                remaining: progress.remaining,
                progress_tier: progress.tier,
            }
        })
        .collect();

    sort_descending(&mut annotated, |e| e.value);
    annotated
}

fn sort_descending<T>(items: &mut [T], key: impl Fn(&T) -> f64) {
    items.sort_by(|a, b| key(b).total_cmp(&key(a)));
}
