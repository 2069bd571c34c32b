use anyhow::{Context, Result};
use colored::{ColoredString, Colorize};

use crate::aggregation::{Aggregator, Board, Dashboard, ShirtHolder, TeamProgress};
use crate::config::settings::AppConfig;
use crate::domain::{GoalAnnotatedEntry, LeaderboardEntry, MonthlyPoint, ProgressTier};
use crate::store::{ActivityStore, Store};

/// Prints dashboard views to the terminal
pub struct ReportService<S> {
    aggregator: Aggregator<S>,
}

impl ReportService<Store> {
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let store = Store::from_settings(&config.store)?;
        Ok(Self::new(Aggregator::new(store, config)))
    }
}

impl<S: ActivityStore> ReportService<S> {
    pub fn new(aggregator: Aggregator<S>) -> Self {
        Self { aggregator }
    }

    pub async fn run(&self, json: bool) -> Result<()> {
        let dashboard = self
            .aggregator
            .dashboard()
            .await
            .context("Failed to load dashboard")?;

        if json {
            println!("{}", serde_json::to_string_pretty(&dashboard)?);
        } else {
            println!("{}", render_dashboard(self.aggregator.window().year(), &dashboard));
        }
        Ok(())
    }

    pub async fn run_board(&self, board: Board) -> Result<()> {
        let entries = self
            .aggregator
            .board(board)
            .await
            .with_context(|| format!("Failed to load {} leaderboard", board.slug()))?;

        println!("{}", render_board(board, &entries));
        Ok(())
    }
}

pub fn render_dashboard(year: i32, dashboard: &Dashboard) -> String {
    let mut sections = vec![
        format!("Challenge {}", year).bold().to_string(),
        render_team(&dashboard.team),
        render_monthly(&dashboard.monthly),
        render_shirt("Yellow shirt (distance)", "km", dashboard.shirts.distance.as_ref()),
        render_shirt("Polka dot shirt (elevation)", "m", dashboard.shirts.elevation.as_ref()),
        render_goals(&dashboard.goals),
    ];

    let boards = [
        (Board::WalkRun, &dashboard.walk_run),
        (Board::Elevation, &dashboard.elevation),
        (Board::Bike, &dashboard.bike),
        (Board::Skiing, &dashboard.skiing),
        (Board::Strength, &dashboard.strength),
    ];
    sections.extend(boards.iter().map(|(board, entries)| render_board(*board, entries)));

    sections.join("\n\n")
}

fn render_team(team: &TeamProgress) -> String {
    format!(
        "{}\n  {:.1} / {:.0} km ({:.1}%), {:.1} km to go",
        "Team progress".bold(),
        team.total_km,
        team.goal_km,
        team.percentage,
        team.remaining
    )
}

fn render_monthly(points: &[MonthlyPoint]) -> String {
    let mut lines = vec!["Road to finish".bold().to_string()];
    lines.extend(points.iter().map(|p| {
        let marker = if p.cumulative_actual >= p.cumulative_target {
            "ahead".green()
        } else {
            "behind".red()
        };
        format!(
            "  {:<4}{:>10.1}{:>10.1}  {}",
            p.month_label, p.cumulative_actual, p.cumulative_target, marker
        )
    }));
    lines.join("\n")
}

fn render_shirt(title: &str, unit: &str, holder: Option<&ShirtHolder>) -> String {
    let Some(holder) = holder else {
        return format!("{}\n  No data yet", title.bold());
    };

    let mut lines = vec![
        title.bold().to_string(),
        format!("  {} {:.1} {}", holder.leader.name.yellow(), holder.leader.value, unit),
    ];

    match (&holder.runner_up, holder.gap_percent) {
        (Some(second), Some(gap)) => lines.push(format!(
            "  Closest challenger: {} {:.1} {} ({:.1}% behind)",
            second.name, second.value, unit, gap
        )),
        (Some(second), None) => lines.push(format!(
            "  Closest challenger: {} {:.1} {}",
            second.name, second.value, unit
        )),
        (None, _) => lines.push("  No challenger yet".italic().to_string()),
    }

    lines.join("\n")
}

fn render_goals(entries: &[GoalAnnotatedEntry]) -> String {
    let mut lines = vec!["Personal goals (walk/run)".bold().to_string()];
    if entries.is_empty() {
        lines.push("  No data yet".to_string());
    }

    lines.extend(entries.iter().map(|e| {
        format!(
            "  {:<14}{:>9.1} / {:<6.0} km {:>6}  {}",
            e.name,
            e.value,
            e.goal,
            format!("{:.1}%", e.percentage),
            tier_label(e.progress_tier)
        )
    }));
    lines.join("\n")
}

fn tier_label(tier: ProgressTier) -> ColoredString {
    match tier {
        ProgressTier::Achieved => tier.as_str().green(),
        ProgressTier::High => tier.as_str().cyan(),
        ProgressTier::Medium => tier.as_str().yellow(),
        ProgressTier::Low => tier.as_str().red(),
    }
}

pub fn render_board(board: Board, entries: &[LeaderboardEntry]) -> String {
    let mut lines = vec![board.title().bold().to_string()];
    if entries.is_empty() {
        lines.push("  No data yet".to_string());
    }

    lines.extend(entries.iter().enumerate().map(|(idx, e)| {
        format!("  {:>2}. {:<14}{:>10} {}", idx + 1, e.name, format_value(board, e.value), board.unit())
    }));
    lines.join("\n")
}

fn format_value(board: Board, value: f64) -> String {
    match board {
        Board::Elevation | Board::Strength => format!("{:.0}", value),
        _ => format!("{:.1}", value),
    }
}
