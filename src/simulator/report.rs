//! Simulation report generation.

use serde::Serialize;

use super::runner::RunStats;

/// Aggregated results from a simulation batch.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub victories: u32,
    pub defeats: u32,
    pub timeouts: u32,
    pub win_rate_percent: f64,

    // Aggregated per-run averages
    pub avg_turns: f64,
    pub avg_turns_to_win: f64,
    pub avg_combos_per_turn: f64,
    pub max_combo: u32,
    pub avg_skill_casts: f64,
    pub avg_monsters_slain: f64,
    pub avg_damage_dealt: f64,
    pub avg_damage_taken: f64,
    pub avg_healing_done: f64,

    /// Individual run stats for detailed analysis (not serialized).
    #[serde(skip_serializing)]
    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Aggregate completed run stats into a report.
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        let denom = (num_runs as f64).max(1.0);

        let victories = runs.iter().filter(|r| r.won).count() as u32;
        let defeats = runs.iter().filter(|r| r.defeated).count() as u32;
        let timeouts = runs.iter().filter(|r| r.timed_out).count() as u32;

        let total_turns: u64 = runs.iter().map(|r| r.turns).sum();
        let total_combos: u64 = runs.iter().map(|r| r.total_combos).sum();

        let avg_turns_to_win = runs
            .iter()
            .filter(|r| r.won)
            .map(|r| r.turns as f64)
            .sum::<f64>()
            / (victories.max(1) as f64);

        Self {
            num_runs,
            victories,
            defeats,
            timeouts,
            win_rate_percent: victories as f64 / denom * 100.0,
            avg_turns: total_turns as f64 / denom,
            avg_turns_to_win,
            avg_combos_per_turn: total_combos as f64 / (total_turns as f64).max(1.0),
            max_combo: runs.iter().map(|r| r.max_combo).max().unwrap_or(0),
            avg_skill_casts: runs.iter().map(|r| r.skill_casts as f64).sum::<f64>() / denom,
            avg_monsters_slain: runs.iter().map(|r| r.monsters_slain as f64).sum::<f64>()
                / denom,
            avg_damage_dealt: runs.iter().map(|r| r.damage_dealt as f64).sum::<f64>() / denom,
            avg_damage_taken: runs.iter().map(|r| r.damage_taken as f64).sum::<f64>() / denom,
            avg_healing_done: runs.iter().map(|r| r.healing_done as f64).sum::<f64>() / denom,
            run_stats: runs,
        }
    }

    /// Generate the human-readable summary.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!("Encounters:        {}\n", self.num_runs));
        report.push_str(&format!(
            "Victories:         {} ({:.1}%)\n",
            self.victories, self.win_rate_percent
        ));
        report.push_str(&format!("Defeats:           {}\n", self.defeats));
        report.push_str(&format!("Timeouts:          {}\n\n", self.timeouts));

        report.push_str(&format!("Avg turns:         {:.1}\n", self.avg_turns));
        report.push_str(&format!(
            "Avg turns to win:  {:.1}\n",
            self.avg_turns_to_win
        ));
        report.push_str(&format!(
            "Combos per turn:   {:.2}\n",
            self.avg_combos_per_turn
        ));
        report.push_str(&format!("Longest combo:     {}\n", self.max_combo));
        report.push_str(&format!(
            "Avg skill casts:   {:.1}\n\n",
            self.avg_skill_casts
        ));

        report.push_str(&format!(
            "Avg monsters slain: {:.2} / 5\n",
            self.avg_monsters_slain
        ));
        report.push_str(&format!(
            "Avg damage dealt:   {:.0}\n",
            self.avg_damage_dealt
        ));
        report.push_str(&format!(
            "Avg damage taken:   {:.0}\n",
            self.avg_damage_taken
        ));
        report.push_str(&format!(
            "Avg healing done:   {:.0}\n",
            self.avg_healing_done
        ));

        // Balance warnings
        if self.win_rate_percent < 20.0 {
            report.push_str("\n  ⚠️  Win rate very low - roster too punishing?\n");
        }
        if self.win_rate_percent > 95.0 {
            report.push_str("\n  ⚠️  Win rate near 100% - roster poses no threat?\n");
        }
        if self.timeouts > 0 {
            report.push_str("\n  ⚠️  Timeouts occurred - policy stuck or turn cap too low\n");
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");
        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
