//! Shareable weekly progress card

use chrono::NaiveDate;

use crate::api::WeeklyProgress;
use crate::stats::UserStats;

/// Sessions per week counted as meeting the goal when none is configured
pub const DEFAULT_WEEKLY_GOAL: u32 = 3;

/// Week numbers shown on the card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeklySummary {
    pub total_sessions: u32,
    pub weekly_goal: u32,
    pub streak_days: u32,
}

impl WeeklySummary {
    pub fn new(total_sessions: u32, streak_days: u32) -> Self {
        Self {
            total_sessions,
            weekly_goal: DEFAULT_WEEKLY_GOAL,
            streak_days,
        }
    }

    pub fn from_remote(progress: &WeeklyProgress) -> Self {
        Self::new(progress.total_sessions, progress.current_streak)
    }

    /// Percent of the weekly goal reached, rounded (may exceed 100)
    pub fn completion_rate(&self) -> u32 {
        if self.weekly_goal == 0 {
            return 100;
        }
        (f64::from(self.total_sessions) / f64::from(self.weekly_goal) * 100.0).round() as u32
    }

    pub fn goal_reached(&self) -> bool {
        self.total_sessions >= self.weekly_goal
    }

    /// Sessions still missing to reach the goal
    pub fn remaining(&self) -> u32 {
        self.weekly_goal.saturating_sub(self.total_sessions)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareCard {
    pub level: u32,
    pub xp: u32,
    pub achievements: usize,
    pub week: WeeklySummary,
    pub date: NaiveDate,
}

impl ShareCard {
    pub fn new(stats: &UserStats, week: WeeklySummary, date: NaiveDate) -> Self {
        Self {
            level: stats.level,
            xp: stats.xp,
            achievements: stats.unlocked_count(),
            week,
            date,
        }
    }

    pub fn title(&self) -> &'static str {
        "My CirquloFit Progress"
    }

    pub fn text(&self) -> String {
        format!(
            "🔥 I completed {} workouts this week on CirquloFit! Level {} with {} XP! 💪",
            self.week.total_sessions, self.level, self.xp
        )
    }

    /// Suggested image file name, e.g. `cirqulofit-progress-2024-03-09.png`
    pub fn file_name(&self) -> String {
        format!("cirqulofit-progress-{}.png", self.date.format("%Y-%m-%d"))
    }

    /// Plain-text rendering of the card
    pub fn render(&self) -> String {
        let goal_line = if self.week.goal_reached() {
            "🎉 Weekly goal reached!".to_string()
        } else {
            format!("🔥 {} more sessions to reach your goal!", self.week.remaining())
        };

        format!(
            "CirquloFit - {}\n\
             Workouts this week: {} of {} ({}%)\n\
             Streak: {} days\n\
             Level {} • {} XP • {} achievements\n\
             {}",
            self.title(),
            self.week.total_sessions,
            self.week.weekly_goal,
            self.week.completion_rate(),
            self.week.streak_days,
            self.level,
            self.xp,
            self.achievements,
            goal_line
        )
    }
}
