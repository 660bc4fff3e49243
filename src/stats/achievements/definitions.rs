//! Achievement definitions and metadata
//!
//! Unlock conditions live in the checker; this file only carries display data.

use std::fmt;

/// Unique identifier for each achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AchievementId {
    FirstWorkout,
    Streak7,
    Level5,
    Workout10,
    Streak30,
}

impl AchievementId {
    /// Get the string ID used in snapshots
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstWorkout => "first_workout",
            Self::Streak7 => "streak_7",
            Self::Level5 => "level_5",
            Self::Workout10 => "workout_10",
            Self::Streak30 => "streak_30",
        }
    }

    /// Parse from snapshot string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "first_workout" => Some(Self::FirstWorkout),
            "streak_7" => Some(Self::Streak7),
            "level_5" => Some(Self::Level5),
            "workout_10" => Some(Self::Workout10),
            "streak_30" => Some(Self::Streak30),
            _ => None,
        }
    }

    /// Get all achievement IDs in catalog order
    pub fn all() -> &'static [AchievementId] {
        &[
            Self::FirstWorkout,
            Self::Streak7,
            Self::Level5,
            Self::Workout10,
            Self::Streak30,
        ]
    }
}

impl fmt::Display for AchievementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Achievement definition with all metadata
#[derive(Debug, Clone)]
pub struct Achievement {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// All achievement definitions
pub static ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: AchievementId::FirstWorkout,
        name: "First Step",
        description: "Left the sedentary life - first workout!",
        icon: "🚀",
    },
    Achievement {
        id: AchievementId::Streak7,
        name: "Consistency",
        description: "7 days of activity in a row",
        icon: "🔥",
    },
    Achievement {
        id: AchievementId::Level5,
        name: "Determined",
        description: "Reach level 5 - stamina improving!",
        icon: "⭐",
    },
    Achievement {
        id: AchievementId::Workout10,
        name: "Dedicated",
        description: "10 workouts completed - lean mass growing!",
        icon: "💪",
    },
    Achievement {
        id: AchievementId::Streak30,
        name: "Master",
        description: "30 days of transformation - a new lifestyle!",
        icon: "👑",
    },
];

impl Achievement {
    /// Get achievement definition by ID
    pub fn get(id: AchievementId) -> &'static Achievement {
        ACHIEVEMENTS
            .iter()
            .find(|a| a.id == id)
            .expect("All achievements should be defined")
    }

    /// Get total number of achievements
    pub fn total_count() -> usize {
        ACHIEVEMENTS.len()
    }
}
