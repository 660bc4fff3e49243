//! Level table and XP rules
//!
//! Levels are themed tiers (Amoeba to Titan) unlocked by completed workout
//! sessions. XP feeds a second tier (`xp / 100 + 1`); the effective level is
//! the higher of the two, see [`derive_level`].

/// Level definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    pub level: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub emoji: &'static str,
    pub color: &'static str,
    /// Completed sessions needed to reach this level
    pub required_sessions: u32,
    /// Sessions between this level and the next one (0 at max level)
    pub next_level_sessions: u32,
}

/// All level definitions (must be sorted by level, contiguous from 1)
pub static LEVELS: &[Level] = &[
    Level {
        level: 1,
        name: "Amoeba",
        description: "Left the couch behind - first steps!",
        emoji: "🦠",
        color: "#8B5CF6",
        required_sessions: 0,
        next_level_sessions: 5,
    },
    Level {
        level: 2,
        name: "Turtle",
        description: "Slow but steady movement",
        emoji: "🐢",
        color: "#10B981",
        required_sessions: 5,
        next_level_sessions: 10,
    },
    Level {
        level: 3,
        name: "Rabbit",
        description: "Gained agility and stamina",
        emoji: "🐰",
        color: "#F59E0B",
        required_sessions: 15,
        next_level_sessions: 15,
    },
    Level {
        level: 4,
        name: "Horse",
        description: "Strength and endurance building up",
        emoji: "🐴",
        color: "#EF4444",
        required_sessions: 30,
        next_level_sessions: 20,
    },
    Level {
        level: 5,
        name: "Lion",
        description: "Predator of the sedentary life",
        emoji: "🦁",
        color: "#F97316",
        required_sessions: 50,
        next_level_sessions: 25,
    },
    Level {
        level: 6,
        name: "Tiger",
        description: "Agility and strength combined",
        emoji: "🐅",
        color: "#DC2626",
        required_sessions: 75,
        next_level_sessions: 30,
    },
    Level {
        level: 7,
        name: "Eagle",
        description: "Long-term vision and discipline",
        emoji: "🦅",
        color: "#7C3AED",
        required_sessions: 105,
        next_level_sessions: 35,
    },
    Level {
        level: 8,
        name: "Dragon",
        description: "Legendary - rules over the sedentary life",
        emoji: "🐉",
        color: "#BE185D",
        required_sessions: 140,
        next_level_sessions: 40,
    },
    Level {
        level: 9,
        name: "Phoenix",
        description: "Reborn stronger after every workout",
        emoji: "🔥",
        color: "#F59E0B",
        required_sessions: 180,
        next_level_sessions: 50,
    },
    Level {
        level: 10,
        name: "Titan",
        description: "Fitness deity - maximum level",
        emoji: "⚡",
        color: "#FBBF24",
        required_sessions: 230,
        next_level_sessions: 0,
    },
];

impl Level {
    /// Definition for `level`, or the level 1 definition for unknown levels
    pub fn info(level: u32) -> &'static Level {
        LEVELS
            .iter()
            .find(|l| l.level == level)
            .unwrap_or(&LEVELS[0])
    }

    /// Definition for `level + 1` (None at max level)
    pub fn next(level: u32) -> Option<&'static Level> {
        let next = level.checked_add(1)?;
        LEVELS.iter().find(|l| l.level == next)
    }

    /// Highest level whose session threshold is met
    pub fn for_sessions(total_sessions: u32) -> &'static Level {
        LEVELS
            .iter()
            .rev()
            .find(|l| total_sessions >= l.required_sessions)
            .unwrap_or(&LEVELS[0])
    }

    /// Progress towards the next level as a percentage in `[0, 100]`.
    ///
    /// Level 0 is measured against the level 1 thresholds. Any level without
    /// a next level (the max level and anything above the table) reports 100.
    pub fn progress(total_sessions: u32, current_level: u32) -> f64 {
        let current_level = current_level.max(1);
        let Some(next) = Self::next(current_level) else {
            return 100.0;
        };
        let info = Self::info(current_level);

        let done = f64::from(total_sessions) - f64::from(info.required_sessions);
        let needed = f64::from(next.required_sessions - info.required_sessions);

        (done / needed * 100.0).clamp(0.0, 100.0)
    }

    /// Get max level
    pub fn max_level() -> u32 {
        LEVELS.last().map(|l| l.level).unwrap_or(1)
    }
}

/// XP needed per XP tier
pub const XP_PER_LEVEL: u32 = 100;

/// Tier reached by raw XP: `xp / 100 + 1`, unbounded
pub fn level_for_xp(xp: u32) -> u32 {
    xp / XP_PER_LEVEL + 1
}

/// The single leveling rule.
///
/// The level is the highest of the current level, the XP tier and the
/// session tier from [`LEVELS`]. Both inputs only grow, so the level never
/// goes down within a session.
pub fn derive_level(current: u32, xp: u32, total_sessions: u32) -> u32 {
    current
        .max(level_for_xp(xp))
        .max(Level::for_sessions(total_sessions).level)
}

/// XP left until the next XP tier boundary of `level`
pub fn xp_to_next_level(level: u32, xp: u32) -> u32 {
    level.saturating_mul(XP_PER_LEVEL).saturating_sub(xp)
}

/// XP rewards for workout actions
pub struct XpRewards;

impl XpRewards {
    /// XP for starting a workout session
    pub const WORKOUT_STARTED: u32 = 10;

    /// XP for each completed set
    pub const SET_DONE: u32 = 5;

    /// Bonus for finishing an exercise in a tracked session
    pub const EXERCISE_DONE: u32 = 15;

    /// XP the engine grants inside `complete_exercise`
    pub const EXERCISE_BASE: u32 = 10;

    /// XP for finishing a whole workout
    pub const WORKOUT_DONE: u32 = 100;
}
