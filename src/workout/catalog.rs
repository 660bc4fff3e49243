//! Built-in evolutionary workouts
//!
//! Each level ships two to four workouts (ids `<level>-<n>`). A user sees
//! every workout up to their level, with backend workouts appended.

use crate::api::{Workout, WorkoutCategory};
use crate::stats::Level;

use super::tracker::ExercisePlan;

/// Built-in workout definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutData {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub exercises: u32,
    /// Minutes
    pub duration: u32,
    pub xp: u32,
    pub level: u32,
    pub category: WorkoutCategory,
}

macro_rules! workout {
    ($id:literal, $name:literal, $desc:literal, $ex:literal, $dur:literal, $xp:literal, $lvl:literal, $cat:ident) => {
        WorkoutData {
            id: $id,
            name: $name,
            description: $desc,
            exercises: $ex,
            duration: $dur,
            xp: $xp,
            level: $lvl,
            category: WorkoutCategory::$cat,
        }
    };
}

/// All built-in workouts, sorted by level
pub static EVOLUTIONARY_WORKOUTS: &[WorkoutData] = &[
    workout!("1-1", "🦠 First Steps", "Light walk to leave the sedentary life behind", 3, 15, 20, 1, Cardio),
    workout!("1-2", "🦠 Basic Stretching", "Beginner mobility for desk workers", 4, 10, 15, 1, Mobility),
    workout!("2-1", "🐢 Moderate Walk", "Picking up the pace gradually", 4, 20, 30, 2, Cardio),
    workout!("2-2", "🐢 Basic Strength", "First exercises with weights", 5, 25, 35, 2, Strength),
    workout!("3-1", "🐰 Intermediate Cardio", "Light running and aerobic exercises", 5, 25, 40, 3, Cardio),
    workout!("3-2", "🐰 Growing Strength", "Strength training with more intensity", 6, 30, 45, 3, Strength),
    workout!("3-3", "🐰 Basic HIIT", "First interval training", 6, 20, 50, 3, Hiit),
    workout!("4-1", "🐴 Advanced Cardio", "Running and high intensity exercises", 6, 30, 55, 4, Cardio),
    workout!("4-2", "🐴 Solid Strength", "Strength training with heavier loads", 7, 35, 60, 4, Strength),
    workout!("4-3", "🐴 Intermediate HIIT", "More intense interval training", 8, 25, 65, 4, Hiit),
    workout!("5-1", "🦁 Predator Cardio", "High intensity exercises", 7, 35, 70, 5, Cardio),
    workout!("5-2", "🦁 Lion Strength", "Advanced strength training", 8, 40, 75, 5, Strength),
    workout!("5-3", "🦁 Lion HIIT", "High intensity interval training", 9, 30, 80, 5, Hiit),
    workout!("5-4", "🦁 Full Body", "Strength and cardio combined", 10, 45, 90, 5, Mixed),
    workout!("6-1", "🐅 Tiger Agility", "Agility and speed focused training", 8, 30, 85, 6, Hiit),
    workout!("6-2", "🐅 Tiger Strength", "Complex strength training", 9, 45, 90, 6, Strength),
    workout!("6-3", "🐅 Tiger Endurance", "Long duration cardio", 6, 50, 95, 6, Cardio),
    workout!("7-1", "🦅 Eagle Eye", "Precision and control training", 10, 40, 100, 7, Mixed),
    workout!("7-2", "🦅 Eagle Flight", "High altitude cardio", 8, 45, 105, 7, Cardio),
    workout!("7-3", "🦅 Eagle Talons", "Strength and agility combined", 11, 50, 110, 7, Strength),
    workout!("8-1", "🐉 Dragon Fire", "Maximum intensity HIIT", 12, 35, 120, 8, Hiit),
    workout!("8-2", "🐉 Dragon Scales", "Legendary strength", 12, 55, 125, 8, Strength),
    workout!("8-3", "🐉 Dragon Flight", "Supernatural endurance", 10, 60, 130, 8, Cardio),
    workout!("9-1", "🔥 Rebirth", "Total transformation training", 15, 60, 150, 9, Mixed),
    workout!("9-2", "🔥 Eternal Flames", "Intensity that never fades", 14, 45, 145, 9, Hiit),
    workout!("10-1", "⚡ Power of the Gods", "Divine training - max level", 20, 90, 200, 10, Mixed),
    workout!("10-2", "⚡ Titan Thunder", "Supernatural strength", 18, 75, 195, 10, Strength),
    workout!("10-3", "⚡ Divine Lightning", "Speed of the gods", 16, 50, 190, 10, Hiit),
];

/// Built-in workouts of exactly `level` (level 1 set for unknown levels)
pub fn workouts_for_level(level: u32) -> Vec<&'static WorkoutData> {
    let found: Vec<_> = EVOLUTIONARY_WORKOUTS
        .iter()
        .filter(|w| w.level == level)
        .collect();
    if found.is_empty() {
        EVOLUTIONARY_WORKOUTS.iter().filter(|w| w.level == 1).collect()
    } else {
        found
    }
}

/// Built-in workouts for levels `1..=level`
pub fn available_workouts(level: u32) -> Vec<&'static WorkoutData> {
    (1..=level.clamp(1, Level::max_level()))
        .flat_map(workouts_for_level)
        .collect()
}

/// Built-in workout by id
pub fn find_workout(id: &str) -> Option<&'static WorkoutData> {
    EVOLUTIONARY_WORKOUTS.iter().find(|w| w.id == id)
}

/// Where a catalog entry comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutOrigin {
    BuiltIn,
    Remote,
}

/// Workout as shown to the user, built-in or from the backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogWorkout {
    pub id: String,
    pub name: String,
    pub description: String,
    pub exercises: u32,
    pub duration: u32,
    pub xp: u32,
    pub level: u32,
    pub category: WorkoutCategory,
    pub origin: WorkoutOrigin,
}

impl CatalogWorkout {
    /// Backend id, for remote entries only
    pub fn remote_id(&self) -> Option<u64> {
        match self.origin {
            WorkoutOrigin::Remote => self.id.parse().ok(),
            WorkoutOrigin::BuiltIn => None,
        }
    }
}

impl From<&WorkoutData> for CatalogWorkout {
    fn from(w: &WorkoutData) -> Self {
        Self {
            id: w.id.to_string(),
            name: w.name.to_string(),
            description: w.description.to_string(),
            exercises: w.exercises,
            duration: w.duration,
            xp: w.xp,
            level: w.level,
            category: w.category,
            origin: WorkoutOrigin::BuiltIn,
        }
    }
}

impl From<&Workout> for CatalogWorkout {
    fn from(w: &Workout) -> Self {
        Self {
            id: w.id.to_string(),
            name: w.name.clone(),
            description: w.description.clone(),
            exercises: w.exercises_count,
            duration: w.duration,
            xp: w.xp_reward,
            level: w.level,
            category: w.category,
            origin: WorkoutOrigin::Remote,
        }
    }
}

/// Built-in workouts for `level`, then active remote workouts the user has
/// reached
pub fn merge_catalog(level: u32, remote: &[Workout]) -> Vec<CatalogWorkout> {
    available_workouts(level)
        .into_iter()
        .map(CatalogWorkout::from)
        .chain(
            remote
                .iter()
                .filter(|w| w.is_active && w.level <= level)
                .map(CatalogWorkout::from),
        )
        .collect()
}

fn plan(name: &str, sets: u32, reps: u32, weight: f64) -> ExercisePlan {
    ExercisePlan {
        name: name.to_string(),
        sets,
        reps,
        weight,
    }
}

/// Exercise list used when running a workout of `category`
pub fn session_template(category: WorkoutCategory) -> Vec<ExercisePlan> {
    match category {
        WorkoutCategory::Cardio => vec![
            plan("Light Walk", 1, 5, 0.0),
            plan("Treadmill - Moderate Pace", 1, 10, 0.0),
            plan("Stationary Bike", 1, 8, 0.0),
            plan("Elliptical", 1, 6, 0.0),
            plan("Stair Climb", 1, 3, 0.0),
            plan("Cool-down Stretch", 1, 1, 0.0),
        ],
        WorkoutCategory::Strength => vec![
            plan("Bench Press", 3, 12, 40.0),
            plan("Incline Bench Press", 3, 10, 35.0),
            plan("Chest Fly", 3, 15, 15.0),
            plan("Triceps Pushdown", 3, 12, 20.0),
            plan("Biceps Curl", 3, 12, 15.0),
        ],
        WorkoutCategory::Mixed => vec![
            plan("Bodyweight Squat", 3, 15, 0.0),
            plan("Leg Press", 3, 12, 60.0),
            plan("Lunge", 3, 10, 0.0),
            plan("Plank", 3, 30, 0.0),
            plan("Crunch", 3, 15, 0.0),
            plan("Glute Bridge", 3, 12, 0.0),
        ],
        WorkoutCategory::Hiit => vec![
            plan("Burpees", 4, 8, 0.0),
            plan("Mountain Climber", 4, 20, 0.0),
            plan("Jumping Jacks", 4, 30, 0.0),
            plan("Star Jumps", 4, 25, 0.0),
            plan("Jump Squat", 4, 10, 0.0),
            plan("Incline Push-up", 4, 8, 0.0),
            plan("Side Plank", 4, 20, 0.0),
            plan("Active Rest", 4, 1, 0.0),
        ],
        WorkoutCategory::Mobility => vec![
            plan("Neck Stretch", 2, 30, 0.0),
            plan("Shoulder Rolls", 2, 15, 0.0),
            plan("Chest Stretch", 2, 30, 0.0),
            plan("Spine Flexion", 2, 10, 0.0),
            plan("Lower Back Stretch", 2, 30, 0.0),
            plan("Leg Stretch", 2, 20, 0.0),
            plan("Diaphragmatic Breathing", 1, 5, 0.0),
        ],
    }
}
