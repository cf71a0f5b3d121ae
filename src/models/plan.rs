use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Estimated calories assumed when the plan does not state a number
pub const DEFAULT_ESTIMATED_CALORIES: u32 = 300;

/// Exercise difficulty as labelled by the generator.
///
/// Labels outside the four known levels are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    AllLevels,
    Other(String),
}

impl Difficulty {
    pub fn as_str(&self) -> &str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
            Difficulty::AllLevels => "All Levels",
            Difficulty::Other(label) => label,
        }
    }
}

impl From<&str> for Difficulty {
    fn from(label: &str) -> Self {
        match label {
            "Beginner" => Difficulty::Beginner,
            "Intermediate" => Difficulty::Intermediate,
            "Advanced" => Difficulty::Advanced,
            "All Levels" => Difficulty::AllLevels,
            other => Difficulty::Other(other.to_string()),
        }
    }
}

impl From<String> for Difficulty {
    fn from(label: String) -> Self {
        Difficulty::from(label.as_str())
    }
}

impl From<Difficulty> for String {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.as_str().to_string()
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    pub target_muscles: String,
    pub difficulty: Difficulty,
    pub sets: String,
    pub reps: String,
    /// Demonstration link, "Watch" when the generator left it empty
    pub video: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSection {
    pub focus: String,
    /// Display order, also the index order of the completion vector
    pub exercises: Vec<Exercise>,
    pub safety_tip: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Meal {
    #[serde(rename = "type")]
    pub meal_type: String,
    pub description: String,
    /// 0 when unknown
    pub calories: u32,
    pub protein: String,
}

/// One day's structured content extracted from a generated plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedPlan {
    pub workout: Option<WorkoutSection>,
    pub meal_plan: Option<Vec<Meal>>,
    pub progress_summary: Option<Vec<String>>,
    pub tip_of_the_day: Option<String>,
    pub estimated_calories: u32,
}

impl Default for ParsedPlan {
    fn default() -> Self {
        Self {
            workout: None,
            meal_plan: None,
            progress_summary: None,
            tip_of_the_day: None,
            estimated_calories: DEFAULT_ESTIMATED_CALORIES,
        }
    }
}

impl ParsedPlan {
    pub fn exercises(&self) -> &[Exercise] {
        self.workout
            .as_ref()
            .map(|w| w.exercises.as_slice())
            .unwrap_or_default()
    }

    pub fn focus(&self) -> &str {
        self.workout.as_ref().map(|w| w.focus.as_str()).unwrap_or("N/A")
    }

    pub fn total_meal_calories(&self) -> u32 {
        self.meal_plan
            .iter()
            .flatten()
            .fold(0, |total, meal| total.saturating_add(meal.calories))
    }
}

/// A parsed plan pinned to a date, with its exercise checklist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPlan {
    pub date: NaiveDate,
    pub plan: ParsedPlan,
    pub completion: Vec<bool>,
    /// Set once this day's completion has advanced the streak
    #[serde(default)]
    pub credited: bool,
}

impl DailyPlan {
    pub fn new(plan: ParsedPlan, date: NaiveDate) -> Self {
        let completion = vec![false; plan.exercises().len()];
        Self {
            date,
            plan,
            completion,
            credited: false,
        }
    }

    /// Every exercise is checked. Vacuously true for a day without exercises.
    pub fn is_complete(&self) -> bool {
        self.completion.iter().all(|done| *done)
    }

    pub fn completed_count(&self) -> usize {
        self.completion.iter().filter(|done| **done).count()
    }
}

/// Colour scheme preference, persisted separately from the program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(format!("Invalid theme: {}", s)),
        }
    }
}
