use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed set of labelled choices offered by the profile form
pub trait Choice: Sized + Copy + 'static {
    const ALL: &'static [Self];

    fn label(&self) -> &'static str;

    /// Case-insensitive lookup by label
    fn from_label(s: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|choice| choice.label().eq_ignore_ascii_case(s.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    Metric,
    Imperial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutIntensity {
    Light,
    Moderate,
    Intense,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutDuration {
    Short,
    Medium,
    Long,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DietaryPreference {
    Anything,
    Vegetarian,
    #[serde(rename = "Non-Vegetarian")]
    NonVegetarian,
    Vegan,
}

impl Choice for Gender {
    const ALL: &'static [Self] = &[Gender::Male, Gender::Female, Gender::Other];

    fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl Choice for Units {
    const ALL: &'static [Self] = &[Units::Metric, Units::Imperial];

    fn label(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }
}

impl Choice for FitnessLevel {
    const ALL: &'static [Self] = &[
        FitnessLevel::Beginner,
        FitnessLevel::Intermediate,
        FitnessLevel::Advanced,
    ];

    fn label(&self) -> &'static str {
        match self {
            FitnessLevel::Beginner => "beginner",
            FitnessLevel::Intermediate => "intermediate",
            FitnessLevel::Advanced => "advanced",
        }
    }
}

impl Choice for WorkoutIntensity {
    const ALL: &'static [Self] = &[
        WorkoutIntensity::Light,
        WorkoutIntensity::Moderate,
        WorkoutIntensity::Intense,
    ];

    fn label(&self) -> &'static str {
        match self {
            WorkoutIntensity::Light => "light",
            WorkoutIntensity::Moderate => "moderate",
            WorkoutIntensity::Intense => "intense",
        }
    }
}

impl Choice for WorkoutDuration {
    const ALL: &'static [Self] = &[
        WorkoutDuration::Short,
        WorkoutDuration::Medium,
        WorkoutDuration::Long,
    ];

    fn label(&self) -> &'static str {
        match self {
            WorkoutDuration::Short => "short",
            WorkoutDuration::Medium => "medium",
            WorkoutDuration::Long => "long",
        }
    }
}

impl Choice for DietaryPreference {
    const ALL: &'static [Self] = &[
        DietaryPreference::Anything,
        DietaryPreference::Vegetarian,
        DietaryPreference::NonVegetarian,
        DietaryPreference::Vegan,
    ];

    fn label(&self) -> &'static str {
        match self {
            DietaryPreference::Anything => "Anything",
            DietaryPreference::Vegetarian => "Vegetarian",
            DietaryPreference::NonVegetarian => "Non-Vegetarian",
            DietaryPreference::Vegan => "Vegan",
        }
    }
}

macro_rules! choice_display_and_parse {
    ($($ty:ty => $what:literal),* $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }

            impl FromStr for $ty {
                type Err = String;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    <$ty as Choice>::from_label(s)
                        .ok_or_else(|| format!("Invalid {}: {}", $what, s))
                }
            }
        )*
    };
}

choice_display_and_parse! {
    Gender => "gender",
    Units => "units",
    FitnessLevel => "fitness level",
    WorkoutIntensity => "workout intensity",
    WorkoutDuration => "workout duration",
    DietaryPreference => "dietary preference",
}

/// Demographic and preference data entered once per session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub height: String,
    /// Magnitude and unit in one string, e.g. "82 kg"
    pub weight: String,
    #[serde(default = "default_language")]
    pub language: String,
    pub units: Units,
    pub fitness_level: FitnessLevel,
    pub workout_intensity: WorkoutIntensity,
    pub workout_duration: WorkoutDuration,
    pub goal: String,
    #[serde(default)]
    pub target_areas: Vec<String>,
    #[serde(default)]
    pub workout_preferences: Vec<String>,
    #[serde(default)]
    pub equipment: Vec<String>,
    pub dietary_preference: DietaryPreference,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
}

/// Facts derived from completed days
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProgress {
    #[serde(default)]
    pub streak_days: u32,
    #[serde(default)]
    pub daily_goal: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(flatten)]
    pub profile: UserProfile,
    #[serde(flatten)]
    pub progress: UserProgress,
}

/// Result of crediting a fully completed day to the user
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressUpdate {
    pub previous_streak: u32,
    pub streak_days: u32,
    pub previous_weight: String,
    pub weight: String,
}

fn default_language() -> String {
    "English".to_string()
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Alex Johnson".to_string(),
            age: 29,
            gender: Gender::Male,
            height: "180 cm".to_string(),
            weight: "82 kg".to_string(),
            language: default_language(),
            units: Units::Metric,
            fitness_level: FitnessLevel::Intermediate,
            workout_intensity: WorkoutIntensity::Moderate,
            workout_duration: WorkoutDuration::Medium,
            goal: "Lose 5kg and build lean muscle in 3 months".to_string(),
            target_areas: vec!["core".to_string(), "chest".to_string()],
            workout_preferences: vec!["HIIT".to_string(), "strength training".to_string()],
            equipment: vec![
                "dumbbells".to_string(),
                "pull-up bar".to_string(),
                "bodyweight".to_string(),
            ],
            dietary_preference: DietaryPreference::Anything,
            dietary_restrictions: Vec::new(),
        }
    }
}

impl Default for UserProgress {
    fn default() -> Self {
        Self {
            streak_days: 0,
            daily_goal: Some("Burn 500 calories".to_string()),
        }
    }
}

impl User {
    /// Credit one newly completed day: advance or restart the streak and
    /// nudge the weight estimate toward the goal.
    pub fn record_completed_day(&mut self, predecessor_completed: bool) -> ProgressUpdate {
        let previous_streak = self.progress.streak_days;
        let previous_weight = self.profile.weight.clone();

        self.progress.streak_days = if predecessor_completed {
            previous_streak + 1
        } else {
            1
        };

        if let Some(weight) = adjusted_weight(&self.profile.weight, &self.profile.goal) {
            self.profile.weight = weight;
        }

        tracing::info!(
            streak = self.progress.streak_days,
            weight = %self.profile.weight,
            "Day completed"
        );

        ProgressUpdate {
            previous_streak,
            streak_days: self.progress.streak_days,
            previous_weight,
            weight: self.profile.weight.clone(),
        }
    }
}

/// Split a weight string such as "82 kg" or "180.5lbs" into magnitude and
/// unit. The unit defaults to "kg" when none is present.
pub fn parse_weight(weight: &str) -> Option<(f64, String)> {
    let mut tokens = weight.split_whitespace();
    let first = tokens.next()?;

    let end = first
        .char_indices()
        .take_while(|(i, c)| c.is_ascii_digit() || *c == '.' || (*i == 0 && (*c == '-' || *c == '+')))
        .map(|(i, c)| i + c.len_utf8())
        .last()?;

    let value: f64 = first[..end].parse().ok()?;
    if !value.is_finite() {
        return None;
    }

    let suffix = &first[end..];
    let unit = match tokens.next() {
        Some(unit) => unit.to_string(),
        None if !suffix.is_empty() => suffix.to_string(),
        None => "kg".to_string(),
    };

    Some((value, unit))
}

/// Per-day weight change implied by the free-text goal
pub fn weight_delta(goal: &str) -> f64 {
    let goal = goal.to_lowercase();

    if goal.contains("lose") {
        -0.2
    } else if goal.contains("gain") || goal.contains("build") {
        0.1
    } else {
        0.0
    }
}

fn adjusted_weight(weight: &str, goal: &str) -> Option<String> {
    let Some((value, unit)) = parse_weight(weight) else {
        tracing::debug!("Weight '{}' has no numeric magnitude, leaving it unchanged", weight);
        return None;
    };

    let adjusted = ((value + weight_delta(goal)) * 100.0).round() / 100.0;
    // -0.0 would print as "-0"
    let adjusted = if adjusted == 0.0 { 0.0 } else { adjusted };
    Some(format!("{} {}", adjusted, unit))
}
