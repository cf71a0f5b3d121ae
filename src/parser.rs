use regex::Regex;

use crate::models::{Difficulty, Exercise, Meal, ParsedPlan, WorkoutSection, DEFAULT_ESTIMATED_CALORIES};

/// A text format the generator can answer in.
///
/// Parsing is total: every extraction step falls back to a default, so any
/// input yields a plan, possibly with absent sections.
pub trait PlanFormat: Send + Sync {
    fn parse(&self, raw: &str) -> ParsedPlan;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SectionKind {
    Workout,
    Meals,
    Progress,
    Tip,
}

impl SectionKind {
    fn from_marker(c: char) -> Option<Self> {
        match c {
            '\u{1F3CB}' => Some(SectionKind::Workout),  // 🏋
            '\u{1F37D}' => Some(SectionKind::Meals),    // 🍽
            '\u{1F4C8}' => Some(SectionKind::Progress), // 📈
            '\u{1F4A1}' => Some(SectionKind::Tip),      // 💡
            _ => None,
        }
    }
}

/// Parser for the emoji-headed, tab-separated plan format
pub struct PlanParser {
    integer: Regex,
    meal_calories: Regex,
    meal_protein: Regex,
}

impl Default for PlanParser {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanParser {
    pub fn new() -> Self {
        Self {
            integer: Regex::new(r"\d+").expect("integer pattern is valid"),
            meal_calories: Regex::new(r"(\d+)\s*cal").expect("calorie pattern is valid"),
            meal_protein: Regex::new(r"(\d+g)\s*protein").expect("protein pattern is valid"),
        }
    }

    fn parse_workout(&self, section: &str, plan: &mut ParsedPlan) {
        let mut lines = non_blank_lines(section);
        let title = lines.next().unwrap_or_default();

        let mut focus = focus_value(title);
        let mut exercises = Vec::new();
        let mut safety_tip = String::new();

        for line in lines {
            let trimmed = line.trim();

            if let Some(tip) = trimmed.strip_prefix("Safety Tip:") {
                safety_tip = tip.trim().to_string();
            } else if trimmed.starts_with("Estimated Calories Burned:") {
                plan.estimated_calories = self
                    .integer
                    .find(trimmed)
                    .and_then(|m| m.as_str().parse().ok())
                    .unwrap_or(DEFAULT_ESTIMATED_CALORIES);
            } else if focus.is_none() && trimmed.starts_with("Focus:") {
                focus = focus_value(trimmed);
            } else if line.contains('\t') {
                if let Some(exercise) = parse_exercise_row(line) {
                    exercises.push(exercise);
                }
            }
        }

        plan.workout = Some(WorkoutSection {
            focus: focus.unwrap_or_else(|| "N/A".to_string()),
            exercises,
            safety_tip,
        });
    }

    fn parse_meal(&self, line: &str) -> Meal {
        // Untrimmed: "Breakfast: " gives an empty description, "Breakfast:" gives N/A
        let Some((meal_type, details)) = line.split_once(':') else {
            return Meal {
                meal_type: line.trim().to_string(),
                description: "N/A".to_string(),
                calories: 0,
                protein: "N/A".to_string(),
            };
        };

        let calories = self
            .meal_calories
            .captures(details)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse().ok())
            .unwrap_or(0);

        let protein = self
            .meal_protein
            .captures(details)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| "N/A".to_string());

        let description = match details.split('(').next().map(str::trim) {
            Some(text) if !details.is_empty() => text.to_string(),
            _ => "N/A".to_string(),
        };

        Meal {
            meal_type: meal_type.trim().to_string(),
            description,
            calories,
            protein,
        }
    }
}

impl PlanFormat for PlanParser {
    fn parse(&self, raw: &str) -> ParsedPlan {
        let mut plan = ParsedPlan::default();

        for (kind, section) in split_sections(raw) {
            match kind {
                SectionKind::Workout => self.parse_workout(section, &mut plan),
                SectionKind::Meals => {
                    let meals = non_blank_lines(section)
                        .skip(1)
                        .map(|line| self.parse_meal(line))
                        .collect();
                    plan.meal_plan = Some(meals);
                }
                SectionKind::Progress => {
                    let bullets = non_blank_lines(section)
                        .skip(1)
                        .map(|line| line.trim().to_string())
                        .collect();
                    plan.progress_summary = Some(bullets);
                }
                SectionKind::Tip => {
                    let tip = non_blank_lines(section)
                        .skip(1)
                        .collect::<Vec<_>>()
                        .join(" ")
                        .replace(&['\u{201C}', '\u{201D}'][..], "");
                    plan.tip_of_the_day = Some(tip.trim().to_string());
                }
            }
        }

        tracing::debug!(
            exercises = plan.exercises().len(),
            meals = plan.meal_plan.as_ref().map_or(0, Vec::len),
            estimated_calories = plan.estimated_calories,
            "Parsed generated plan"
        );

        plan
    }
}

/// Cut the text at every marker symbol. Text before the first marker is dropped.
fn split_sections(raw: &str) -> Vec<(SectionKind, &str)> {
    let mut sections = Vec::new();
    let mut current: Option<(SectionKind, usize)> = None;

    for (index, c) in raw.char_indices() {
        if let Some(kind) = SectionKind::from_marker(c) {
            if let Some((previous, start)) = current.take() {
                sections.push((previous, &raw[start..index]));
            }
            current = Some((kind, index));
        }
    }

    if let Some((kind, start)) = current {
        sections.push((kind, &raw[start..]));
    }

    sections
}

fn non_blank_lines(section: &str) -> impl Iterator<Item = &str> {
    section.lines().filter(|line| !line.trim().is_empty())
}

fn focus_value(line: &str) -> Option<String> {
    line.find("Focus:")
        .map(|at| line[at + "Focus:".len()..].trim().to_string())
}

fn parse_exercise_row(line: &str) -> Option<Exercise> {
    let cells: Vec<&str> = line.split('\t').map(str::trim).collect();

    // The header row repeats the column names
    if cells.len() < 6 || cells[0] == "Exercise" {
        return None;
    }

    let video = if cells[5].is_empty() { "Watch" } else { cells[5] };

    Some(Exercise {
        name: cells[0].to_string(),
        target_muscles: cells[1].to_string(),
        difficulty: Difficulty::from(cells[2]),
        sets: cells[3].to_string(),
        reps: cells[4].to_string(),
        video: video.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(raw: &str) -> ParsedPlan {
        PlanParser::new().parse(raw)
    }

    #[test]
    fn test_header_row_is_skipped() {
        let plan = parse(
            "🏋️ Today's Workout Plan (Day 1 of Program)\n\
             Exercise\tTarget Muscles\tDifficulty\tSets\tReps\tVideo\n\
             Push-ups\tChest\tBeginner\t3\t12\thttps://example.com/pushups\n\
             Plank\tCore\tAll Levels\t3\t30s\thttps://example.com/plank\n",
        );

        let exercises = plan.exercises();
        assert_eq!(exercises.len(), 2);
        assert_eq!(exercises[0].name, "Push-ups");
        assert_eq!(exercises[1].difficulty, Difficulty::AllLevels);
    }

    #[test]
    fn test_short_rows_are_not_exercises() {
        let plan = parse(
            "🏋️ Workout\n\
             Push-ups\tChest\tBeginner\t3\t12\n\
             Squats\tLegs\tBeginner\t3\t15\thttps://example.com/squats\n",
        );

        assert_eq!(plan.exercises().len(), 1);
        assert_eq!(plan.exercises()[0].name, "Squats");
    }

    #[test]
    fn test_empty_video_cell_defaults_to_watch() {
        let plan = parse("🏋️ Workout\nLunges\tLegs\tIntermediate\t3\t10\t\n");

        assert_eq!(plan.exercises()[0].video, "Watch");
    }

    #[test]
    fn test_estimated_calories() {
        let plan = parse("🏋️ Workout\nEstimated Calories Burned: 420 kcal\n");
        assert_eq!(plan.estimated_calories, 420);

        let plan = parse("🏋️ Workout\nEstimated Calories Burned: lots\n");
        assert_eq!(plan.estimated_calories, 300);

        let plan = parse("🏋️ Workout\nFocus: Legs\n");
        assert_eq!(plan.estimated_calories, 300);
    }

    #[test]
    fn test_focus_and_safety_tip() {
        let plan = parse(
            "🏋️ Today's Workout Plan\nFocus: Upper Body Strength\nSafety Tip:   Keep your back straight.  \n",
        );
        let workout = plan.workout.unwrap();

        assert_eq!(workout.focus, "Upper Body Strength");
        assert_eq!(workout.safety_tip, "Keep your back straight.");
    }

    #[test]
    fn test_focus_on_title_line() {
        let plan = parse("🏋️ Workout Focus: Cardio\n");
        assert_eq!(plan.focus(), "Cardio");
    }

    #[test]
    fn test_missing_focus_defaults() {
        let plan = parse("🏋️ Workout\n");
        assert_eq!(plan.focus(), "N/A");
    }

    #[test]
    fn test_meal_line() {
        let plan = parse("🍽️ Meal Plan\nLunch: Grilled chicken salad (350 cal, 40g protein)\n");
        let meals = plan.meal_plan.unwrap();

        assert_eq!(
            meals,
            vec![Meal {
                meal_type: "Lunch".to_string(),
                description: "Grilled chicken salad".to_string(),
                calories: 350,
                protein: "40g".to_string(),
            }]
        );
    }

    #[test]
    fn test_meal_line_without_numbers_or_colon() {
        let plan = parse("🍽️ Meal Plan\nBreakfast: Oatmeal with fruit\nSnack time\n");
        let meals = plan.meal_plan.unwrap();

        assert_eq!(meals[0].description, "Oatmeal with fruit");
        assert_eq!(meals[0].calories, 0);
        assert_eq!(meals[0].protein, "N/A");
        assert_eq!(meals[1].meal_type, "Snack time");
        assert_eq!(meals[1].description, "N/A");
    }

    #[test]
    fn test_meal_with_blank_details() {
        let plan = parse("🍽️ Meal Plan\nBreakfast: \nLunch:\n");
        let meals = plan.meal_plan.unwrap();

        assert_eq!(meals[0].meal_type, "Breakfast");
        assert_eq!(meals[0].description, "");
        assert_eq!(meals[1].meal_type, "Lunch");
        assert_eq!(meals[1].description, "N/A");
    }

    #[test]
    fn test_meal_details_keep_later_colons() {
        let plan = parse("🍽️ Meal Plan\nDinner: Salmon: baked (500 cal, 35g protein)\n");
        let meals = plan.meal_plan.unwrap();

        assert_eq!(meals[0].meal_type, "Dinner");
        assert_eq!(meals[0].description, "Salmon: baked");
        assert_eq!(meals[0].calories, 500);
    }

    #[test]
    fn test_progress_bullets_are_verbatim() {
        let plan = parse("📈 Progress Summary\n- Workout streak: 3 days\n  - On track  \n");

        assert_eq!(
            plan.progress_summary.unwrap(),
            vec!["- Workout streak: 3 days".to_string(), "- On track".to_string()]
        );
    }

    #[test]
    fn test_tip_strips_curly_quotes() {
        let plan = parse("💡 Tip of the Day\n“Drink water\nbefore every meal.”\n");

        assert_eq!(plan.tip_of_the_day.unwrap(), "Drink water before every meal.");
    }

    #[test]
    fn test_preamble_is_ignored_and_missing_sections_are_unset() {
        let plan = parse("Sure! Here is your plan.\n💡 Tip\nStay consistent.\n");

        assert!(plan.workout.is_none());
        assert!(plan.meal_plan.is_none());
        assert!(plan.progress_summary.is_none());
        assert_eq!(plan.tip_of_the_day.as_deref(), Some("Stay consistent."));
    }

    #[test]
    fn test_markers_without_variation_selector() {
        let plan = parse("\u{1F3CB} Workout\nFocus: Back\n\u{1F37D} Meals\nDinner: Soup (200 cal)\n");

        assert_eq!(plan.focus(), "Back");
        assert_eq!(plan.meal_plan.unwrap().len(), 1);
    }

    #[test]
    fn test_crlf_input() {
        let plan = parse("🏋️ Workout\r\nFocus: Legs\r\nSquats\tLegs\tBeginner\t3\t12\turl\r\n");

        assert_eq!(plan.focus(), "Legs");
        assert_eq!(plan.exercises()[0].video, "url");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse(""), ParsedPlan::default());
    }
}
