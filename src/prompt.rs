use crate::models::{DailyPlan, User};

/// Column header of the exercise table the parser expects
pub const TABLE_HEADER: &str = "Exercise\tTarget Muscles\tDifficulty\tSets\tReps\tVideo";

/// One-line summary of previous workouts, e.g. "Day 1: Legs; Day 2: Core"
pub fn history_summary(history: &[DailyPlan]) -> String {
    if history.is_empty() {
        return "None. This is the first day.".to_string();
    }

    history
        .iter()
        .enumerate()
        .map(|(index, day)| format!("Day {}: {}", index + 1, day.plan.focus()))
        .collect::<Vec<_>>()
        .join("; ")
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "None".to_string()
    } else {
        items.join(", ")
    }
}

/// Build the instruction sent to the generator for the next day of the program
pub fn build_prompt(user: &User, history: &[DailyPlan]) -> String {
    let profile = &user.profile;
    let restrictions = list_or_none(&profile.dietary_restrictions);
    let day_number = history.len() + 1;

    let mut prompt = String::new();

    prompt.push_str(
        "You are a professional AI Fitness Coach. Use the structured user profile below to \
         generate a personalized fitness, nutrition, and progress plan for the user's NEXT \
         workout day.\nDo not ask for details. Tailor everything to the user's goals, \
         preferences, fitness level, and workout history.\n\n",
    );

    prompt.push_str("👤 User Profile & Data:\n");
    prompt.push_str(&format!("- Name: {}\n", profile.name));
    prompt.push_str(&format!("- Age: {}\n", profile.age));
    prompt.push_str(&format!("- Gender: {}\n", profile.gender));
    prompt.push_str(&format!("- Height: {}\n", profile.height));
    prompt.push_str(&format!("- Weight: {}\n", profile.weight));
    prompt.push_str(&format!("- Language: {}\n", profile.language));
    prompt.push_str(&format!("- Units: {}\n", profile.units));
    prompt.push_str(&format!("- Fitness level: {}\n", profile.fitness_level));
    prompt.push_str(&format!("- Workout Intensity: {}\n", profile.workout_intensity));
    prompt.push_str(&format!("- Preferred Workout Duration: {}\n", profile.workout_duration));
    prompt.push_str(&format!("- Goal: {}\n", profile.goal));
    prompt.push_str(&format!("- Target body parts: {}\n", profile.target_areas.join(", ")));
    prompt.push_str(&format!(
        "- Preferred workout types: {}\n",
        profile.workout_preferences.join(", ")
    ));
    prompt.push_str(&format!("- Available equipment: {}\n", profile.equipment.join(", ")));
    prompt.push_str(&format!("- Dietary Preference: {}\n", profile.dietary_preference));
    prompt.push_str(&format!("- Dietary Restrictions: {}\n", restrictions));
    if let Some(daily_goal) = &user.progress.daily_goal {
        prompt.push_str(&format!("- Daily goal: {}\n", daily_goal));
    }
    prompt.push_str(&format!(
        "- Current workout streak: {} days\n",
        user.progress.streak_days
    ));
    prompt.push_str(&format!(
        "- Recent workout history: {}\n\n",
        history_summary(history)
    ));

    prompt.push_str(
        "Provide a concise, actionable plan for the NEXT day that complements the previous \
         workouts (e.g. target different muscle groups).\n\n\
         Your entire response MUST follow this format exactly, including the emojis and \
         headers. Do not add any text before or after it.\n\n",
    );

    prompt.push_str(&format!(
        "🏋️ Today's Workout Plan (Day {} of Program)\n",
        day_number
    ));
    prompt.push_str("Focus: [Primary muscle group or cardio type, different from recent days]\n");
    prompt.push_str(
        "Estimated Calories Burned: [A single number for the whole workout]\n\
         [A table of exercises with tab-separated columns: Exercise, Target Muscles, \
         Difficulty, Sets, Reps, Video. Difficulty MUST be one of: Beginner, Intermediate, \
         Advanced, All Levels. Video is a YouTube search URL such as \
         https://www.youtube.com/results?search_query=Exercise+Name+tutorial]\n",
    );
    prompt.push_str(TABLE_HEADER);
    prompt.push('\n');
    for n in 1..=4 {
        prompt.push_str(&format!(
            "[Exercise {n}]\t[Target Muscles]\t[Difficulty]\t[Sets]\t[Reps]\t\
             https://www.youtube.com/results?search_query=Exercise+{n}+tutorial\n"
        ));
    }
    prompt.push_str("Safety Tip: [A relevant safety tip for one of the exercises]\n\n");

    prompt.push_str("🍽️ Meal Plan\n");
    prompt.push_str(&format!(
        "[Three meals: Breakfast, Lunch, Dinner. They MUST follow the Dietary Preference ({}) \
         and avoid everything in Dietary Restrictions ({}). Give each a short description with \
         estimated calories and protein, e.g. \"Greek yogurt + berries (320 cal, 25g protein)\". \
         Vary the meals from previous days.]\n",
        profile.dietary_preference, restrictions
    ));
    prompt.push_str("Breakfast: [Description]\nLunch: [Description]\nDinner: [Description]\n\n");

    prompt.push_str("📈 Progress Summary\n");
    prompt.push_str(
        "[Two or three bullet points based on the user's data, mentioning the streak and \
         progress towards the main goal.]\n\
         - Workout streak: [streak_days]\n\
         - Progress towards goal: [How the user is progressing given current weight and activity]\n\n",
    );

    prompt.push_str("💡 Tip of the Day\n");
    prompt.push_str("“[A short, motivational fitness or nutrition tip]”\n");

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ParsedPlan, WorkoutSection};
    use chrono::NaiveDate;

    fn day(focus: &str) -> DailyPlan {
        let plan = ParsedPlan {
            workout: Some(WorkoutSection {
                focus: focus.to_string(),
                exercises: Vec::new(),
                safety_tip: String::new(),
            }),
            ..Default::default()
        };
        DailyPlan::new(plan, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    }

    #[test]
    fn test_history_summary() {
        assert_eq!(history_summary(&[]), "None. This is the first day.");
        assert_eq!(
            history_summary(&[day("Legs"), day("Core")]),
            "Day 1: Legs; Day 2: Core"
        );
    }

    #[test]
    fn test_prompt_contains_profile_and_contract() {
        let user = User::default();
        let prompt = build_prompt(&user, &[day("Legs")]);

        assert!(prompt.contains("- Name: Alex Johnson"));
        assert!(prompt.contains("- Dietary Restrictions: None"));
        assert!(prompt.contains("- Recent workout history: Day 1: Legs"));
        assert!(prompt.contains("Today's Workout Plan (Day 2 of Program)"));
        assert!(prompt.contains(TABLE_HEADER));
        assert!(prompt.contains("🍽️ Meal Plan"));
        assert!(prompt.contains("📈 Progress Summary"));
        assert!(prompt.contains("💡 Tip of the Day"));
    }

    #[test]
    fn test_prompt_lists_restrictions() {
        let mut user = User::default();
        user.profile.dietary_restrictions = vec!["nuts".to_string(), "dairy".to_string()];

        let prompt = build_prompt(&user, &[]);
        assert!(prompt.contains("- Dietary Restrictions: nuts, dairy"));
        assert!(prompt.contains("(Day 1 of Program)"));
    }
}
