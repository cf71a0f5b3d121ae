use fitness_coach::models::{Difficulty, Meal};
use fitness_coach::{PlanFormat, PlanParser};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

const GENERATED_PLAN: &str = "Here is your plan for tomorrow!\n\
\n\
🏋️ Today's Workout Plan (Day 2 of Program)\n\
Focus: Core and Chest\n\
Estimated Calories Burned: 420 kcal\n\
Exercise\tTarget Muscles\tDifficulty\tSets\tReps\tVideo\n\
Push-ups\tChest, Triceps\tBeginner\t3\t12\thttps://www.youtube.com/results?search_query=Push-ups+tutorial\n\
Dumbbell Bench Press\tChest\tIntermediate\t4\t10\thttps://www.youtube.com/results?search_query=Dumbbell+Bench+Press+tutorial\n\
Plank\tCore\tAll Levels\t3\t45s\thttps://www.youtube.com/results?search_query=Plank+tutorial\n\
Hanging Knee Raises\tLower Abs\tAdvanced\t3\t15\t\n\
Safety Tip: Keep your core braced during push-ups to protect your lower back.\n\
\n\
🍽️ Meal Plan\n\
Breakfast: Greek yogurt + berries (320 cal, 25g protein)\n\
Lunch: Grilled chicken salad (350 cal, 40g protein)\n\
Dinner: Salmon with quinoa and greens (520 cal, 38g protein)\n\
\n\
📈 Progress Summary\n\
- Workout streak: 1 day\n\
- Progress towards goal: Weight is trending down steadily.\n\
\n\
💡 Tip of the Day\n\
“Consistency beats intensity. Show up every day.”\n";

#[test]
fn test_full_generated_plan() {
    let plan = PlanParser::new().parse(GENERATED_PLAN);

    let workout = plan.workout.as_ref().expect("workout section");
    assert_eq!(workout.focus, "Core and Chest");
    assert_eq!(workout.exercises.len(), 4);
    assert_eq!(
        workout.safety_tip,
        "Keep your core braced during push-ups to protect your lower back."
    );
    assert_eq!(plan.estimated_calories, 420);

    let names: Vec<&str> = workout.exercises.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Push-ups", "Dumbbell Bench Press", "Plank", "Hanging Knee Raises"]
    );
    assert_eq!(workout.exercises[0].target_muscles, "Chest, Triceps");
    assert_eq!(workout.exercises[2].difficulty, Difficulty::AllLevels);
    assert_eq!(workout.exercises[2].reps, "45s");
    assert_eq!(workout.exercises[3].difficulty, Difficulty::Advanced);
    assert_eq!(workout.exercises[3].video, "Watch");

    let meals = plan.meal_plan.as_ref().expect("meal section");
    assert_eq!(meals.len(), 3);
    assert_eq!(
        meals[1],
        Meal {
            meal_type: "Lunch".to_string(),
            description: "Grilled chicken salad".to_string(),
            calories: 350,
            protein: "40g".to_string(),
        }
    );
    assert_eq!(meals[0].description, "Greek yogurt + berries");
    assert_eq!(plan.total_meal_calories(), 1190);

    assert_eq!(
        plan.progress_summary.as_deref(),
        Some(
            &[
                "- Workout streak: 1 day".to_string(),
                "- Progress towards goal: Weight is trending down steadily.".to_string(),
            ][..]
        )
    );
    assert_eq!(
        plan.tip_of_the_day.as_deref(),
        Some("Consistency beats intensity. Show up every day.")
    );
}

#[test]
fn test_table_with_n_rows_yields_n_exercises() {
    for rows in 0..8 {
        let mut text = String::from("🏋️ Workout\nExercise\tTarget Muscles\tDifficulty\tSets\tReps\tVideo\n");
        for i in 0..rows {
            text.push_str(&format!("Move {i}\tLegs\tBeginner\t3\t10\thttps://example.com/{i}\n"));
        }

        let plan = PlanParser::new().parse(&text);
        assert_eq!(plan.exercises().len(), rows);
    }
}

#[test]
fn test_later_section_replaces_earlier_one() {
    let plan = PlanParser::new().parse("💡 Tip\nFirst\n💡 Tip\nSecond\n");

    assert_eq!(plan.tip_of_the_day.as_deref(), Some("Second"));
}

#[test]
fn test_huge_meal_calories_saturate_total() {
    let plan = PlanParser::new().parse(
        "🍽️ Meal Plan\n\
         Breakfast: Oats (4000000000 cal, 10g protein)\n\
         Lunch: Rice (4000000000 cal, 8g protein)\n",
    );

    assert_eq!(plan.meal_plan.as_ref().unwrap()[0].calories, 4_000_000_000);
    assert_eq!(plan.total_meal_calories(), u32::MAX);
}

proptest! {
    #[test]
    fn parser_never_panics(input in any::<String>()) {
        let _ = PlanParser::new().parse(&input);
    }

    #[test]
    fn rows_with_fewer_than_six_cells_are_ignored(cells in prop::collection::vec("[A-Za-z0-9 ]{1,12}", 1..6)) {
        let text = format!("🏋️ Workout\n{}\n", cells.join("\t"));
        let plan = PlanParser::new().parse(&text);
        prop_assert!(plan.exercises().is_empty());
    }

    #[test]
    fn calories_line_takes_first_integer(calories in 0u32..100_000, trailing in 0u32..1000) {
        let text = format!("🏋️ Workout\nEstimated Calories Burned: {calories} kcal (about {trailing} per set)\n");
        let plan = PlanParser::new().parse(&text);
        prop_assert_eq!(plan.estimated_calories, calories);
    }
}
