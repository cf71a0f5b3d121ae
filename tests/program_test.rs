use chrono::NaiveDate;
use fitness_coach::models::{DailyPlan, Difficulty, Exercise, ParsedPlan, User, WorkoutSection};
use fitness_coach::Program;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, day).unwrap()
}

fn plan_with(count: usize) -> ParsedPlan {
    let exercises = (0..count)
        .map(|i| Exercise {
            name: format!("Exercise {}", i + 1),
            target_muscles: "Legs".to_string(),
            difficulty: Difficulty::Intermediate,
            sets: "3".to_string(),
            reps: "12".to_string(),
            video: "Watch".to_string(),
        })
        .collect();

    ParsedPlan {
        workout: Some(WorkoutSection {
            focus: "Legs".to_string(),
            exercises,
            safety_tip: "Warm up first.".to_string(),
        }),
        ..Default::default()
    }
}

/// Toggle every exercise of a day, returning how many toggles credited it
fn complete_day(program: &mut Program, user: &mut User, day: usize) -> usize {
    let count = program.days()[day].completion.len();
    (0..count)
        .filter(|&i| {
            program
                .toggle_exercise(&mut *user, day, i)
                .unwrap()
                .progress
                .is_some()
        })
        .count()
}

#[test]
fn test_completion_fires_once_on_final_toggle() {
    let mut program = Program::default();
    let mut user = User::default();
    program.append_day(plan_with(3), date(1));

    let first = program.toggle_exercise(&mut user, 0, 0).unwrap();
    let second = program.toggle_exercise(&mut user, 0, 1).unwrap();
    assert!(first.checked && first.progress.is_none());
    assert!(second.progress.is_none());
    assert_eq!(user.progress.streak_days, 0);

    let last = program.toggle_exercise(&mut user, 0, 2).unwrap();
    let update = last.progress.expect("final toggle completes the day");
    assert_eq!(update.streak_days, 1);
    assert_eq!(update.previous_weight, "82 kg");
    assert_eq!(update.weight, "81.8 kg");
    assert_eq!(user.profile.weight, "81.8 kg");
    assert!(program.days()[0].credited);
}

#[test]
fn test_uncomplete_and_recomplete_does_not_fire_again() {
    let mut program = Program::default();
    let mut user = User::default();
    program.append_day(plan_with(2), date(1));
    assert_eq!(complete_day(&mut program, &mut user, 0), 1);

    let undo = program.toggle_exercise(&mut user, 0, 1).unwrap();
    assert!(!undo.checked);
    assert!(undo.progress.is_none());

    let redo = program.toggle_exercise(&mut user, 0, 1).unwrap();
    assert!(redo.checked);
    assert!(redo.progress.is_none());

    assert_eq!(user.progress.streak_days, 1);
    assert_eq!(user.profile.weight, "81.8 kg");
}

#[test]
fn test_consecutive_days_extend_streak() {
    let mut program = Program::default();
    let mut user = User::default();

    program.append_day(plan_with(2), date(1));
    complete_day(&mut program, &mut user, 0);
    program.append_day(plan_with(1), date(2));
    complete_day(&mut program, &mut user, 1);

    assert_eq!(user.progress.streak_days, 2);
    assert_eq!(user.profile.weight, "81.6 kg");
}

#[test]
fn test_incomplete_predecessor_restarts_streak() {
    let mut program = Program::default();
    let mut user = User::default();
    user.progress.streak_days = 5;

    program.append_day(plan_with(2), date(1));
    program.append_day(plan_with(1), date(2));
    complete_day(&mut program, &mut user, 1);

    assert_eq!(user.progress.streak_days, 1);
}

#[test]
fn test_first_day_bootstraps_streak() {
    let mut program = Program::default();
    let mut user = User::default();
    user.progress.streak_days = 9;

    program.append_day(plan_with(1), date(1));
    complete_day(&mut program, &mut user, 0);

    assert_eq!(user.progress.streak_days, 10);
}

#[test]
fn test_streak_ignores_unrelated_days() {
    // Two programs that differ only in whether day 3 is done
    let build = |extra_done: bool| {
        let mut program = Program::default();
        let mut user = User::default();
        for d in 1..=3 {
            program.append_day(plan_with(2), date(d));
        }
        complete_day(&mut program, &mut user, 0);
        if extra_done {
            complete_day(&mut program, &mut user, 2);
        }
        let outcome = (0..2)
            .filter_map(|i| program.toggle_exercise(&mut user, 1, i).unwrap().progress)
            .last()
            .unwrap();
        outcome.streak_days == outcome.previous_streak + 1
    };

    assert!(build(false));
    assert!(build(true));
}

#[test]
fn test_day_without_exercises_counts_as_completed_predecessor() {
    let mut program = Program::default();
    let mut user = User::default();
    user.progress.streak_days = 2;

    program.append_day(ParsedPlan::default(), date(1));
    program.append_day(plan_with(1), date(2));
    complete_day(&mut program, &mut user, 1);

    assert_eq!(user.progress.streak_days, 3);
}

#[test]
fn test_toggle_leaves_other_days_untouched() {
    let mut program = Program::default();
    let mut user = User::default();
    program.append_day(plan_with(2), date(1));
    program.append_day(plan_with(2), date(2));
    let before = program.days()[0].clone();

    program.toggle_exercise(&mut user, 1, 0).unwrap();

    assert_eq!(program.days()[0], before);
    assert_eq!(program.days()[1].completion, vec![true, false]);
}

#[test]
fn test_program_json_round_trip() {
    let mut program = Program::default();
    let mut user = User::default();
    program.append_day(plan_with(2), date(1));
    program.append_day(ParsedPlan::default(), date(2));
    program.toggle_exercise(&mut user, 0, 1).unwrap();

    let json = serde_json::to_string(&program).unwrap();
    let back: Program = serde_json::from_str(&json).unwrap();

    assert_eq!(back, program);
}

#[test]
fn test_daily_plan_reads_without_credited_field() {
    let day = DailyPlan::new(plan_with(1), date(3));
    let mut value = serde_json::to_value(&day).unwrap();
    value.as_object_mut().unwrap().remove("credited");

    let back: DailyPlan = serde_json::from_value(value).unwrap();
    assert!(!back.credited);
    assert_eq!(back.date, date(3));
}

proptest! {
    #[test]
    fn appended_completion_matches_exercise_count(count in 0usize..20) {
        let mut program = Program::default();
        let day = program.append_day(plan_with(count), date(1));

        prop_assert_eq!(day.completion.len(), count);
        prop_assert!(day.completion.iter().all(|done| !done));
    }

    #[test]
    fn toggles_preserve_completion_length(
        count in 1usize..8,
        toggles in prop::collection::vec(0usize..8, 0..40),
    ) {
        let mut program = Program::default();
        let mut user = User::default();
        program.append_day(plan_with(count), date(1));

        let mut credited = 0;
        for index in toggles {
            if let Ok(outcome) = program.toggle_exercise(&mut user, 0, index) {
                credited += usize::from(outcome.progress.is_some());
            }
            prop_assert_eq!(program.days()[0].completion.len(), count);
        }
        prop_assert!(credited <= 1);
    }
}
