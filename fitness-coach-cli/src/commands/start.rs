use anyhow::Result;
use clap::Args;
use colored::Colorize;
use dialoguer::{Confirm, Input, MultiSelect, Select};
use fitness_coach::Coach;
use fitness_coach::models::{
    Choice, DietaryPreference, FitnessLevel, Gender, Units, User, UserProfile, WorkoutDuration,
    WorkoutIntensity,
};

use super::context::CoachContext;
use super::display;
use super::plan::with_spinner;

const TARGET_AREAS: &[&str] = &["full body", "arms", "chest", "back", "core", "legs", "glutes"];
const WORKOUT_PREFERENCES: &[&str] = &[
    "HIIT",
    "strength training",
    "cardio",
    "yoga",
    "pilates",
    "mobility",
];
const EQUIPMENT: &[&str] = &[
    "bodyweight",
    "dumbbells",
    "kettlebell",
    "resistance bands",
    "pull-up bar",
    "barbell",
    "full gym",
];

#[derive(Args)]
pub struct StartCommand {
    /// Skip the form and use the sample profile
    #[arg(long)]
    defaults: bool,
}

impl StartCommand {
    pub async fn execute(self, mut ctx: CoachContext) -> Result<()> {
        println!("{}", "AI Fitness Coach".bold());
        println!();

        if !ctx.coach.program().is_empty() {
            let replace = Confirm::new()
                .with_prompt("A program already exists. Start over with a new profile?")
                .default(false)
                .interact()?;

            if !replace {
                println!("Keeping the current program.");
                return Ok(());
            }
        }

        let user = if self.defaults {
            User::default()
        } else {
            User {
                profile: profile_form()?,
                ..User::default()
            }
        };

        let generator = ctx.generator()?;
        let today = ctx.today();

        // The saved program is only replaced once the first day exists
        let mut coach = Coach::default();
        let result = with_spinner(
            "Creating your first plan...",
            coach.start_program(user, &generator, today),
        )
        .await
        .map(|_| ());

        match result {
            Ok(()) => {
                ctx.reset();
                ctx.coach = coach;
                ctx.save();
                println!("{} Your program has started!", "✓".green());
                println!();
                if let Some(day) = ctx.coach.current_day() {
                    display::print_day(&ctx, ctx.coach.program().current_index(), day);
                }
                Ok(())
            }
            Err(e) => {
                println!("{} {}", "✗".red(), e);
                Err(e.into())
            }
        }
    }
}

/// Interactive profile form, prefilled with the sample profile
fn profile_form() -> Result<UserProfile> {
    let defaults = UserProfile::default();

    let name: String = Input::new()
        .with_prompt("Name")
        .default(defaults.name.clone())
        .interact_text()?;

    let age: u32 = Input::new()
        .with_prompt("Age")
        .default(defaults.age)
        .validate_with(|age: &u32| {
            if (10..=120).contains(age) {
                Ok(())
            } else {
                Err("Age must be between 10 and 120")
            }
        })
        .interact_text()?;

    let gender: Gender = select("Gender", defaults.gender)?;
    let units: Units = select("Units", defaults.units)?;

    let (height_hint, weight_hint) = match units {
        Units::Metric => (defaults.height.clone(), defaults.weight.clone()),
        Units::Imperial => ("5 ft 11 in".to_string(), "180 lbs".to_string()),
    };

    let height: String = Input::new()
        .with_prompt("Height")
        .default(height_hint)
        .interact_text()?;

    let weight: String = Input::new()
        .with_prompt("Weight")
        .default(weight_hint)
        .interact_text()?;

    let fitness_level: FitnessLevel = select("Fitness level", defaults.fitness_level)?;
    let workout_intensity: WorkoutIntensity =
        select("Workout intensity", defaults.workout_intensity)?;
    let workout_duration: WorkoutDuration =
        select("Workout duration", defaults.workout_duration)?;

    let goal: String = Input::new()
        .with_prompt("Goal")
        .default(defaults.goal.clone())
        .interact_text()?;

    let target_areas = multi_select("Target areas", TARGET_AREAS, &defaults.target_areas)?;
    let workout_preferences = multi_select(
        "Workout preferences",
        WORKOUT_PREFERENCES,
        &defaults.workout_preferences,
    )?;
    let equipment = multi_select("Available equipment", EQUIPMENT, &defaults.equipment)?;

    let dietary_preference: DietaryPreference =
        select("Dietary preference", defaults.dietary_preference)?;

    let restrictions: String = Input::new()
        .with_prompt("Dietary restrictions (comma separated)")
        .allow_empty(true)
        .interact_text()?;

    Ok(UserProfile {
        name,
        age,
        gender,
        height,
        weight,
        units,
        fitness_level,
        workout_intensity,
        workout_duration,
        goal,
        target_areas,
        workout_preferences,
        equipment,
        dietary_preference,
        dietary_restrictions: split_list(&restrictions),
        ..defaults
    })
}

fn select<T: Choice + PartialEq>(prompt: &str, default: T) -> Result<T> {
    let labels: Vec<&str> = T::ALL.iter().map(|choice| choice.label()).collect();
    let default_index = T::ALL.iter().position(|choice| *choice == default).unwrap_or(0);

    let index = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(default_index)
        .interact()?;

    Ok(T::ALL[index])
}

fn multi_select(prompt: &str, options: &[&str], defaults: &[String]) -> Result<Vec<String>> {
    let checked: Vec<bool> = options
        .iter()
        .map(|option| defaults.iter().any(|d| d.eq_ignore_ascii_case(option)))
        .collect();

    let picked = MultiSelect::new()
        .with_prompt(prompt)
        .items(options)
        .defaults(&checked)
        .interact()?;

    Ok(picked.into_iter().map(|i| options[i].to_string()).collect())
}

/// Split a comma separated answer, dropping blanks
fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list() {
        assert_eq!(split_list("nuts, dairy ,, gluten"), vec!["nuts", "dairy", "gluten"]);
        assert!(split_list("  ").is_empty());
    }
}
