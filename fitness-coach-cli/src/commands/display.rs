use colored::Colorize;
use fitness_coach::models::{DailyPlan, ProgressUpdate, User};
use fitness_coach::{Program, ToggleOutcome};

use super::context::CoachContext;

/// Progress lines are stored verbatim; the list marker is dropped for display
pub fn progress_line(line: &str) -> &str {
    line.strip_prefix("- ").unwrap_or(line)
}

pub fn print_day(ctx: &CoachContext, index: usize, day: &DailyPlan) {
    let total = ctx.coach.program().len();
    let plan = &day.plan;

    println!(
        "{} {}",
        format!("Day {} of {}", index + 1, total).bold(),
        format!("({})", ctx.format_date(day.date)).dimmed()
    );
    println!("────────────────────────────────");

    match &plan.workout {
        Some(workout) => {
            println!();
            println!("{} {}", "🏋️ Workout:".cyan().bold(), workout.focus);
            for (i, (exercise, done)) in workout.exercises.iter().zip(&day.completion).enumerate() {
                let check = if *done { "[x]".green() } else { "[ ]".normal() };
                println!(
                    "  {} {}. {} {}",
                    check,
                    i + 1,
                    exercise.name.bold(),
                    format!(
                        "({}, {}, {} x {})",
                        exercise.target_muscles, exercise.difficulty, exercise.sets, exercise.reps
                    )
                    .dimmed()
                );
                if exercise.video.starts_with("http") {
                    println!("       {}", exercise.video.dimmed());
                }
            }
            println!(
                "  {} {}/{} done",
                "Progress:".dimmed(),
                day.completed_count(),
                day.completion.len()
            );
            if !workout.safety_tip.is_empty() {
                println!("  {} {}", "Safety Tip:".yellow(), workout.safety_tip);
            }
        }
        None => {
            println!();
            println!("{}", "No workout in today's plan.".dimmed());
        }
    }

    if let Some(meals) = &plan.meal_plan {
        println!();
        println!("{}", "🍽️ Meal Plan".cyan().bold());
        for meal in meals {
            println!(
                "  {} {} {}",
                format!("{}:", meal.meal_type).bold(),
                meal.description,
                format!("({} cal, {} protein)", meal.calories, meal.protein).dimmed()
            );
        }
        println!("  {} {} cal", "Total:".dimmed(), plan.total_meal_calories());
    }

    if let Some(summary) = &plan.progress_summary {
        println!();
        println!("{}", "📈 Progress".cyan().bold());
        for line in summary {
            println!("  • {}", progress_line(line));
        }
    }

    if let Some(tip) = &plan.tip_of_the_day {
        println!();
        println!("{} {}", "💡 Tip of the Day:".cyan().bold(), tip.italic());
    }

    println!();
    println!(
        "{} {} kcal",
        "Estimated calories burned:".dimmed(),
        plan.estimated_calories
    );
}

pub fn print_toggle(outcome: &ToggleOutcome, exercise_name: &str) {
    if outcome.checked {
        println!("{} Completed {}", "✓".green(), exercise_name.bold());
    } else {
        println!("{} Unchecked {}", "○".dimmed(), exercise_name.bold());
    }

    if let Some(update) = &outcome.progress {
        print_progress_update(update);
    }
}

pub fn print_progress_update(update: &ProgressUpdate) {
    println!();
    println!("{}", "🎉 Day complete!".green().bold());
    println!(
        "  Streak: {} → {}",
        update.previous_streak,
        update.streak_days.to_string().green().bold()
    );
    if update.previous_weight != update.weight {
        println!("  Weight: {} → {}", update.previous_weight, update.weight.bold());
    }
}

pub fn print_profile(user: &User) {
    let profile = &user.profile;
    let progress = &user.progress;

    println!("{}", profile.name.bold());
    println!("────────────────────────────────");
    println!("{} {}", "Age:".cyan(), profile.age);
    println!("{} {}", "Gender:".cyan(), profile.gender);
    println!("{} {}", "Height:".cyan(), profile.height);
    println!("{} {}", "Weight:".cyan(), profile.weight);
    println!("{} {}", "Language:".cyan(), profile.language);
    println!("{} {}", "Units:".cyan(), profile.units);
    println!("{} {}", "Fitness level:".cyan(), profile.fitness_level);
    println!(
        "{} {}, {}",
        "Workouts:".cyan(),
        profile.workout_intensity,
        profile.workout_duration
    );
    println!("{} {}", "Goal:".cyan(), profile.goal);
    print_list("Target areas:", &profile.target_areas);
    print_list("Preferences:", &profile.workout_preferences);
    print_list("Equipment:", &profile.equipment);
    println!("{} {}", "Diet:".cyan(), profile.dietary_preference);
    print_list("Restrictions:", &profile.dietary_restrictions);
    println!();
    println!(
        "{} {} {}",
        "🔥".bold(),
        progress.streak_days.to_string().bold(),
        "day streak".dimmed()
    );
    if let Some(goal) = &progress.daily_goal {
        println!("{} {}", "Daily goal:".cyan(), goal);
    }
}

fn print_list(label: &str, items: &[String]) {
    let value = if items.is_empty() {
        "None".dimmed().to_string()
    } else {
        items.join(", ")
    };
    println!("{} {}", label.cyan(), value);
}

pub fn print_history(ctx: &CoachContext, program: &Program) {
    println!("{}", "Program History".bold());
    println!("────────────────────────────────");

    for (i, day) in program.days().iter().enumerate() {
        let marker = if i == program.current_index() { "▶" } else { " " };
        let status = if day.is_complete() {
            "✓ complete".green()
        } else {
            format!("{}/{}", day.completed_count(), day.completion.len()).yellow()
        };

        println!(
            "{} Day {:<3} {}  {:<30} {}",
            marker,
            i + 1,
            ctx.format_date(day.date).dimmed(),
            day.plan.focus(),
            status
        );
    }
}

pub fn print_no_program() {
    println!("No program yet.");
    println!();
    println!("Run `fitness-coach start` to create your first plan.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_line_strips_marker() {
        assert_eq!(progress_line("- Streak: 3 days"), "Streak: 3 days");
        assert_eq!(progress_line("Streak: 3 days"), "Streak: 3 days");
        assert_eq!(progress_line("-- odd"), "-- odd");
    }
}
