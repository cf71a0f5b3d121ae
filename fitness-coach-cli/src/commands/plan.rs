use anyhow::{bail, Result};
use clap::Subcommand;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use std::time::Duration;

use super::context::CoachContext;
use super::display;

/// Run a future behind a terminal spinner
pub async fn with_spinner<T>(message: &'static str, future: impl Future<Output = T>) -> T {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));

    let output = future.await;

    spinner.finish_and_clear();
    output
}

#[derive(Subcommand)]
pub enum DaySubcommands {
    /// Go to the previous day
    Prev,

    /// Go to the next day
    Next,

    /// Go to a specific day
    Goto {
        /// Day number (1-based)
        day: usize,
    },
}

/// Generate the next day of the program
pub async fn next_day(mut ctx: CoachContext) -> Result<()> {
    if ctx.coach.program().is_empty() {
        display::print_no_program();
        return Ok(());
    }

    let generator = ctx.generator()?;
    let today = ctx.today();
    let day_number = ctx.coach.program().len() + 1;

    let result = with_spinner(
        "Your coach is writing the next plan...",
        ctx.coach.generate_next_day(&generator, today),
    )
    .await
    .map(|_| ());

    match result {
        Ok(()) => {
            ctx.save();
            println!("{} Day {} is ready!", "✓".green(), day_number);
            println!();
            show_current(&ctx);
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "✗".red(), e);
            Err(e.into())
        }
    }
}

/// Show the selected day, or a specific one
pub async fn show_day(ctx: CoachContext, day: Option<usize>) -> Result<()> {
    if ctx.coach.program().is_empty() {
        display::print_no_program();
        return Ok(());
    }

    match day {
        Some(number) => {
            let index = day_index(number)?;
            let plan = ctx.coach.program().day(index)?;
            display::print_day(&ctx, index, plan);
        }
        None => show_current(&ctx),
    }

    Ok(())
}

/// Check or uncheck one exercise
pub async fn toggle(mut ctx: CoachContext, exercise: usize, day: Option<usize>) -> Result<()> {
    if ctx.coach.program().is_empty() {
        display::print_no_program();
        return Ok(());
    }

    let index = match day {
        Some(number) => day_index(number)?,
        None => ctx.coach.program().current_index(),
    };
    let Some(exercise_index) = exercise.checked_sub(1) else {
        bail!("Exercise numbers start at 1");
    };

    let outcome = ctx.coach.toggle_exercise_on(index, exercise_index)?;
    ctx.save();

    let name = ctx
        .coach
        .program()
        .day(index)?
        .plan
        .exercises()
        .get(exercise_index)
        .map(|e| e.name.clone())
        .unwrap_or_default();

    display::print_toggle(&outcome, &name);

    Ok(())
}

/// Move the day cursor
pub async fn navigate(mut ctx: CoachContext, subcmd: DaySubcommands) -> Result<()> {
    if ctx.coach.program().is_empty() {
        display::print_no_program();
        return Ok(());
    }

    match subcmd {
        DaySubcommands::Prev => {
            ctx.coach.previous_day();
        }
        DaySubcommands::Next => {
            ctx.coach.next_day();
        }
        DaySubcommands::Goto { day } => {
            ctx.coach.select_day(day_index(day)?)?;
        }
    }

    ctx.save();
    show_current(&ctx);

    Ok(())
}

/// List every day with its focus and completion
pub async fn history(ctx: CoachContext) -> Result<()> {
    if ctx.coach.program().is_empty() {
        display::print_no_program();
        return Ok(());
    }

    display::print_history(&ctx, ctx.coach.program());
    Ok(())
}

fn show_current(ctx: &CoachContext) {
    if let Some(day) = ctx.coach.current_day() {
        display::print_day(ctx, ctx.coach.program().current_index(), day);
    }
}

/// Convert a 1-based day number from the command line
fn day_index(number: usize) -> Result<usize> {
    match number.checked_sub(1) {
        Some(index) => Ok(index),
        None => bail!("Day numbers start at 1"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_index() {
        assert_eq!(day_index(1).unwrap(), 0);
        assert_eq!(day_index(7).unwrap(), 6);
        assert!(day_index(0).is_err());
    }

    #[tokio::test]
    async fn test_with_spinner_returns_output() {
        let value = with_spinner("working", async { 41 + 1 }).await;
        assert_eq!(value, 42);
    }
}
