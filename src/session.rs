use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::{CoachError, Result};
use crate::models::{DailyPlan, User};
use crate::parser::{PlanFormat, PlanParser};
use crate::program::{Program, ToggleOutcome};

/// Text generation service that writes the next day's plan
#[async_trait]
pub trait PlanGenerator: Send + Sync {
    /// Produce the raw plan text for the day after `history`
    async fn generate(&self, user: &User, history: &[DailyPlan]) -> Result<String>;
}

/// Application state of one coaching session: who is training, what they
/// have been given so far, and how generated text is read.
pub struct Coach<F = PlanParser> {
    user: User,
    program: Program,
    format: F,
}

impl Coach<PlanParser> {
    pub fn new(user: User, program: Program) -> Self {
        Self::with_format(user, program, PlanParser::new())
    }
}

impl Default for Coach<PlanParser> {
    fn default() -> Self {
        Self::new(User::default(), Program::default())
    }
}

impl<F: PlanFormat> Coach<F> {
    pub fn with_format(user: User, program: Program, format: F) -> Self {
        Self {
            user,
            program,
            format,
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn current_day(&self) -> Option<&DailyPlan> {
        self.program.current_day()
    }

    /// Replace the profile and generate the first day with it
    pub async fn start_program(
        &mut self,
        user: User,
        generator: &dyn PlanGenerator,
        today: NaiveDate,
    ) -> Result<&DailyPlan> {
        self.user = user;
        self.generate_next_day(generator, today).await
    }

    /// Ask the generator for the next day and append it.
    ///
    /// The session stays mutably borrowed until the call resolves, so only one
    /// generation can be in flight. On failure the program is left untouched.
    pub async fn generate_next_day(
        &mut self,
        generator: &dyn PlanGenerator,
        today: NaiveDate,
    ) -> Result<&DailyPlan> {
        tracing::info!(day = self.program.len() + 1, "Generating plan");

        let text = generator.generate(&self.user, self.program.days()).await?;
        if text.trim().is_empty() {
            return Err(CoachError::EmptyResponse);
        }

        let plan = self.format.parse(&text);
        if plan.workout.is_none() {
            tracing::warn!("Generated plan has no workout section");
        }

        Ok(self.program.append_day(plan, today))
    }

    /// Toggle an exercise on the day currently selected
    pub fn toggle_exercise(&mut self, exercise: usize) -> Result<ToggleOutcome> {
        if self.program.is_empty() {
            return Err(CoachError::EmptyProgram);
        }
        let day = self.program.current_index();
        self.program.toggle_exercise(&mut self.user, day, exercise)
    }

    pub fn toggle_exercise_on(&mut self, day: usize, exercise: usize) -> Result<ToggleOutcome> {
        self.program.toggle_exercise(&mut self.user, day, exercise)
    }

    pub fn previous_day(&mut self) -> usize {
        self.program.previous_day()
    }

    pub fn next_day(&mut self) -> usize {
        self.program.next_day()
    }

    pub fn select_day(&mut self, index: usize) -> Result<()> {
        self.program.select_day(index)
    }

    /// Back to the default profile with an empty program
    pub fn reset(&mut self) {
        self.user = User::default();
        self.program.reset();
    }
}
