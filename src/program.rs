use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CoachError, Result};
use crate::models::{DailyPlan, ParsedPlan, ProgressUpdate, User};

/// Ordered log of daily plans with a cursor on the day being viewed.
///
/// Days are only ever appended; the log is cleared as a whole by `reset`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Program {
    days: Vec<DailyPlan>,
    current_day: usize,
}

/// What a single exercise toggle changed
#[derive(Debug, Clone, PartialEq)]
pub struct ToggleOutcome {
    pub day: usize,
    pub exercise: usize,
    /// New state of the flag
    pub checked: bool,
    /// Present only when this toggle completed the day for the first time
    pub progress: Option<ProgressUpdate>,
}

impl Program {
    /// Rebuild a program from stored parts, clamping the cursor into range
    pub fn from_parts(days: Vec<DailyPlan>, current_day: usize) -> Self {
        let current_day = current_day.min(days.len().saturating_sub(1));
        Self { days, current_day }
    }

    pub fn days(&self) -> &[DailyPlan] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_day
    }

    pub fn current_day(&self) -> Option<&DailyPlan> {
        self.days.get(self.current_day)
    }

    pub fn day(&self, index: usize) -> Result<&DailyPlan> {
        self.days.get(index).ok_or(CoachError::DayOutOfRange {
            index,
            len: self.days.len(),
        })
    }

    /// Append a freshly generated day and move the cursor onto it
    pub fn append_day(&mut self, plan: ParsedPlan, date: NaiveDate) -> &DailyPlan {
        self.days.push(DailyPlan::new(plan, date));
        self.current_day = self.days.len() - 1;

        tracing::debug!(day = self.current_day + 1, %date, "Appended day to program");

        &self.days[self.current_day]
    }

    /// Flip one exercise flag. The first time a day becomes fully complete
    /// the user's streak and weight are advanced in the same step.
    pub fn toggle_exercise(
        &mut self,
        user: &mut User,
        day: usize,
        exercise: usize,
    ) -> Result<ToggleOutcome> {
        let len = self.days.len();
        let predecessor_completed = match day {
            0 => true,
            _ => self.days.get(day - 1).is_some_and(DailyPlan::is_complete),
        };

        let plan = self
            .days
            .get_mut(day)
            .ok_or(CoachError::DayOutOfRange { index: day, len })?;

        let exercises = plan.completion.len();
        let was_complete = plan.is_complete();
        let flag = plan
            .completion
            .get_mut(exercise)
            .ok_or(CoachError::ExerciseOutOfRange {
                day,
                index: exercise,
                len: exercises,
            })?;

        *flag = !*flag;
        let checked = *flag;

        let progress = if !was_complete && plan.is_complete() && !plan.credited {
            plan.credited = true;
            Some(user.record_completed_day(predecessor_completed))
        } else {
            None
        };

        Ok(ToggleOutcome {
            day,
            exercise,
            checked,
            progress,
        })
    }

    pub fn previous_day(&mut self) -> usize {
        self.current_day = self.current_day.saturating_sub(1);
        self.current_day
    }

    pub fn next_day(&mut self) -> usize {
        self.current_day = (self.current_day + 1).min(self.days.len().saturating_sub(1));
        self.current_day
    }

    pub fn select_day(&mut self, index: usize) -> Result<()> {
        if index >= self.days.len() {
            return Err(CoachError::DayOutOfRange {
                index,
                len: self.days.len(),
            });
        }
        self.current_day = index;
        Ok(())
    }

    /// Workout focus of every day so far, oldest first
    pub fn focus_history(&self) -> Vec<&str> {
        self.days.iter().map(|d| d.plan.focus()).collect()
    }

    pub fn reset(&mut self) {
        self.days.clear();
        self.current_day = 0;
    }
}
