use crossterm::event::KeyCode;
use fitness_coach::models::Theme;
use fitness_coach::Coach;

/// Application state for the TUI dashboard
pub struct App {
    /// Should the application quit?
    pub should_quit: bool,
    /// Currently selected panel
    pub selected_panel: Panel,
    /// Selected row in the current panel
    pub selected_index: usize,
    /// Show help overlay
    pub show_help: bool,
    /// A plan request is in flight; input is ignored until it resolves
    pub generating: bool,
    pub theme: Theme,
    /// Last message shown in the status bar
    pub status: Option<Status>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Workout,
    Meals,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub message: String,
    pub is_error: bool,
}

/// Side effect the dashboard performs after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    /// Program or cursor changed and should be persisted
    Save,
    SaveTheme,
    Generate,
}

impl App {
    pub fn new(theme: Theme) -> Self {
        Self {
            should_quit: false,
            selected_panel: Panel::Workout,
            selected_index: 0,
            show_help: false,
            generating: false,
            theme,
            status: None,
        }
    }

    pub fn set_info(&mut self, message: impl Into<String>) {
        self.status = Some(Status {
            message: message.into(),
            is_error: false,
        });
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status = Some(Status {
            message: message.into(),
            is_error: true,
        });
    }

    /// Reset row selection after the visible day changed
    pub fn day_changed(&mut self) {
        self.selected_index = 0;
    }

    /// Handle keyboard input
    pub fn handle_key(&mut self, key: KeyCode, coach: &mut Coach) -> Action {
        if self.generating {
            return Action::None;
        }

        // Help overlay takes precedence
        if self.show_help {
            if matches!(key, KeyCode::Char('?') | KeyCode::Esc) {
                self.show_help = false;
            }
            return Action::None;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
                Action::None
            }

            KeyCode::Char('?') => {
                self.show_help = true;
                Action::None
            }

            // Day navigation
            KeyCode::Left | KeyCode::Char('h') => self.change_day(coach, |c| c.previous_day()),
            KeyCode::Right | KeyCode::Char('l') => self.change_day(coach, |c| c.next_day()),

            KeyCode::Tab | KeyCode::BackTab => {
                self.selected_panel = match self.selected_panel {
                    Panel::Workout => Panel::Meals,
                    Panel::Meals => Panel::Workout,
                };
                self.selected_index = 0;
                Action::None
            }

            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_index = self.selected_index.saturating_sub(1);
                Action::None
            }

            KeyCode::Down | KeyCode::Char('j') => {
                let max_index = self.row_count(coach).saturating_sub(1);
                if self.selected_index < max_index {
                    self.selected_index += 1;
                }
                Action::None
            }

            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_selected(coach),

            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Char('g') => {
                if coach.program().is_empty() {
                    self.set_error("No program yet. Run `fitness-coach start` first.");
                    Action::None
                } else {
                    Action::Generate
                }
            }

            KeyCode::Char('t') | KeyCode::Char('T') => {
                self.theme = self.theme.toggled();
                self.set_info(format!("Theme: {}", self.theme));
                Action::SaveTheme
            }

            _ => Action::None,
        }
    }

    fn change_day(&mut self, coach: &mut Coach, step: impl FnOnce(&mut Coach) -> usize) -> Action {
        if coach.program().is_empty() {
            return Action::None;
        }

        let before = coach.program().current_index();
        if step(coach) == before {
            return Action::None;
        }

        self.day_changed();
        Action::Save
    }

    fn toggle_selected(&mut self, coach: &mut Coach) -> Action {
        if self.selected_panel != Panel::Workout {
            return Action::None;
        }

        let Some(name) = coach
            .current_day()
            .and_then(|day| day.plan.exercises().get(self.selected_index))
            .map(|exercise| exercise.name.clone())
        else {
            return Action::None;
        };

        match coach.toggle_exercise(self.selected_index) {
            Ok(outcome) => {
                match outcome.progress {
                    Some(update) => self.set_info(format!(
                        "🎉 Day complete! Streak {} days, weight {}",
                        update.streak_days, update.weight
                    )),
                    None if outcome.checked => self.set_info(format!("✓ {}", name)),
                    None => self.set_info(format!("○ {}", name)),
                }
                Action::Save
            }
            Err(e) => {
                self.set_error(e.to_string());
                Action::None
            }
        }
    }

    fn row_count(&self, coach: &Coach) -> usize {
        let Some(day) = coach.current_day() else {
            return 0;
        };

        match self.selected_panel {
            Panel::Workout => day.plan.exercises().len(),
            Panel::Meals => day.plan.meal_plan.as_ref().map_or(0, Vec::len),
        }
    }
}
