use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

use super::app::{Action, App, Panel};
use super::widgets::{self, Palette};
use crate::commands::CoachContext;

/// Dashboard manages the TUI lifecycle
pub struct Dashboard {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    app: App,
    ctx: CoachContext,
}

impl Dashboard {
    /// Create new dashboard instance
    pub fn new(ctx: CoachContext) -> Result<Self> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).context("Failed to create terminal")?;

        let app = App::new(ctx.theme);

        Ok(Self { terminal, app, ctx })
    }

    /// Run the dashboard event loop
    pub async fn run(&mut self) -> Result<()> {
        loop {
            self.draw()?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == event::KeyEventKind::Press {
                        match self.app.handle_key(key.code, &mut self.ctx.coach) {
                            Action::None => {}
                            Action::Save => self.ctx.save(),
                            Action::SaveTheme => self.ctx.set_theme(self.app.theme),
                            Action::Generate => self.generate_next_day().await?,
                        }
                    }
                }
            }

            if self.app.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let (app, ctx) = (&self.app, &self.ctx);
        self.terminal.draw(|f| ui(f, app, ctx))?;
        Ok(())
    }

    /// Request the next day while the status bar shows progress
    async fn generate_next_day(&mut self) -> Result<()> {
        let generator = match self.ctx.generator() {
            Ok(generator) => generator,
            Err(e) => {
                self.app.set_error(e.to_string());
                return Ok(());
            }
        };

        self.app.generating = true;
        self.draw()?;

        let today = self.ctx.today();
        let result = self
            .ctx
            .coach
            .generate_next_day(&generator, today)
            .await
            .map(|_| ());

        self.app.generating = false;

        // Drop keys pressed while waiting
        while event::poll(Duration::ZERO)? {
            event::read()?;
        }

        match result {
            Ok(()) => {
                self.ctx.save();
                self.app.day_changed();
                self.app.set_info(format!(
                    "✓ Day {} is ready",
                    self.ctx.coach.program().len()
                ));
            }
            Err(e) => self.app.set_error(e.to_string()),
        }

        Ok(())
    }

    /// Cleanup terminal on exit
    pub fn cleanup(&mut self) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to restore terminal")?;
        self.terminal.show_cursor().context("Failed to show cursor")?;

        Ok(())
    }
}

impl Drop for Dashboard {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

/// Render the UI
fn ui(f: &mut Frame, app: &App, ctx: &CoachContext) {
    let size = f.area();
    let palette = Palette::for_theme(app.theme);

    widgets::render_background(size, f.buffer_mut(), &palette);

    // Main layout: top area + status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(size);

    let program = ctx.coach.program();

    match ctx.coach.current_day() {
        Some(day) => {
            // Header, completion gauge, then the day's panels
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Length(3),
                    Constraint::Min(0),
                ])
                .split(main_chunks[0]);

            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(rows[2]);

            // Left column: workout (top) + meals (bottom)
            let left_panels = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(columns[0]);

            // Right column: profile (top) + progress and tip (bottom)
            let right_panels = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(8), Constraint::Min(0)])
                .split(columns[1]);

            let title = format!(
                "Day {} of {} · {}",
                program.current_index() + 1,
                program.len(),
                ctx.format_date(day.date)
            );

            widgets::render_day_header(rows[0], f.buffer_mut(), &palette, &title, day);
            widgets::render_completion(rows[1], f.buffer_mut(), &palette, day);

            widgets::render_workout(
                left_panels[0],
                f.buffer_mut(),
                &palette,
                day,
                app.selected_index,
                app.selected_panel == Panel::Workout,
            );

            widgets::render_meals(
                left_panels[1],
                f.buffer_mut(),
                &palette,
                day.plan.meal_plan.as_deref(),
                app.selected_index,
                app.selected_panel == Panel::Meals,
            );

            widgets::render_profile(right_panels[0], f.buffer_mut(), &palette, ctx.coach.user());
            widgets::render_insights(right_panels[1], f.buffer_mut(), &palette, day);
        }
        None => widgets::render_empty(main_chunks[0], f.buffer_mut(), &palette),
    }

    // Render status bar
    widgets::render_status_bar(
        main_chunks[1],
        f.buffer_mut(),
        &palette,
        app.status.as_ref(),
        app.generating,
    );

    // Render help overlay if active
    if app.show_help {
        let help_area = centered_rect(60, 80, size);
        widgets::render_help_overlay(help_area, f.buffer_mut(), &palette);
    }
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
