use fitness_coach::models::{DailyPlan, Meal, Theme, User};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph, Widget, Wrap},
};

use super::app::Status;

/// Colours for one theme
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub bar: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                background: Color::Black,
                text: Color::White,
                muted: Color::Gray,
                accent: Color::Cyan,
                success: Color::Green,
                warning: Color::Yellow,
                error: Color::Red,
                bar: Color::DarkGray,
            },
            Theme::Light => Self {
                background: Color::White,
                text: Color::Black,
                muted: Color::DarkGray,
                accent: Color::Blue,
                success: Color::Green,
                warning: Color::Magenta,
                error: Color::Red,
                bar: Color::Gray,
            },
        }
    }

    fn border(&self, is_selected: bool) -> Style {
        if is_selected {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.muted)
        }
    }

    fn label(&self) -> Style {
        Style::default().fg(self.muted)
    }

    fn value(&self) -> Style {
        Style::default().fg(self.text).add_modifier(Modifier::BOLD)
    }
}

/// Paint the whole frame in the theme background
pub fn render_background(area: Rect, buf: &mut Buffer, palette: &Palette) {
    Block::default()
        .style(Style::default().bg(palette.background).fg(palette.text))
        .render(area, buf);
}

/// Render the day header: date, focus and calorie estimate
pub fn render_day_header(
    area: Rect,
    buf: &mut Buffer,
    palette: &Palette,
    title: &str,
    day: &DailyPlan,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" 📅 {} ", title))
        .border_style(palette.border(true));

    let inner = block.inner(area);
    block.render(area, buf);

    let lines = vec![Line::from(vec![
        Span::styled("Focus: ", palette.label()),
        Span::styled(day.plan.focus().to_string(), palette.value()),
        Span::styled("   Estimated burn: ", palette.label()),
        Span::styled(
            format!("{} kcal", day.plan.estimated_calories),
            Style::default()
                .fg(palette.warning)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("   Meals: ", palette.label()),
        Span::styled(
            format!("{} kcal", day.plan.total_meal_calories()),
            palette.value(),
        ),
    ])];

    Paragraph::new(lines).render(inner, buf);
}

/// Render the completion gauge for a day
pub fn render_completion(area: Rect, buf: &mut Buffer, palette: &Palette, day: &DailyPlan) {
    let total = day.completion.len();
    let done = day.completed_count();
    let ratio = if total == 0 { 0.0 } else { done as f64 / total as f64 };

    let (label, color) = if day.is_complete() && total > 0 {
        ("✓ Day complete".to_string(), palette.success)
    } else {
        (format!("{}/{} exercises", done, total), palette.accent)
    };

    Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Completion ")
                .border_style(palette.border(false)),
        )
        .gauge_style(Style::default().fg(color).bg(palette.bar))
        .ratio(ratio)
        .label(label)
        .render(area, buf);
}

/// Render the exercise checklist
pub fn render_workout(
    area: Rect,
    buf: &mut Buffer,
    palette: &Palette,
    day: &DailyPlan,
    selected_index: usize,
    is_selected: bool,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" 🏋️ Workout ")
        .border_style(palette.border(is_selected));

    let inner = block.inner(area);
    block.render(area, buf);

    let Some(workout) = &day.plan.workout else {
        Paragraph::new("No workout in this plan.")
            .style(palette.label())
            .render(inner, buf);
        return;
    };

    let mut items: Vec<ListItem> = workout
        .exercises
        .iter()
        .zip(&day.completion)
        .enumerate()
        .map(|(idx, (exercise, done))| {
            let check = if *done { "[x]" } else { "[ ]" };

            let line_style = if is_selected && idx == selected_index {
                Style::default()
                    .fg(palette.warning)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else if *done {
                Style::default().fg(palette.success)
            } else {
                Style::default().fg(palette.text)
            };

            ListItem::new(vec![
                Line::from(Span::styled(
                    format!("{} {}", check, exercise.name),
                    line_style,
                )),
                Line::from(Span::styled(
                    format!(
                        "    {} · {} · {} x {}",
                        exercise.target_muscles, exercise.difficulty, exercise.sets, exercise.reps
                    ),
                    palette.label(),
                )),
            ])
        })
        .collect();

    if !workout.safety_tip.is_empty() {
        items.push(ListItem::new(Line::from("")));
        items.push(ListItem::new(Line::from(vec![
            Span::styled("⚠ ", Style::default().fg(palette.warning)),
            Span::styled(workout.safety_tip.clone(), palette.label()),
        ])));
    }

    List::new(items).render(inner, buf);
}

/// Render the meal plan
pub fn render_meals(
    area: Rect,
    buf: &mut Buffer,
    palette: &Palette,
    meals: Option<&[Meal]>,
    selected_index: usize,
    is_selected: bool,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" 🍽️ Meal Plan ")
        .border_style(palette.border(is_selected));

    let inner = block.inner(area);
    block.render(area, buf);

    let meals = match meals {
        Some(meals) if !meals.is_empty() => meals,
        _ => {
            Paragraph::new("No meals in this plan.")
                .style(palette.label())
                .render(inner, buf);
            return;
        }
    };

    let items: Vec<ListItem> = meals
        .iter()
        .enumerate()
        .map(|(idx, meal)| {
            let name_style = if is_selected && idx == selected_index {
                Style::default()
                    .fg(palette.warning)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
            };

            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(format!("{}: ", meal.meal_type), name_style),
                    Span::styled(meal.description.clone(), Style::default().fg(palette.text)),
                ]),
                Line::from(Span::styled(
                    format!("    {} cal · {} protein", meal.calories, meal.protein),
                    palette.label(),
                )),
            ])
        })
        .collect();

    List::new(items).render(inner, buf);
}

/// Render the progress notes and tip of the day
pub fn render_insights(area: Rect, buf: &mut Buffer, palette: &Palette, day: &DailyPlan) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" 📈 Progress ")
        .border_style(palette.border(false));

    let inner = block.inner(area);
    block.render(area, buf);

    let mut lines: Vec<Line> = day
        .plan
        .progress_summary
        .iter()
        .flatten()
        .map(|line| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(palette.accent)),
                Span::styled(
                    line.strip_prefix("- ").unwrap_or(line).to_string(),
                    Style::default().fg(palette.text),
                ),
            ])
        })
        .collect();

    if let Some(tip) = &day.plan.tip_of_the_day {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            "💡 Tip of the Day",
            Style::default()
                .fg(palette.warning)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            tip.clone(),
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    if lines.is_empty() {
        lines.push(Line::from(Span::styled("Nothing to report yet.", palette.label())));
    }

    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .render(inner, buf);
}

/// Render the profile card with streak and weight
pub fn render_profile(area: Rect, buf: &mut Buffer, palette: &Palette, user: &User) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" 👤 {} ", user.profile.name))
        .border_style(palette.border(false));

    let inner = block.inner(area);
    block.render(area, buf);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("🔥 Streak: ", palette.label()),
            Span::styled(
                format!("{} days", user.progress.streak_days),
                Style::default()
                    .fg(palette.success)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Weight: ", palette.label()),
            Span::styled(user.profile.weight.clone(), palette.value()),
        ]),
        Line::from(vec![
            Span::styled("Level: ", palette.label()),
            Span::styled(user.profile.fitness_level.to_string(), palette.value()),
        ]),
        Line::from(vec![
            Span::styled("Goal: ", palette.label()),
            Span::styled(user.profile.goal.clone(), Style::default().fg(palette.text)),
        ]),
    ];

    if let Some(goal) = &user.progress.daily_goal {
        lines.push(Line::from(vec![
            Span::styled("Today: ", palette.label()),
            Span::styled(goal.clone(), Style::default().fg(palette.text)),
        ]));
    }

    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .render(inner, buf);
}

/// Render the placeholder shown before a program exists
pub fn render_empty(area: Rect, buf: &mut Buffer, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" AI Fitness Coach ")
        .border_style(palette.border(true));

    let inner = block.inner(area);
    block.render(area, buf);

    let lines = vec![
        Line::from(Span::styled("No program yet.", palette.value())),
        Line::from(""),
        Line::from(Span::styled(
            "Quit and run `fitness-coach start` to enter your profile.",
            palette.label(),
        )),
    ];

    Paragraph::new(lines).render(inner, buf);
}

/// Render help overlay
pub fn render_help_overlay(area: Rect, buf: &mut Buffer, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" ❓ Help ")
        .border_style(Style::default().fg(palette.accent))
        .style(Style::default().bg(palette.background));

    let inner = block.inner(area);
    block.render(area, buf);

    let section = Style::default().fg(palette.accent);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default()
                .fg(palette.warning)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("Days:", section)),
        Line::from("  ←/h      - Previous day"),
        Line::from("  →/l      - Next day"),
        Line::from("  n        - Generate next day"),
        Line::from(""),
        Line::from(Span::styled("Exercises:", section)),
        Line::from("  ↑/k      - Move up"),
        Line::from("  ↓/j      - Move down"),
        Line::from("  Space    - Check or uncheck"),
        Line::from("  Tab      - Switch panel"),
        Line::from(""),
        Line::from(Span::styled("Other:", section)),
        Line::from("  t        - Toggle theme"),
        Line::from("  ?        - Toggle this help"),
        Line::from("  q        - Quit"),
        Line::from(""),
        Line::from(Span::styled("Press ? or ESC to close", palette.label())),
    ];

    Paragraph::new(help_text)
        .style(Style::default().fg(palette.text))
        .render(inner, buf);
}

/// Render status bar at bottom
pub fn render_status_bar(
    area: Rect,
    buf: &mut Buffer,
    palette: &Palette,
    status: Option<&Status>,
    generating: bool,
) {
    let bar = Style::default().bg(palette.bar);

    let message = if generating {
        Span::styled(
            " ⏳ Your coach is writing the next plan... ",
            bar.fg(palette.warning),
        )
    } else {
        match status {
            Some(status) if status.is_error => {
                Span::styled(format!(" ✗ {} ", status.message), bar.fg(palette.error))
            }
            Some(status) => Span::styled(format!(" {} ", status.message), bar.fg(palette.success)),
            None => Span::styled(" Ready ", bar.fg(palette.success)),
        }
    };

    let help_hint = Span::styled(" Press ? for help ", bar.fg(palette.text));

    Paragraph::new(Line::from(vec![message, help_hint]))
        .style(bar)
        .render(area, buf);
}
