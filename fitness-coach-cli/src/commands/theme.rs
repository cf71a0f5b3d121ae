use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use fitness_coach::models::Theme;

use super::context::CoachContext;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ThemeChoice {
    Light,
    Dark,
    Toggle,
}

impl ThemeChoice {
    fn apply(self, current: Theme) -> Theme {
        match self {
            ThemeChoice::Light => Theme::Light,
            ThemeChoice::Dark => Theme::Dark,
            ThemeChoice::Toggle => current.toggled(),
        }
    }
}

/// Show or change the colour theme
pub async fn set_theme(mut ctx: CoachContext, choice: Option<ThemeChoice>) -> Result<()> {
    let Some(choice) = choice else {
        println!("Current theme: {}", ctx.theme.as_str().bold());
        return Ok(());
    };

    let theme = choice.apply(ctx.theme);
    ctx.set_theme(theme);

    println!("{} Theme set to {}", "✓".green(), theme.as_str().bold());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_choice() {
        assert_eq!(ThemeChoice::Light.apply(Theme::Dark), Theme::Light);
        assert_eq!(ThemeChoice::Dark.apply(Theme::Dark), Theme::Dark);
        assert_eq!(ThemeChoice::Toggle.apply(Theme::Dark), Theme::Light);
        assert_eq!(ThemeChoice::Toggle.apply(Theme::Light), Theme::Dark);
    }
}
