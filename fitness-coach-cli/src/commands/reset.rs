use anyhow::Result;
use colored::Colorize;
use dialoguer::Confirm;

use super::context::CoachContext;

/// Wipe the program and profile, keeping the theme
pub async fn reset(mut ctx: CoachContext, force: bool) -> Result<()> {
    if !force {
        let confirmed = Confirm::new()
            .with_prompt("Delete your program, profile and streak?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("Reset cancelled.");
            return Ok(());
        }
    }

    ctx.reset();

    println!("{} All progress has been reset.", "✓".green());
    Ok(())
}
