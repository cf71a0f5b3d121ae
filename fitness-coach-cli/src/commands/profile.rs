use anyhow::Result;

use super::context::CoachContext;
use super::display;

/// Show the profile and streak of the current user
pub async fn show_profile(ctx: CoachContext) -> Result<()> {
    display::print_profile(ctx.coach.user());

    if ctx.coach.program().is_empty() {
        println!();
        println!("This is the sample profile. Run `fitness-coach start` to enter your own.");
    }

    Ok(())
}
