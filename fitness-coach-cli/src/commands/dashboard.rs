use anyhow::Result;
use clap::Args;

use super::context::CoachContext;
use crate::ui::Dashboard;

#[derive(Args)]
pub struct DashboardCommand {}

impl DashboardCommand {
    pub async fn execute(self, ctx: CoachContext) -> Result<()> {
        let mut dashboard = Dashboard::new(ctx)?;
        dashboard.run().await
    }
}
