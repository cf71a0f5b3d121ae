mod config_cmd;
mod context;
mod dashboard;
mod display;
mod plan;
mod profile;
mod reset;
mod start;
mod theme;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use context::CoachContext;
pub use dashboard::DashboardCommand;
pub use plan::DaySubcommands;
pub use start::StartCommand;
pub use theme::ThemeChoice;

#[derive(Parser)]
#[command(name = "fitness-coach")]
#[command(about = "AI fitness coach with daily workout and meal plans", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "FITNESS_COACH_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Enter your profile and generate the first day
    Start(StartCommand),

    /// Generate the next day of the program
    Next,

    /// Show a day's workout, meals and tips
    Show {
        /// Day number (defaults to the selected day)
        #[arg(short, long)]
        day: Option<usize>,
    },

    /// Check or uncheck an exercise
    Toggle {
        /// Exercise number as listed by `show`
        exercise: usize,

        /// Day number (defaults to the selected day)
        #[arg(short, long)]
        day: Option<usize>,
    },

    /// Move between days
    #[command(subcommand)]
    Day(DaySubcommands),

    /// List all days of the program
    History,

    /// Show your profile and streak
    Profile,

    /// Show or change the colour theme
    Theme {
        #[arg(value_enum)]
        choice: Option<ThemeChoice>,
    },

    /// Delete the program and profile
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Launch interactive dashboard
    Dashboard(DashboardCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigSubcommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
enum ConfigSubcommands {
    /// Show current configuration
    Show,

    /// Edit configuration file
    Edit,

    /// Initialize configuration with defaults
    Init {
        /// Overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let config_path = self.config.as_deref();
        let load = || CoachContext::load(config_path);

        match self.command {
            Commands::Start(cmd) => cmd.execute(load()?).await,
            Commands::Next => plan::next_day(load()?).await,
            Commands::Show { day } => plan::show_day(load()?, day).await,
            Commands::Toggle { exercise, day } => plan::toggle(load()?, exercise, day).await,
            Commands::Day(subcmd) => plan::navigate(load()?, subcmd).await,
            Commands::History => plan::history(load()?).await,
            Commands::Profile => profile::show_profile(load()?).await,
            Commands::Theme { choice } => theme::set_theme(load()?, choice).await,
            Commands::Reset { force } => reset::reset(load()?, force).await,
            Commands::Dashboard(cmd) => cmd.execute(load()?).await,
            Commands::Config(subcmd) => match subcmd {
                ConfigSubcommands::Show => config_cmd::show_config(config_path).await,
                ConfigSubcommands::Edit => config_cmd::edit_config(config_path).await,
                ConfigSubcommands::Init { force } => {
                    config_cmd::init_config(config_path, force).await
                }
            },
            Commands::Completions { shell } => {
                generate_completions(shell);
                Ok(())
            }
        }
    }
}

fn generate_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;
    use clap_complete::generate;
    use std::io;

    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
