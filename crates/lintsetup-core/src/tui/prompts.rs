//! Charm-style CLI prompts using cliclack

use crate::pm::PackageManager;
use crate::templates::ConfigTemplate;
use crate::workflow::{run_setup, SetupOutcome, SetupPrompter};
use anyhow::Result;

/// Prompter backed by real cliclack prompts
pub struct CliPrompter;

/// Map a prompt interaction result, turning an interrupted read (Esc or
/// Ctrl+C inside the prompt) into a cancellation.
fn interaction<T>(result: std::io::Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.kind() == std::io::ErrorKind::Interrupted => Ok(None),
        Err(e) => Err(e.into()),
    }
}

impl SetupPrompter for CliPrompter {
    fn select_templates(&mut self) -> Result<Option<Vec<ConfigTemplate>>> {
        let mut multi = cliclack::multiselect("Which configuration files should be created?");
        for template in ConfigTemplate::ALL {
            multi = multi.item(template, template.label(), template.file_name());
        }

        interaction(
            multi
                .initial_values(ConfigTemplate::ALL.to_vec())
                .required(false)
                .interact(),
        )
    }

    fn confirm_scripts(&mut self) -> Result<Option<bool>> {
        interaction(
            cliclack::confirm("Add lint and format scripts to package.json?")
                .initial_value(true)
                .interact(),
        )
    }

    fn confirm_engines(&mut self) -> Result<Option<bool>> {
        interaction(
            cliclack::confirm("Add a Node version constraint to package.json?")
                .initial_value(true)
                .interact(),
        )
    }

    fn confirm_install(&mut self, pm: PackageManager) -> Result<Option<bool>> {
        interaction(
            cliclack::confirm(format!("Install dev dependencies with {}?", pm))
                .initial_value(true)
                .interact(),
        )
    }
}

/// Run the interactive setup in the current working directory.
pub async fn run() -> Result<()> {
    let dir = std::env::current_dir()?;

    cliclack::intro("lintsetup")?;

    let package_manager = PackageManager::detect(&dir);
    cliclack::log::info(format!("Detected package manager: {}", package_manager))?;

    let mut prompter = CliPrompter;
    match run_setup(&mut prompter, &dir, package_manager).await? {
        SetupOutcome::Completed(_) => {
            cliclack::outro("Linting is ready. Happy coding!")?;
        }
        SetupOutcome::Cancelled => {
            cliclack::outro("Setup cancelled.")?;
        }
    }

    Ok(())
}
