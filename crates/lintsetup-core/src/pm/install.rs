//! Install command construction and execution

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command as TokioCommand;

use super::PackageManager;

/// Development dependencies installed by the tool, in install-command order
pub const DEV_DEPENDENCIES: &[(&str, &str)] = &[
    ("eslint", "^9.0.0"),
    ("@eslint/js", "^9.0.0"),
    ("typescript-eslint", "^7.5.0"),
    ("prettier", "^3.2.0"),
    ("eslint-config-prettier", "^9.1.0"),
    ("eslint-plugin-prettier", "^5.1.0"),
    ("eslint-plugin-import", "^2.29.0"),
    ("eslint-plugin-simple-import-sort", "^12.0.0"),
    ("eslint-plugin-unused-imports", "^3.1.0"),
    ("globals", "^15.0.0"),
];

impl PackageManager {
    /// Build the dev-dependency install command for this package manager.
    ///
    /// Pure and total: every dependency becomes a `name@range` token,
    /// joined by single spaces in input order.
    pub fn install_command(&self, deps: &[(&str, &str)]) -> String {
        let tokens = deps
            .iter()
            .map(|(name, range)| format!("{}@{}", name, range))
            .collect::<Vec<_>>()
            .join(" ");

        match self {
            PackageManager::Bun => format!("bun add -d {}", tokens),
            PackageManager::Pnpm => format!("pnpm add -D {}", tokens),
            PackageManager::Yarn => format!("yarn add -D {}", tokens),
            PackageManager::Npm => format!("npm install --save-dev {}", tokens),
        }
    }

    /// Command a user runs to invoke a package.json script with this manager
    pub fn run_script(&self, script: &str) -> String {
        match self {
            PackageManager::Bun => format!("bun run {}", script),
            PackageManager::Pnpm => format!("pnpm run {}", script),
            PackageManager::Yarn => format!("yarn {}", script),
            PackageManager::Npm => format!("npm run {}", script),
        }
    }
}

/// Run the dev-dependency install in `dir` with output shown to the user.
/// Shows the command being executed before spawning it.
pub async fn run_install(pm: PackageManager, dir: &Path) -> Result<()> {
    let cmd = pm.install_command(DEV_DEPENDENCIES);
    println!();
    println!("{} {}", "Running:".dimmed(), cmd.yellow());
    println!();

    let status = TokioCommand::new("sh")
        .arg("-c")
        .arg(&cmd)
        .current_dir(dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await;

    match status {
        Ok(status) if status.success() => Ok(()),
        Ok(status) => {
            anyhow::bail!(
                "Installation failed with exit code: {}\n\
                 Please try installing manually: {}",
                status.code().unwrap_or(-1),
                cmd
            );
        }
        Err(e) => {
            anyhow::bail!(
                "Failed to run {}: {}\n\
                 Please try installing manually: {}",
                pm.command(),
                e,
                cmd
            );
        }
    }
}
