//! The linear setup workflow
//!
//! One run walks a fixed sequence of steps: prompt for files and
//! confirmations, then write config files, update the manifest, and
//! install dependencies. Prompting is abstracted behind [`SetupPrompter`]
//! so the whole workflow can be driven by a scripted response sequence in
//! tests instead of real interactive input.

use crate::manifest::{self, ManifestUpdate};
use crate::pm::{self, PackageManager};
use crate::templates::{self, ConfigTemplate};
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

/// Answers collected from the operator
#[derive(Debug, Clone, Default)]
pub struct SetupChoices {
    pub templates: Vec<ConfigTemplate>,
    pub add_scripts: bool,
    pub add_engines: bool,
    pub install: bool,
}

/// Prompt seam between the workflow and the interactive layer.
///
/// Each method returns `Ok(None)` when the operator cancelled at that
/// prompt, which terminates the run cleanly.
pub trait SetupPrompter {
    fn select_templates(&mut self) -> Result<Option<Vec<ConfigTemplate>>>;
    fn confirm_scripts(&mut self) -> Result<Option<bool>>;
    fn confirm_engines(&mut self) -> Result<Option<bool>>;
    fn confirm_install(&mut self, pm: PackageManager) -> Result<Option<bool>>;
}

/// What a completed run did, for the final summary and for tests
#[derive(Debug, Clone)]
pub struct SetupReport {
    pub package_manager: PackageManager,
    pub files_written: Vec<ConfigTemplate>,
    pub files_skipped: Vec<ConfigTemplate>,
    /// `None` when the manifest step was not entered
    pub manifest: Option<ManifestUpdate>,
    pub installed: bool,
}

/// Terminal state of one run
#[derive(Debug)]
pub enum SetupOutcome {
    Completed(SetupReport),
    Cancelled,
}

/// Workflow states, walked strictly in order; any prompt may divert the
/// run to the cancelled terminal state instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SetupStep {
    SelectFiles,
    ConfirmScripts,
    ConfirmEngines,
    ConfirmInstall,
    WriteFiles,
    UpdateManifest,
    InstallDeps,
    Done,
}

/// Drive the setup workflow in `dir` with the given prompter.
///
/// File copies are best-effort: a failed copy is reported and the rest
/// still run. A manifest failure is reported and the run continues. An
/// install failure is the one fatal step and propagates as an error.
pub async fn run_setup<P: SetupPrompter>(
    prompter: &mut P,
    dir: &Path,
    package_manager: PackageManager,
) -> Result<SetupOutcome> {
    let mut choices = SetupChoices::default();
    let mut report = SetupReport {
        package_manager,
        files_written: Vec::new(),
        files_skipped: Vec::new(),
        manifest: None,
        installed: false,
    };

    let mut step = SetupStep::SelectFiles;
    loop {
        step = match step {
            SetupStep::SelectFiles => match prompter.select_templates()? {
                Some(selected) => {
                    choices.templates = selected;
                    SetupStep::ConfirmScripts
                }
                None => return Ok(SetupOutcome::Cancelled),
            },
            SetupStep::ConfirmScripts => match prompter.confirm_scripts()? {
                Some(answer) => {
                    choices.add_scripts = answer;
                    SetupStep::ConfirmEngines
                }
                None => return Ok(SetupOutcome::Cancelled),
            },
            SetupStep::ConfirmEngines => match prompter.confirm_engines()? {
                Some(answer) => {
                    choices.add_engines = answer;
                    SetupStep::ConfirmInstall
                }
                None => return Ok(SetupOutcome::Cancelled),
            },
            SetupStep::ConfirmInstall => match prompter.confirm_install(package_manager)? {
                Some(answer) => {
                    choices.install = answer;
                    SetupStep::WriteFiles
                }
                None => return Ok(SetupOutcome::Cancelled),
            },
            SetupStep::WriteFiles => {
                write_files(dir, &choices.templates, &mut report);
                if choices.add_scripts || choices.add_engines {
                    SetupStep::UpdateManifest
                } else if choices.install {
                    SetupStep::InstallDeps
                } else {
                    SetupStep::Done
                }
            }
            SetupStep::UpdateManifest => {
                update_manifest(dir, &choices, &mut report);
                if choices.install {
                    SetupStep::InstallDeps
                } else {
                    SetupStep::Done
                }
            }
            SetupStep::InstallDeps => {
                pm::run_install(package_manager, dir).await?;
                report.installed = true;
                SetupStep::Done
            }
            SetupStep::Done => break,
        };
    }

    print_summary(&choices, &report);
    Ok(SetupOutcome::Completed(report))
}

/// Best-effort fan-out over the selected templates; one failed copy does
/// not abort the remaining ones.
fn write_files(dir: &Path, selected: &[ConfigTemplate], report: &mut SetupReport) {
    for template in selected {
        match templates::materialize(dir, *template) {
            Ok(true) => {
                println!("  {} {}", "created".green(), template.file_name());
                report.files_written.push(*template);
            }
            Ok(false) => {
                println!(
                    "  {} {} (already exists)",
                    "skipped".yellow(),
                    template.file_name()
                );
                report.files_skipped.push(*template);
            }
            Err(e) => {
                eprintln!(
                    "{} could not write {}: {}",
                    "Warning:".yellow(),
                    template.file_name(),
                    e
                );
            }
        }
    }
}

/// Manifest failures are reported and the run continues.
fn update_manifest(dir: &Path, choices: &SetupChoices, report: &mut SetupReport) {
    match manifest::update_manifest(dir, choices.add_scripts, choices.add_engines) {
        Ok(ManifestUpdate::Skipped) => {
            println!(
                "  {} no {} found, nothing to update",
                "skipped".yellow(),
                manifest::MANIFEST_FILE
            );
            report.manifest = Some(ManifestUpdate::Skipped);
        }
        Ok(ManifestUpdate::Updated) => {
            println!("  {} {}", "updated".green(), manifest::MANIFEST_FILE);
            report.manifest = Some(ManifestUpdate::Updated);
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
        }
    }
}

/// Follow-up commands, shown only when both the scripts and the install
/// were selected and the install went through.
fn print_summary(choices: &SetupChoices, report: &SetupReport) {
    if !(report.installed && choices.add_scripts) {
        return;
    }

    println!();
    println!("  Available commands");
    println!();

    for (name, _) in manifest::SCRIPTS {
        println!("  {}", report.package_manager.run_script(name));
    }
}
