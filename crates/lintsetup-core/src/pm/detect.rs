//! Package manager detection for Node projects

use std::fmt;
use std::path::Path;
use std::process::Command;

/// Supported Node package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Bun,
    Pnpm,
    Yarn,
    Npm,
}

impl PackageManager {
    /// Name of the package manager executable
    pub fn command(&self) -> &'static str {
        match self {
            PackageManager::Bun => "bun",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Npm => "npm",
        }
    }

    /// Lockfile whose presence marks a project as managed by this manager
    pub fn lockfile(&self) -> &'static str {
        match self {
            PackageManager::Bun => "bun.lockb",
            PackageManager::Pnpm => "pnpm-lock.yaml",
            PackageManager::Yarn => "yarn.lock",
            PackageManager::Npm => "package-lock.json",
        }
    }

    /// Detect which package manager manages the project at `dir`.
    ///
    /// Lockfiles win, first match in order of preference. With no lockfile
    /// a working `bun` executable selects bun, otherwise npm. Never fails.
    pub fn detect(dir: &Path) -> PackageManager {
        if let Some(pm) = PackageManager::from_lockfiles(dir) {
            return pm;
        }
        if bun_available() {
            return PackageManager::Bun;
        }
        PackageManager::Npm
    }

    /// Lockfile-only detection, first match wins
    pub fn from_lockfiles(dir: &Path) -> Option<PackageManager> {
        const ORDER: [PackageManager; 4] = [
            PackageManager::Bun,
            PackageManager::Pnpm,
            PackageManager::Yarn,
            PackageManager::Npm,
        ];

        ORDER
            .into_iter()
            .find(|pm| dir.join(pm.lockfile()).exists())
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command())
    }
}

/// Probe for a working `bun` executable; output is discarded.
/// Only bun is probed: with no lockfile it is the preferred modern default.
fn bun_available() -> bool {
    Command::new("bun")
        .arg("--version")
        .output()
        .is_ok_and(|o| o.status.success())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn dir_with_lockfiles(names: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in names {
            fs::write(dir.path().join(name), "").unwrap();
        }
        dir
    }

    #[test]
    fn test_detects_each_lockfile_alone() {
        for (lockfile, expected) in [
            ("bun.lockb", PackageManager::Bun),
            ("pnpm-lock.yaml", PackageManager::Pnpm),
            ("yarn.lock", PackageManager::Yarn),
            ("package-lock.json", PackageManager::Npm),
        ] {
            let dir = dir_with_lockfiles(&[lockfile]);
            assert_eq!(PackageManager::detect(dir.path()), expected);
        }
    }

    #[test]
    fn test_bun_lockfile_wins_over_others() {
        let dir = dir_with_lockfiles(&["bun.lockb", "pnpm-lock.yaml", "yarn.lock"]);
        assert_eq!(PackageManager::detect(dir.path()), PackageManager::Bun);
    }

    #[test]
    fn test_pnpm_lockfile_wins_over_yarn_and_npm() {
        let dir = dir_with_lockfiles(&["pnpm-lock.yaml", "yarn.lock", "package-lock.json"]);
        assert_eq!(PackageManager::detect(dir.path()), PackageManager::Pnpm);
    }

    #[test]
    fn test_no_lockfile_yields_none() {
        let dir = TempDir::new().unwrap();
        assert_eq!(PackageManager::from_lockfiles(dir.path()), None);
    }

    #[test]
    fn test_detect_without_lockfile_falls_back_to_probe_or_npm() {
        // The bun probe depends on the host; either way the fallback
        // must come from the probe chain, never pnpm or yarn.
        let dir = TempDir::new().unwrap();
        let detected = PackageManager::detect(dir.path());
        assert!(matches!(
            detected,
            PackageManager::Bun | PackageManager::Npm
        ));
    }
}
