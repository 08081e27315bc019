//! Bundled linter/formatter configuration templates
//!
//! Templates are embedded at compile time from the `templates/` directory
//! so they are always available and versioned with the binary. They are
//! copied verbatim and never overwrite an existing file.

use std::io;
use std::path::Path;

const ESLINT_CONFIG: &str = include_str!("../templates/eslint.config.js");
const PRETTIER_CONFIG: &str = include_str!("../templates/prettierrc.json");
const PRETTIER_IGNORE: &str = include_str!("../templates/prettierignore");

/// Logical configuration files the tool can materialize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigTemplate {
    Eslint,
    Prettier,
    Prettierignore,
}

impl ConfigTemplate {
    /// All templates, in the order they are offered for selection
    pub const ALL: [ConfigTemplate; 3] = [
        ConfigTemplate::Eslint,
        ConfigTemplate::Prettier,
        ConfigTemplate::Prettierignore,
    ];

    /// Target filename in the project directory
    pub fn file_name(&self) -> &'static str {
        match self {
            ConfigTemplate::Eslint => "eslint.config.js",
            ConfigTemplate::Prettier => ".prettierrc.json",
            ConfigTemplate::Prettierignore => ".prettierignore",
        }
    }

    /// Human-readable label for prompts
    pub fn label(&self) -> &'static str {
        match self {
            ConfigTemplate::Eslint => "ESLint flat config",
            ConfigTemplate::Prettier => "Prettier config",
            ConfigTemplate::Prettierignore => "Prettier ignore file",
        }
    }

    fn content(&self) -> &'static str {
        match self {
            ConfigTemplate::Eslint => ESLINT_CONFIG,
            ConfigTemplate::Prettier => PRETTIER_CONFIG,
            ConfigTemplate::Prettierignore => PRETTIER_IGNORE,
        }
    }
}

/// Write the template into `dir` unless the target file already exists.
///
/// Returns true when the file was created, false when an existing file was
/// left untouched. I/O errors propagate to the caller.
pub fn materialize(dir: &Path, template: ConfigTemplate) -> io::Result<bool> {
    let target = dir.join(template.file_name());
    if target.exists() {
        return Ok(false);
    }
    std::fs::write(&target, template.content())?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_templates_not_empty() {
        for template in ConfigTemplate::ALL {
            assert!(!template.content().is_empty());
        }
    }

    #[test]
    fn test_materialize_creates_file_with_template_content() {
        let dir = TempDir::new().unwrap();

        let written = materialize(dir.path(), ConfigTemplate::Eslint).unwrap();
        assert!(written);

        let on_disk = fs::read_to_string(dir.path().join("eslint.config.js")).unwrap();
        assert_eq!(on_disk, ESLINT_CONFIG);
    }

    #[test]
    fn test_materialize_skips_existing_file() {
        let dir = TempDir::new().unwrap();
        let target = dir.path().join(".prettierrc.json");
        fs::write(&target, "{ \"custom\": true }").unwrap();

        let written = materialize(dir.path(), ConfigTemplate::Prettier).unwrap();
        assert!(!written);

        let on_disk = fs::read_to_string(&target).unwrap();
        assert_eq!(on_disk, "{ \"custom\": true }");
    }

    #[test]
    fn test_materialize_each_template_uses_its_own_target() {
        let dir = TempDir::new().unwrap();

        for template in ConfigTemplate::ALL {
            assert!(materialize(dir.path(), template).unwrap());
        }

        assert!(dir.path().join("eslint.config.js").exists());
        assert!(dir.path().join(".prettierrc.json").exists());
        assert!(dir.path().join(".prettierignore").exists());
    }

    #[test]
    fn test_materialize_missing_directory_errors() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");

        assert!(materialize(&missing, ConfigTemplate::Eslint).is_err());
    }
}
