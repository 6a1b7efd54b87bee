use std::path::{Path, PathBuf};

use crate::error::Error;

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE: &str = ".docmark.toml";

/// Generation settings loaded from `.docmark.toml`.
/// Command-line flags override individual values after loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Add a parameter-type suffix to headings of overloaded methods.
    pub disambiguate_overloads: bool,
    /// Extension of every generated page, without the leading dot.
    pub extension: String,
    /// File name of each package's index page.
    pub index_file: String,
    /// Root directory of the generated site.
    pub output: PathBuf,
}

/// Raw TOML structure for `.docmark.toml`.
#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct DocmarkTomlConfig {
    #[serde(default)]
    disambiguate_overloads: Option<bool>,
    #[serde(default)]
    extension: Option<String>,
    #[serde(default)]
    index_file: Option<String>,
    #[serde(default)]
    output: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        return Self {
            disambiguate_overloads: true,
            extension: "md".to_string(),
            index_file: "README.md".to_string(),
            output: PathBuf::from("."),
        };
    }
}

impl Config {
    /// Load config from `.docmark.toml` in the given root directory.
    /// Returns defaults if the file doesn't exist.
    /// Returns an error if the file exists but is malformed: a config the
    /// user wrote is never silently replaced by defaults.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if reading fails (other than not-found),
    /// or `Error::TomlDe` if the TOML is malformed.
    pub fn load(root: &Path) -> Result<Self, Error> {
        let path = root.join(CONFIG_FILE);
        let content = match std::fs::read_to_string(&path) {
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(Error::Io(e)),
            Ok(c) => c,
        };
        return Self::parse(&content);
    }

    /// Parse config from TOML content, filling unset keys with defaults.
    ///
    /// # Errors
    ///
    /// Returns `Error::TomlDe` if the content is not valid config TOML.
    pub fn parse(content: &str) -> Result<Self, Error> {
        let raw: DocmarkTomlConfig = toml::from_str(content)?;
        let defaults = Self::default();
        return Ok(Self {
            disambiguate_overloads: raw
                .disambiguate_overloads
                .unwrap_or(defaults.disambiguate_overloads),
            extension: raw
                .extension
                .map(|ext| return ext.trim_start_matches('.').to_string())
                .unwrap_or(defaults.extension),
            index_file: raw.index_file.unwrap_or(defaults.index_file),
            output: raw.output.unwrap_or(defaults.output),
        });
    }

    /// Replace the output directory. A blank value means the current directory.
    pub fn set_output(&mut self, output: &str) {
        self.output = if output.trim().is_empty() {
            PathBuf::from(".")
        } else {
            PathBuf::from(output)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.index_file, "README.md");
        assert!(config.disambiguate_overloads);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = Config::parse("output = \"site\"\nextension = \".html.md\"\n").unwrap();
        assert_eq!(config.output, PathBuf::from("site"));
        assert_eq!(config.extension, "html.md");
        assert_eq!(config.index_file, "README.md");
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "output = [").unwrap();
        assert!(matches!(Config::load(dir.path()), Err(Error::TomlDe(_))));
    }

    #[test]
    fn unknown_key_is_an_error() {
        assert!(matches!(Config::parse("outptu = \"x\""), Err(Error::TomlDe(_))));
    }

    #[test]
    fn blank_output_means_current_directory() {
        let mut config = Config::default();
        config.set_output("docs/api");
        assert_eq!(config.output, PathBuf::from("docs/api"));
        config.set_output("  ");
        assert_eq!(config.output, PathBuf::from("."));
    }
}
