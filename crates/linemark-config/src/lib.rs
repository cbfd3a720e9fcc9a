use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Target document format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Plain,
}

#[derive(Debug, Error)]
#[error("unknown output format {0:?}, expected \"html\" or \"plain\"")]
pub struct ParseFormatError(String);

impl FromStr for OutputFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "plain" | "text" => Ok(OutputFormat::Plain),
            _ => Err(ParseFormatError(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Html => "html",
            OutputFormat::Plain => "plain",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub format: OutputFormat,
    /// Wrap HTML output in a full page.
    pub standalone: bool,
    /// Stylesheet href used by the standalone page.
    pub stylesheet: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Html,
            standalone: false,
            stylesheet: Self::DEFAULT_STYLESHEET.to_string(),
        }
    }
}

impl Config {
    pub const DEFAULT_STYLESHEET: &'static str = "theme/style.css";

    /// Loads the file at `config_path`, or defaults when it does not exist.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Self, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the stylesheet location
        if let Some(expanded) = Self::expand(&config.stylesheet) {
            config.stylesheet = expanded;
        }

        Ok(config)
    }

    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/linemark");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand(value: &str) -> Option<String> {
        shellexpand::full(value).ok().map(|expanded| expanded.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::env;
    use tempfile::TempDir;

    fn write_config(content: &str) -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, content).unwrap();
        (temp_dir, path)
    }

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/linemark/config.toml"));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from_path(temp_dir.path().join("nonexistent.toml")).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.stylesheet, "theme/style.css");
    }

    #[test]
    fn test_full_config() {
        let (_dir, path) = write_config(
            r#"
format = "plain"
standalone = true
stylesheet = "/css/site.css"
"#,
        );
        let config = Config::load_from_path(&path).unwrap();

        assert_eq!(
            config,
            Config {
                format: OutputFormat::Plain,
                standalone: true,
                stylesheet: "/css/site.css".to_string(),
            }
        );
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let (_dir, path) = write_config("standalone = true\n");
        let config = Config::load_from_path(&path).unwrap();

        assert!(config.standalone);
        assert_eq!(config.format, OutputFormat::Html);
        assert_eq!(config.stylesheet, Config::DEFAULT_STYLESHEET);
    }

    #[test]
    fn test_stylesheet_env_var_expanded() {
        unsafe {
            env::set_var("LINEMARK_TEST_THEME", "/themes/dark");
        }

        let (_dir, path) = write_config("stylesheet = \"$LINEMARK_TEST_THEME/style.css\"\n");
        let config = Config::load_from_path(&path).unwrap();

        assert_eq!(config.stylesheet, "/themes/dark/style.css");

        unsafe {
            env::remove_var("LINEMARK_TEST_THEME");
        }
    }

    #[test]
    fn test_stylesheet_tilde_expanded() {
        let (_dir, path) = write_config("stylesheet = \"~/style.css\"\n");
        let config = Config::load_from_path(&path).unwrap();

        assert!(!config.stylesheet.starts_with('~'));
        assert!(config.stylesheet.ends_with("style.css"));
    }

    #[rstest]
    #[case("format = \"pdf\"\n")]
    #[case("standalone = \"yes\"\n")]
    #[case("unknown_key = 1\n")]
    #[case("not toml at all [")]
    fn test_invalid_config_is_parse_error(#[case] content: &str) {
        let (_dir, path) = write_config(content);
        let err = Config::load_from_path(&path).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_unreadable_config_is_read_error() {
        // A directory exists but cannot be read as a file
        let temp_dir = TempDir::new().unwrap();
        let err = Config::load_from_path(temp_dir.path()).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigReadError { .. }));
    }

    #[rstest]
    #[case("html", OutputFormat::Html)]
    #[case("HTML", OutputFormat::Html)]
    #[case("plain", OutputFormat::Plain)]
    #[case("text", OutputFormat::Plain)]
    fn test_format_from_str(#[case] input: &str, #[case] expected: OutputFormat) {
        assert_eq!(input.parse::<OutputFormat>().unwrap(), expected);
    }

    #[test]
    fn test_format_from_str_rejects_unknown() {
        let err = "pdf".parse::<OutputFormat>().unwrap_err();
        assert!(err.to_string().contains("pdf"));
    }

    #[test]
    fn test_format_display_roundtrip() {
        for format in [OutputFormat::Html, OutputFormat::Plain] {
            assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
        }
    }
}
