//! Bundle configuration declaration and validation.
//!
//! # Responsibility
//! - Deserialize the JSON bundle config (entry, output, rules, watch).
//! - Validate declaration-level invariants before callers rely on them.
//! - Resolve which transform a given file path is routed through.
//!
//! # Invariants
//! - A valid config declares exactly one entry path and one output path.
//! - Every rule pattern compiles as a regular expression over file paths.
//! - Rule patterns are unique within one config.

use log::info;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Source-map emission mode, mirroring the bundler `devtool` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceMapMode {
    /// Full external `.map` file.
    SourceMap,
    /// Map inlined into the emitted bundle.
    InlineSourceMap,
    /// Per-module eval wrapping, fastest rebuilds.
    Eval,
    /// External map emitted but not referenced from the bundle.
    HiddenSourceMap,
}

/// Output declaration for the emitted bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSpec {
    /// Path of the emitted bundle file.
    pub filename: String,
}

/// One file-matching rule routing matched paths through a named transform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformRule {
    /// Regular expression matched against file paths, e.g. `\.js$`.
    pub test: String,
    /// Name of the transform the matched files are routed through.
    pub transform: String,
}

/// Declarative bundle configuration.
///
/// This models the build surface only; no bundling or file transformation is
/// performed by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleConfig {
    /// The file dependency traversal starts from.
    pub entry: String,
    /// Optional source-map emission mode.
    #[serde(default)]
    pub devtool: Option<SourceMapMode>,
    /// Output declaration for the emitted bundle.
    pub output: OutputSpec,
    /// Transform rules checked in declaration order.
    #[serde(default)]
    pub rules: Vec<TransformRule>,
    /// Continuous-rebuild flag.
    #[serde(default)]
    pub watch: bool,
}

impl BundleConfig {
    /// Validates declaration-level config invariants.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.entry.trim().is_empty() {
            return Err(ConfigValidationError::EmptyEntry);
        }
        if self.output.filename.trim().is_empty() {
            return Err(ConfigValidationError::EmptyOutput);
        }

        let mut seen_patterns = Vec::new();
        for rule in &self.rules {
            let pattern = rule.test.trim();
            if pattern.is_empty() {
                return Err(ConfigValidationError::EmptyRulePattern);
            }
            if let Err(err) = Regex::new(pattern) {
                return Err(ConfigValidationError::InvalidRulePattern {
                    pattern: pattern.to_string(),
                    details: err.to_string(),
                });
            }
            if rule.transform.trim().is_empty() {
                return Err(ConfigValidationError::EmptyTransform(pattern.to_string()));
            }
            if seen_patterns.contains(&pattern) {
                return Err(ConfigValidationError::DuplicateRulePattern(
                    pattern.to_string(),
                ));
            }
            seen_patterns.push(pattern);
        }

        Ok(())
    }

    /// Returns the transform name of the first rule matching `path`.
    ///
    /// Rules are checked in declaration order. Patterns that fail to compile
    /// never match; `validate` rejects such configs up front.
    pub fn transform_for(&self, path: impl AsRef<Path>) -> Option<&str> {
        let candidate = path.as_ref().to_string_lossy();
        self.rules
            .iter()
            .find(|rule| {
                Regex::new(rule.test.trim())
                    .map(|re| re.is_match(candidate.as_ref()))
                    .unwrap_or(false)
            })
            .map(|rule| rule.transform.as_str())
    }
}

/// Errors raised while loading or validating a bundle config.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file could not be read.
    Io(std::io::Error),
    /// Config text is not valid JSON for the expected shape.
    Parse(serde_json::Error),
    /// Config parsed but violates declaration invariants.
    Validation(ConfigValidationError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read bundle config: {err}"),
            Self::Parse(err) => write!(f, "failed to parse bundle config: {err}"),
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Validation(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<ConfigValidationError> for ConfigError {
    fn from(value: ConfigValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Internal config validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    EmptyEntry,
    EmptyOutput,
    EmptyRulePattern,
    InvalidRulePattern { pattern: String, details: String },
    EmptyTransform(String),
    DuplicateRulePattern(String),
}

impl Display for ConfigValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyEntry => write!(f, "bundle config entry must not be empty"),
            Self::EmptyOutput => write!(f, "bundle config output filename must not be empty"),
            Self::EmptyRulePattern => write!(f, "bundle config contains empty rule pattern"),
            Self::InvalidRulePattern { pattern, details } => {
                write!(f, "bundle config rule pattern is invalid: `{pattern}` ({details})")
            }
            Self::EmptyTransform(pattern) => {
                write!(f, "bundle config rule `{pattern}` declares no transform")
            }
            Self::DuplicateRulePattern(pattern) => {
                write!(f, "bundle config rule pattern is duplicated: `{pattern}`")
            }
        }
    }
}

impl Error for ConfigValidationError {}

/// Parses and validates a bundle config from JSON text.
pub fn parse_bundle_config(json: &str) -> ConfigResult<BundleConfig> {
    let config: BundleConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}

/// Loads and validates a bundle config from a JSON file.
///
/// # Side effects
/// - Emits a `config_load` logging event on success.
pub fn load_bundle_config(path: impl AsRef<Path>) -> ConfigResult<BundleConfig> {
    let text = std::fs::read_to_string(path.as_ref())?;
    let config = parse_bundle_config(&text)?;
    info!(
        "event=config_load module=config status=ok entry={} output={} rules={} watch={}",
        config.entry,
        config.output.filename,
        config.rules.len(),
        config.watch
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::{BundleConfig, ConfigValidationError, OutputSpec, TransformRule};

    fn valid_config() -> BundleConfig {
        BundleConfig {
            entry: "./src/sets.js".to_string(),
            devtool: None,
            output: OutputSpec {
                filename: "./main.js".to_string(),
            },
            rules: vec![TransformRule {
                test: r"\.js$".to_string(),
                transform: "buble".to_string(),
            }],
            watch: true,
        }
    }

    #[test]
    fn validates_baseline_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn rejects_empty_entry() {
        let mut config = valid_config();
        config.entry = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert_eq!(err, ConfigValidationError::EmptyEntry);
    }

    #[test]
    fn rejects_uncompilable_rule_pattern() {
        let mut config = valid_config();
        config.rules[0].test = "(".to_string();
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigValidationError::InvalidRulePattern { .. }
        ));
    }

    #[test]
    fn rejects_duplicate_rule_pattern() {
        let mut config = valid_config();
        config.rules.push(TransformRule {
            test: r"\.js$".to_string(),
            transform: "other".to_string(),
        });
        let err = config.validate().unwrap_err();
        assert_eq!(
            err,
            ConfigValidationError::DuplicateRulePattern(r"\.js$".to_string())
        );
    }

    #[test]
    fn transform_for_checks_rules_in_declaration_order() {
        let mut config = valid_config();
        config.rules.insert(
            0,
            TransformRule {
                test: r"sets\.js$".to_string(),
                transform: "first".to_string(),
            },
        );
        assert_eq!(config.transform_for("./src/sets.js"), Some("first"));
        assert_eq!(config.transform_for("./src/other.js"), Some("buble"));
    }
}
