//! Build configuration surface.
//!
//! # Responsibility
//! - Model and validate the declarative bundle configuration.
//!
//! # Invariants
//! - Config loading never executes a build; this is declaration only.

pub mod bundle;

pub use bundle::{
    load_bundle_config, parse_bundle_config, BundleConfig, ConfigError, ConfigResult,
    ConfigValidationError, OutputSpec, SourceMapMode, TransformRule,
};
