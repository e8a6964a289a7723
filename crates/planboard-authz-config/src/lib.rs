// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration for the Planboard authorization engine.
//!
//! This crate provides:
//! - Layered configuration from built-in defaults, a TOML file and the
//!   environment (`PLANBOARD_AUTHZ_*`)
//! - The enforcement mode the [`planboard_authz::Authorizer`] runs with
//! - Logging level and output format for binaries embedding the engine
//!
//! # Usage
//!
//! ```ignore
//! use planboard_authz_config::load_config;
//!
//! let config = load_config()?;
//! let authz = config.authz.authorizer();
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::AuthzServiceConfigLayer;
pub use sections::*;
pub use sources::{
	ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource, SYSTEM_CONFIG_PATH,
};

use std::path::PathBuf;

use planboard_authz::EnforcementMode;
use tracing::{debug, info};

/// Fully resolved configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthzServiceConfig {
	pub authz: AuthzConfig,
	pub logging: LoggingConfig,
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`PLANBOARD_AUTHZ_*`)
/// 2. Config file (`/etc/planboard/authz.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<AuthzServiceConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	])
}

/// Load configuration with a custom config file path in place of the
/// system one.
pub fn load_config_with_file(
	config_path: impl Into<PathBuf>,
) -> Result<AuthzServiceConfig, ConfigError> {
	load_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

/// Merge the given sources in precedence order and resolve the result.
pub fn load_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
) -> Result<AuthzServiceConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = AuthzServiceConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize a merged layer into resolved, validated config.
pub fn finalize(layer: AuthzServiceConfigLayer) -> Result<AuthzServiceConfig, ConfigError> {
	let authz = layer.authz.unwrap_or_default().finalize()?;
	let logging = layer.logging.unwrap_or_default().finalize()?;

	validate_config(&authz)?;

	info!(
		environment = %authz.environment,
		enforcement = %authz.enforcement,
		log_level = %logging.level,
		log_format = %logging.format,
		"authorization configuration loaded"
	);

	Ok(AuthzServiceConfig { authz, logging })
}

/// Validate cross-field configuration rules.
fn validate_config(authz: &AuthzConfig) -> Result<(), ConfigError> {
	if authz.enforcement == EnforcementMode::Strict && authz.is_production() {
		return Err(ConfigError::validation(
			"PLANBOARD_AUTHZ_ENFORCEMENT=strict is set while PLANBOARD_AUTHZ_ENV=production. \
			 Strict enforcement aborts on malformed requests. Use fail_closed in production.",
		));
	}

	Ok(())
}
