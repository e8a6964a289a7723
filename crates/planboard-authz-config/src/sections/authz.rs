// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Authorization engine configuration.

use planboard_authz::{Authorizer, EnforcementMode};
use serde::Deserialize;

use crate::error::ConfigError;

/// Environment name that forces fail-closed enforcement.
pub const PRODUCTION: &str = "production";

const DEFAULT_ENVIRONMENT: &str = "development";

/// Authorization configuration (runtime, fully resolved).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthzConfig {
	pub environment: String,
	pub enforcement: EnforcementMode,
}

impl Default for AuthzConfig {
	fn default() -> Self {
		Self {
			environment: DEFAULT_ENVIRONMENT.to_string(),
			enforcement: EnforcementMode::Strict,
		}
	}
}

impl AuthzConfig {
	pub fn is_production(&self) -> bool {
		self.environment == PRODUCTION
	}

	/// Builds the facade configured by this section.
	pub fn authorizer(&self) -> Authorizer {
		Authorizer::new(self.enforcement)
	}
}

/// Authorization configuration layer (partial, for merging).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthzConfigLayer {
	#[serde(default)]
	pub environment: Option<String>,
	#[serde(default)]
	pub enforcement: Option<String>,
}

impl AuthzConfigLayer {
	pub fn merge(&mut self, other: AuthzConfigLayer) {
		if other.environment.is_some() {
			self.environment = other.environment;
		}
		if other.enforcement.is_some() {
			self.enforcement = other.enforcement;
		}
	}

	/// Resolves the layer. Without an explicit mode, production fails closed
	/// and every other environment is strict.
	pub fn finalize(self) -> Result<AuthzConfig, ConfigError> {
		let environment = self
			.environment
			.map(|e| e.trim().to_ascii_lowercase())
			.filter(|e| !e.is_empty())
			.unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string());

		let enforcement = match self.enforcement {
			Some(raw) => EnforcementMode::parse(&raw).ok_or_else(|| {
				ConfigError::invalid_value(
					"authz.enforcement",
					format!("unknown mode '{raw}', expected 'strict' or 'fail_closed'"),
				)
			})?,
			None if environment == PRODUCTION => EnforcementMode::FailClosed,
			None => EnforcementMode::Strict,
		};

		Ok(AuthzConfig {
			environment,
			enforcement,
		})
	}
}
