// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Decision request documents.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use planboard_authz::{Action, Principal, Resource, ResourceSnapshot};
use serde::Deserialize;

/// Path that selects standard input.
pub const STDIN: &str = "-";

/// A principal, an action name and the snapshots it concerns.
#[derive(Debug, Clone, Deserialize)]
pub struct DecisionRequest {
	pub principal: Principal,
	#[serde(default)]
	pub action: Option<String>,
	#[serde(default)]
	pub resource: ResourceSnapshot,
}

impl DecisionRequest {
	pub fn from_json(raw: &str) -> Result<Self> {
		serde_json::from_str(raw).context("malformed decision request")
	}

	/// Reads a request from `source`, or from standard input when it is `-`.
	pub fn read(source: &str) -> Result<Self> {
		let raw = if source == STDIN {
			let mut buf = String::new();
			std::io::stdin()
				.read_to_string(&mut buf)
				.context("failed to read request from stdin")?;
			buf
		} else {
			let path = Path::new(source);
			std::fs::read_to_string(path)
				.with_context(|| format!("failed to read request file {}", path.display()))?
		};
		Self::from_json(&raw)
	}

	/// The requested action. Unknown names are an error.
	pub fn action(&self) -> Result<Action> {
		let name = self
			.action
			.as_deref()
			.context("decision request has no action")?;
		Ok(name.parse::<Action>()?)
	}

	pub fn resource(&self) -> Resource<'_> {
		self.resource.as_resource()
	}
}
