// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Role vocabulary and role-string normalization.
//!
//! Stored role values are inconsistent: the same logical role shows up as
//! `"ProjectManager"`, `"project_manager"`, `"Project Manager"` or
//! `"PROJECTMANAGER"`. Every role value entering the engine passes through
//! [`normalize_role`], including serde deserialization of [`GlobalRole`] and
//! [`ProjectRole`]. Unrecognized input maps to `Member`, so a malformed role
//! string can never grant more than the lowest role.

use crate::snapshot::Principal;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Global Roles
// =============================================================================

/// Organization-wide roles held by a principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GlobalRole {
	/// Unrestricted access to every project.
	Admin,
	/// Delegated management authority across projects.
	ProjectManager,
	/// Standard user.
	#[default]
	Member,
}

impl GlobalRole {
	/// Returns all global roles.
	pub fn all() -> &'static [GlobalRole] {
		&[
			GlobalRole::Admin,
			GlobalRole::ProjectManager,
			GlobalRole::Member,
		]
	}

	/// Returns the snake_case name of the role.
	pub fn as_str(&self) -> &'static str {
		match self {
			GlobalRole::Admin => "admin",
			GlobalRole::ProjectManager => "project_manager",
			GlobalRole::Member => "member",
		}
	}
}

impl fmt::Display for GlobalRole {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl From<&str> for GlobalRole {
	fn from(raw: &str) -> Self {
		normalize_role(raw)
	}
}

impl From<String> for GlobalRole {
	fn from(raw: String) -> Self {
		normalize_role(&raw)
	}
}

impl From<GlobalRole> for String {
	fn from(role: GlobalRole) -> Self {
		role.as_str().to_string()
	}
}

// =============================================================================
// Project Roles
// =============================================================================

/// Roles carried by a project membership record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectRole {
	/// Can manage the project, its sprints and its members.
	ProjectManager,
	/// Standard project member.
	#[default]
	Member,
}

impl ProjectRole {
	/// Returns all project roles.
	pub fn all() -> &'static [ProjectRole] {
		&[ProjectRole::ProjectManager, ProjectRole::Member]
	}

	/// Parses a stored role string.
	///
	/// Anything that does not normalize to `ProjectManager` is a plain
	/// `Member`. `"admin"` is not a project role and also maps to `Member`.
	pub fn from_raw(raw: &str) -> Self {
		match normalize_role(raw) {
			GlobalRole::ProjectManager => ProjectRole::ProjectManager,
			GlobalRole::Admin | GlobalRole::Member => ProjectRole::Member,
		}
	}

	/// Returns the snake_case name of the role.
	pub fn as_str(&self) -> &'static str {
		match self {
			ProjectRole::ProjectManager => "project_manager",
			ProjectRole::Member => "member",
		}
	}
}

impl fmt::Display for ProjectRole {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl From<&str> for ProjectRole {
	fn from(raw: &str) -> Self {
		ProjectRole::from_raw(raw)
	}
}

impl From<String> for ProjectRole {
	fn from(raw: String) -> Self {
		ProjectRole::from_raw(&raw)
	}
}

impl From<ProjectRole> for String {
	fn from(role: ProjectRole) -> Self {
		role.as_str().to_string()
	}
}

// =============================================================================
// Normalization
// =============================================================================

/// Maps a raw role string onto the closed role vocabulary.
///
/// The comparison key is the input lower-cased with all whitespace and
/// underscores removed.
pub fn normalize_role(raw: &str) -> GlobalRole {
	let key: String = raw
		.chars()
		.filter(|c| !c.is_whitespace() && *c != '_')
		.flat_map(char::to_lowercase)
		.collect();

	match key.as_str() {
		"admin" => GlobalRole::Admin,
		"projectmanager" => GlobalRole::ProjectManager,
		_ => GlobalRole::Member,
	}
}

/// Returns true if the principal holds the global `Admin` role.
pub fn is_admin(principal: &Principal) -> bool {
	principal.global_role == GlobalRole::Admin
}
