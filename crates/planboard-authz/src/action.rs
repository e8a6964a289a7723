// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The closed set of protected actions.
//!
//! Adding an action means adding both the variant here and its rule in
//! [`crate::policies`]. The engine's `match` over [`Action`] is exhaustive, so
//! a new variant without a rule does not compile.

use crate::error::AuthzError;
use crate::snapshot::ResourceKind;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operations gated by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
	EditProject,
	DeleteProject,
	ArchiveProject,
	RestoreProject,
	AddProjectMembers,
	CreateSprint,
	EditSprint,
	DeleteSprint,
	ViewSprint,
	ManageSprintMembers,
	EditTask,
	DeleteTask,
	EditDocument,
	DeleteDocument,
}

impl Action {
	/// Returns every action in declaration order.
	pub fn all() -> &'static [Action] {
		&[
			Action::EditProject,
			Action::DeleteProject,
			Action::ArchiveProject,
			Action::RestoreProject,
			Action::AddProjectMembers,
			Action::CreateSprint,
			Action::EditSprint,
			Action::DeleteSprint,
			Action::ViewSprint,
			Action::ManageSprintMembers,
			Action::EditTask,
			Action::DeleteTask,
			Action::EditDocument,
			Action::DeleteDocument,
		]
	}

	/// Returns the snake_case wire name of the action.
	pub fn as_str(&self) -> &'static str {
		match self {
			Action::EditProject => "edit_project",
			Action::DeleteProject => "delete_project",
			Action::ArchiveProject => "archive_project",
			Action::RestoreProject => "restore_project",
			Action::AddProjectMembers => "add_project_members",
			Action::CreateSprint => "create_sprint",
			Action::EditSprint => "edit_sprint",
			Action::DeleteSprint => "delete_sprint",
			Action::ViewSprint => "view_sprint",
			Action::ManageSprintMembers => "manage_sprint_members",
			Action::EditTask => "edit_task",
			Action::DeleteTask => "delete_task",
			Action::EditDocument => "edit_document",
			Action::DeleteDocument => "delete_document",
		}
	}

	/// Snapshots the action cannot be decided without, target first.
	///
	/// Every action except sprint creation needs the parent project, since
	/// project authority applies to everything inside it. Sprint edit and
	/// delete are decided on the project alone.
	pub fn required_snapshots(&self) -> &'static [ResourceKind] {
		match self {
			Action::EditProject
			| Action::DeleteProject
			| Action::ArchiveProject
			| Action::RestoreProject
			| Action::AddProjectMembers
			| Action::EditSprint
			| Action::DeleteSprint => &[ResourceKind::Project],
			Action::CreateSprint => &[],
			Action::ViewSprint | Action::ManageSprintMembers => {
				&[ResourceKind::Sprint, ResourceKind::Project]
			}
			Action::EditTask | Action::DeleteTask => &[ResourceKind::Task, ResourceKind::Project],
			Action::EditDocument | Action::DeleteDocument => {
				&[ResourceKind::Document, ResourceKind::Project]
			}
		}
	}

	/// The snapshot the action is performed on, if any.
	pub fn target(&self) -> Option<ResourceKind> {
		self.required_snapshots().first().copied()
	}
}

impl fmt::Display for Action {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Action {
	type Err = AuthzError;

	/// Parses a wire name. Surrounding whitespace and ASCII case are ignored.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let name = s.trim();
		Action::all()
			.iter()
			.copied()
			.find(|action| action.as_str().eq_ignore_ascii_case(name))
			.ok_or_else(|| AuthzError::UnsupportedAction(name.to_string()))
	}
}
