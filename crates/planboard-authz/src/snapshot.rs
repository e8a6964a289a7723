// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Read-only snapshots evaluated by the engine.
//!
//! Callers build these immediately before a decision, with all relations
//! already resolved, and discard them afterwards. The engine never fetches
//! data and never mutates a snapshot.
//!
//! - [`Principal`]: the signed-in user attempting the action
//! - [`Project`], [`Sprint`], [`Task`], [`Document`]: the resources
//! - [`Resource`]: a borrowed bundle of a target and its ancestry
//! - [`ResourceSnapshot`]: the owned, deserializable form of [`Resource`]
//!
//! Field names deserialize from snake_case and, for compatibility with
//! upstream payloads, from camelCase.

use crate::ids::IdRef;
use crate::roles::{GlobalRole, ProjectRole};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The authenticated actor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Principal {
	pub id: IdRef,
	#[serde(default, alias = "globalRole", alias = "role")]
	pub global_role: GlobalRole,
	/// Legacy per-user project role. Only consulted by sprint creation when
	/// no project is supplied.
	#[serde(default, alias = "projectRole")]
	pub project_role: Option<ProjectRole>,
}

impl Principal {
	/// Creates a principal with no stored project role.
	pub fn new(id: impl Into<IdRef>, global_role: GlobalRole) -> Self {
		Self {
			id: id.into(),
			global_role,
			project_role: None,
		}
	}

	/// Creates a principal holding the `Member` global role.
	pub fn member(id: impl Into<IdRef>) -> Self {
		Self::new(id, GlobalRole::Member)
	}

	/// Builder: set the legacy stored project role from its raw string form.
	pub fn with_project_role(mut self, raw: &str) -> Self {
		self.project_role = Some(ProjectRole::from_raw(raw));
		self
	}

	/// Returns true if the principal holds the global `Admin` role.
	pub fn is_admin(&self) -> bool {
		crate::roles::is_admin(self)
	}
}

/// A principal's membership record within a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMembership {
	#[serde(alias = "userId", alias = "user")]
	pub user_id: IdRef,
	#[serde(default)]
	pub role: ProjectRole,
}

impl ProjectMembership {
	pub fn new(user_id: impl Into<IdRef>, role: ProjectRole) -> Self {
		Self {
			user_id: user_id.into(),
			role,
		}
	}
}

/// A project and its member list.
///
/// The owner is a separate authority source and need not appear in `members`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
	pub id: IdRef,
	#[serde(alias = "ownerId", alias = "owner")]
	pub owner_id: IdRef,
	#[serde(default, alias = "isArchived")]
	pub is_archived: bool,
	#[serde(default)]
	pub members: Vec<ProjectMembership>,
}

impl Project {
	/// Creates an active project with no members.
	pub fn new(id: impl Into<IdRef>, owner_id: impl Into<IdRef>) -> Self {
		Self {
			id: id.into(),
			owner_id: owner_id.into(),
			is_archived: false,
			members: Vec::new(),
		}
	}

	/// Builder: add a membership record.
	pub fn with_member(mut self, user_id: impl Into<IdRef>, role: ProjectRole) -> Self {
		self.members.push(ProjectMembership::new(user_id, role));
		self
	}

	/// Builder: mark the project archived.
	pub fn archived(mut self) -> Self {
		self.is_archived = true;
		self
	}
}

/// A sprint. Sprint membership is a flat set of user ids without roles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sprint {
	pub id: IdRef,
	#[serde(alias = "projectId", alias = "project")]
	pub project_id: IdRef,
	#[serde(alias = "createdBy")]
	pub created_by: IdRef,
	#[serde(default)]
	pub members: Vec<IdRef>,
}

impl Sprint {
	pub fn new(
		id: impl Into<IdRef>,
		project_id: impl Into<IdRef>,
		created_by: impl Into<IdRef>,
	) -> Self {
		Self {
			id: id.into(),
			project_id: project_id.into(),
			created_by: created_by.into(),
			members: Vec::new(),
		}
	}

	/// Builder: add a sprint member.
	pub fn with_member(mut self, user_id: impl Into<IdRef>) -> Self {
		self.members.push(user_id.into());
		self
	}
}

/// A task. An empty `assignees` list is a distinguished state: the creator
/// may delete an unassigned task without project authority.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
	pub id: IdRef,
	#[serde(alias = "projectId", alias = "project")]
	pub project_id: IdRef,
	#[serde(default, alias = "sprintId", alias = "sprint")]
	pub sprint_id: Option<IdRef>,
	#[serde(alias = "createdBy")]
	pub created_by: IdRef,
	#[serde(default)]
	pub assignees: Vec<IdRef>,
}

impl Task {
	/// Creates an unassigned backlog task.
	pub fn new(
		id: impl Into<IdRef>,
		project_id: impl Into<IdRef>,
		created_by: impl Into<IdRef>,
	) -> Self {
		Self {
			id: id.into(),
			project_id: project_id.into(),
			sprint_id: None,
			created_by: created_by.into(),
			assignees: Vec::new(),
		}
	}

	/// Builder: place the task in a sprint.
	pub fn in_sprint(mut self, sprint_id: impl Into<IdRef>) -> Self {
		self.sprint_id = Some(sprint_id.into());
		self
	}

	/// Builder: add an assignee.
	pub fn with_assignee(mut self, user_id: impl Into<IdRef>) -> Self {
		self.assignees.push(user_id.into());
		self
	}

	/// Returns true if nobody has been assigned yet.
	pub fn is_unassigned(&self) -> bool {
		self.assignees.is_empty()
	}
}

/// The kind of a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
	#[default]
	Comment,
	Attachment,
}

/// A comment or attachment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
	pub id: IdRef,
	#[serde(alias = "createdBy", alias = "author")]
	pub created_by: IdRef,
	#[serde(default)]
	pub kind: DocumentKind,
}

impl Document {
	pub fn comment(id: impl Into<IdRef>, created_by: impl Into<IdRef>) -> Self {
		Self {
			id: id.into(),
			created_by: created_by.into(),
			kind: DocumentKind::Comment,
		}
	}

	pub fn attachment(id: impl Into<IdRef>, created_by: impl Into<IdRef>) -> Self {
		Self {
			id: id.into(),
			created_by: created_by.into(),
			kind: DocumentKind::Attachment,
		}
	}
}

/// The kinds of snapshot an action can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
	Project,
	Sprint,
	Task,
	Document,
}

impl fmt::Display for ResourceKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ResourceKind::Project => write!(f, "project"),
			ResourceKind::Sprint => write!(f, "sprint"),
			ResourceKind::Task => write!(f, "task"),
			ResourceKind::Document => write!(f, "document"),
		}
	}
}

/// A borrowed bundle of the snapshots relevant to one decision.
///
/// The target of the action goes in its own slot; `project` carries either
/// the target project or the parent project of a sprint, task or document.
#[derive(Debug, Clone, Copy, Default)]
pub struct Resource<'a> {
	pub project: Option<&'a Project>,
	pub sprint: Option<&'a Sprint>,
	pub task: Option<&'a Task>,
	pub document: Option<&'a Document>,
}

impl<'a> Resource<'a> {
	/// An empty bundle. Only valid for sprint creation without a project.
	pub fn none() -> Self {
		Self::default()
	}

	pub fn project(project: &'a Project) -> Self {
		Self {
			project: Some(project),
			..Self::default()
		}
	}

	pub fn sprint(sprint: &'a Sprint) -> Self {
		Self {
			sprint: Some(sprint),
			..Self::default()
		}
	}

	pub fn task(task: &'a Task) -> Self {
		Self {
			task: Some(task),
			..Self::default()
		}
	}

	pub fn document(document: &'a Document) -> Self {
		Self {
			document: Some(document),
			..Self::default()
		}
	}

	/// Builder: attach the parent project.
	pub fn within(mut self, project: &'a Project) -> Self {
		self.project = Some(project);
		self
	}

	/// Builder: attach an optional parent project.
	pub fn within_opt(mut self, project: Option<&'a Project>) -> Self {
		self.project = project;
		self
	}

	/// Returns true if a snapshot of the given kind is present.
	pub fn has(&self, kind: ResourceKind) -> bool {
		match kind {
			ResourceKind::Project => self.project.is_some(),
			ResourceKind::Sprint => self.sprint.is_some(),
			ResourceKind::Task => self.task.is_some(),
			ResourceKind::Document => self.document.is_some(),
		}
	}
}

/// Owned form of [`Resource`], as it arrives over the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceSnapshot {
	#[serde(default)]
	pub project: Option<Project>,
	#[serde(default)]
	pub sprint: Option<Sprint>,
	#[serde(default)]
	pub task: Option<Task>,
	#[serde(default)]
	pub document: Option<Document>,
}

impl ResourceSnapshot {
	/// Borrows the snapshot as a [`Resource`] bundle.
	pub fn as_resource(&self) -> Resource<'_> {
		Resource {
			project: self.project.as_ref(),
			sprint: self.sprint.as_ref(),
			task: self.task.as_ref(),
			document: self.document.as_ref(),
		}
	}
}
