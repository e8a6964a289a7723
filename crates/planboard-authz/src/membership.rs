// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Authority relationships between a user and a resource.
//!
//! Every function takes the user as a [`CanonicalId`], which can only be
//! produced by [`crate::ids::normalize_id`], and normalizes the snapshot side
//! of each comparison the same way.

use crate::ids::{CanonicalId, IdRef};
use crate::roles::ProjectRole;
use crate::snapshot::{Document, Project, ProjectMembership, Sprint, Task};

/// Resources that record who created them.
pub trait Authored {
	fn created_by(&self) -> &IdRef;
}

impl Authored for Sprint {
	fn created_by(&self) -> &IdRef {
		&self.created_by
	}
}

impl Authored for Task {
	fn created_by(&self) -> &IdRef {
		&self.created_by
	}
}

impl Authored for Document {
	fn created_by(&self) -> &IdRef {
		&self.created_by
	}
}

/// Returns the user's membership record in the project, if any.
///
/// Returns the first match; uniqueness per user is an input invariant.
pub fn find_project_membership<'a>(
	project: &'a Project,
	user_id: &CanonicalId,
) -> Option<&'a ProjectMembership> {
	project
		.members
		.iter()
		.find(|m| m.user_id.canonical().matches(user_id))
}

/// Returns true if the user owns the project.
pub fn is_project_owner(project: &Project, user_id: &CanonicalId) -> bool {
	project.owner_id.canonical().matches(user_id)
}

/// Returns true if the user's membership in the project carries the
/// `ProjectManager` role.
pub fn is_project_manager(project: &Project, user_id: &CanonicalId) -> bool {
	matches!(
		find_project_membership(project, user_id),
		Some(ProjectMembership {
			role: ProjectRole::ProjectManager,
			..
		})
	)
}

/// Returns true if the user is listed in the sprint's member set.
pub fn is_sprint_member(sprint: &Sprint, user_id: &CanonicalId) -> bool {
	contains(&sprint.members, user_id)
}

/// Returns true if the user created the resource.
pub fn is_author<R: Authored + ?Sized>(resource: &R, user_id: &CanonicalId) -> bool {
	resource.created_by().canonical().matches(user_id)
}

/// Returns true if the user is one of the task's assignees.
pub fn is_assignee(task: &Task, user_id: &CanonicalId) -> bool {
	contains(&task.assignees, user_id)
}

fn contains(ids: &[IdRef], user_id: &CanonicalId) -> bool {
	ids.iter().any(|id| id.canonical().matches(user_id))
}
