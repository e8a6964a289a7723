// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Sprint policies.
//!
//! Editing and deleting a sprint are decided on its parent project by
//! [`super::project::evaluate`]. This module covers the sprint rules with
//! their own exceptions.

use super::{admin_chain, project_authority, Subject};
use crate::decision::{Evaluation, Rule};
use crate::membership::{is_author, is_sprint_member};
use crate::roles::{GlobalRole, ProjectRole};
use crate::snapshot::{Project, Sprint};

/// Sprint creation.
///
/// With a project, this is ordinary project authority. Without one, the
/// principal's legacy stored project role decides. That fallback exists for
/// compatibility only and is not used by any other action.
pub fn evaluate_create(subject: &Subject<'_>, project: Option<&Project>) -> Evaluation {
	let chain = admin_chain(subject);
	match project {
		Some(project) => project_authority(chain, subject, project).finish(),
		None => chain
			.check(Rule::StoredProjectRole, || {
				subject.principal.project_role == Some(ProjectRole::ProjectManager)
			})
			.finish(),
	}
}

/// Viewing a sprint: admin, parent-project owner or manager, then sprint
/// membership.
pub fn evaluate_view(subject: &Subject<'_>, sprint: &Sprint, project: &Project) -> Evaluation {
	project_authority(admin_chain(subject), subject, project)
		.check(Rule::SprintMember, || is_sprint_member(sprint, &subject.id))
		.finish()
}

/// Managing a sprint's member list.
///
/// Beyond project authority, the sprint's creator and any holder of the
/// global `ProjectManager` role are trusted, even without project membership.
pub fn evaluate_manage_members(
	subject: &Subject<'_>,
	sprint: &Sprint,
	project: &Project,
) -> Evaluation {
	let chain = admin_chain(subject)
		.check(Rule::SprintCreator, || is_author(sprint, &subject.id))
		.check(Rule::GlobalProjectManager, || {
			subject.principal.global_role == GlobalRole::ProjectManager
		});
	project_authority(chain, subject, project).finish()
}
