// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Task policies.

use super::{admin_chain, project_authority, Subject};
use crate::decision::{Evaluation, Rule};
use crate::membership::{is_assignee, is_author};
use crate::snapshot::{Project, Task};

/// Editing a task: admin, creator, assignee, then project authority.
pub fn evaluate_edit(subject: &Subject<'_>, task: &Task, project: &Project) -> Evaluation {
	let chain = admin_chain(subject)
		.check(Rule::Author, || is_author(task, &subject.id))
		.check(Rule::Assignee, || is_assignee(task, &subject.id));
	project_authority(chain, subject, project).finish()
}

/// Deleting a task.
///
/// The creator may delete only while nobody is assigned. Once the task has
/// an assignee, deletion needs project authority.
pub fn evaluate_delete(subject: &Subject<'_>, task: &Task, project: &Project) -> Evaluation {
	let chain = admin_chain(subject).check(Rule::UnassignedTaskAuthor, || {
		task.is_unassigned() && is_author(task, &subject.id)
	});
	project_authority(chain, subject, project).finish()
}
