// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Policy evaluation engine.
//!
//! [`evaluate`] checks that every snapshot the action needs is present (see
//! [`Action::required_snapshots`]), then routes to the resource-specific
//! authority chain in [`crate::policies`]. It is a pure function of its
//! arguments: no state, no I/O, and the snapshots are only read.

use crate::action::Action;
use crate::decision::Explanation;
use crate::error::AuthzError;
use crate::policies::{document, project, sprint, task, Subject};
use crate::snapshot::{Document, Principal, Project, Resource, ResourceKind, Sprint, Task};
use tracing::{debug, instrument};

/// Decides whether `principal` may perform `action` on `resource`, and why.
///
/// # Errors
///
/// Returns [`AuthzError::InvalidRequest`] when a snapshot the action needs is
/// absent: the target, or the parent project for every action except
/// [`Action::CreateSprint`]. No rule is evaluated for such a request.
///
/// # Tracing
///
/// Instrumented at debug level with the principal id and action; the
/// verdict and the rule that produced it are logged on completion.
#[instrument(
    level = "debug",
    skip(principal, resource),
    fields(
        principal_id = %principal.id,
        action = %action,
    )
)]
pub fn evaluate(
	principal: &Principal,
	action: Action,
	resource: &Resource<'_>,
) -> Result<Explanation, AuthzError> {
	if let Some(&missing) = action
		.required_snapshots()
		.iter()
		.find(|kind| !resource.has(**kind))
	{
		return Err(AuthzError::InvalidRequest { action, missing });
	}

	let subject = Subject::new(principal);

	let evaluation = match action {
		Action::EditProject
		| Action::DeleteProject
		| Action::ArchiveProject
		| Action::RestoreProject
		| Action::AddProjectMembers
		| Action::EditSprint
		| Action::DeleteSprint => project::evaluate(&subject, require(action, resource)?),
		Action::CreateSprint => sprint::evaluate_create(&subject, resource.project),
		Action::ViewSprint => sprint::evaluate_view(
			&subject,
			require(action, resource)?,
			require(action, resource)?,
		),
		Action::ManageSprintMembers => sprint::evaluate_manage_members(
			&subject,
			require(action, resource)?,
			require(action, resource)?,
		),
		Action::EditTask => task::evaluate_edit(
			&subject,
			require(action, resource)?,
			require(action, resource)?,
		),
		Action::DeleteTask => task::evaluate_delete(
			&subject,
			require(action, resource)?,
			require(action, resource)?,
		),
		Action::EditDocument | Action::DeleteDocument => document::evaluate(
			&subject,
			require(action, resource)?,
			require(action, resource)?,
		),
	};

	debug!(
		allowed = evaluation.decision.allowed,
		rule = %evaluation.decision.rule,
		"authorization decided"
	);

	Ok(Explanation {
		action,
		principal_id: subject.id,
		decision: evaluation.decision,
		trail: evaluation.trail,
	})
}

/// Returns only the verdict of [`evaluate`].
pub fn is_allowed(
	principal: &Principal,
	action: Action,
	resource: &Resource<'_>,
) -> Result<bool, AuthzError> {
	evaluate(principal, action, resource).map(|explanation| explanation.allowed())
}

/// A snapshot type and the bundle slot it travels in.
trait Slot {
	const KIND: ResourceKind;

	fn slot<'r>(resource: &Resource<'r>) -> Option<&'r Self>;
}

impl Slot for Project {
	const KIND: ResourceKind = ResourceKind::Project;

	fn slot<'r>(resource: &Resource<'r>) -> Option<&'r Self> {
		resource.project
	}
}

impl Slot for Sprint {
	const KIND: ResourceKind = ResourceKind::Sprint;

	fn slot<'r>(resource: &Resource<'r>) -> Option<&'r Self> {
		resource.sprint
	}
}

impl Slot for Task {
	const KIND: ResourceKind = ResourceKind::Task;

	fn slot<'r>(resource: &Resource<'r>) -> Option<&'r Self> {
		resource.task
	}
}

impl Slot for Document {
	const KIND: ResourceKind = ResourceKind::Document;

	fn slot<'r>(resource: &Resource<'r>) -> Option<&'r Self> {
		resource.document
	}
}

fn require<'r, T: Slot>(action: Action, resource: &Resource<'r>) -> Result<&'r T, AuthzError> {
	T::slot(resource).ok_or(AuthzError::InvalidRequest {
		action,
		missing: T::KIND,
	})
}
