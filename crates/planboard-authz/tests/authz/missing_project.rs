// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use planboard_authz::{Action, Authorizer, Resource, ResourceKind};

use super::support::{run_rejected_cases, DecisionCase, Fixtures};

/// Every action except sprint creation is rejected when the parent project is
/// left out, whatever the principal and whatever else the bundle carries.
#[test]
fn test_every_action_needs_the_project() {
	let f = Fixtures::new();
	let without_project = Resource {
		project: None,
		sprint: Some(&f.sprint),
		task: Some(&f.assigned_task),
		document: Some(&f.comment),
	};

	let mut cases = Vec::new();
	for action in Action::all().iter().copied() {
		if action == Action::CreateSprint {
			continue;
		}
		for principal in f.users.all() {
			cases.push(DecisionCase::deny(action.as_str(), principal, action));
		}
	}
	assert_eq!(cases.len(), (Action::all().len() - 1) * f.users.all().len());

	run_rejected_cases(&without_project, &cases, ResourceKind::Project);
}

#[test]
fn test_only_sprint_creation_is_permitted_without_a_project() {
	let f = Fixtures::new();
	let without_project = Resource {
		project: None,
		sprint: Some(&f.sprint),
		task: Some(&f.assigned_task),
		document: Some(&f.comment),
	};
	let authz = Authorizer::strict();

	assert_eq!(
		authz.allowed_actions(&f.users.admin, &without_project),
		vec![Action::CreateSprint]
	);
	for principal in f.users.all() {
		let allowed = authz.allowed_actions(principal, &without_project);
		assert!(allowed.iter().all(|action| *action == Action::CreateSprint));
	}
}
