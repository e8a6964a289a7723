// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use planboard_authz::{Action, Resource, ResourceKind};

use super::support::{run_decision_cases, run_rejected_cases, DecisionCase, Fixtures};

#[test]
fn test_sprint_view_authorization() {
	let f = Fixtures::new();
	let u = &f.users;

	let cases = vec![
		DecisionCase::allow("admin_can_view", &u.admin, Action::ViewSprint),
		DecisionCase::allow("owner_can_view", &u.owner, Action::ViewSprint),
		DecisionCase::allow("manager_can_view", &u.manager, Action::ViewSprint),
		DecisionCase::allow("sprint_member_can_view", &u.sprinter, Action::ViewSprint),
		DecisionCase::deny("project_member_cannot_view", &u.member, Action::ViewSprint),
		DecisionCase::deny("sprint_creator_alone_cannot_view", &u.sprint_creator, Action::ViewSprint),
		DecisionCase::deny("global_manager_cannot_view", &u.global_manager, Action::ViewSprint),
		DecisionCase::deny("outsider_cannot_view", &u.outsider, Action::ViewSprint),
	];

	run_decision_cases(&Resource::sprint(&f.sprint).within(&f.project), &cases);
}

#[test]
fn test_sprint_without_parent_project() {
	let f = Fixtures::new();
	let u = &f.users;

	let cases = vec![
		DecisionCase::deny("sprint_member_needs_parent_project", &u.sprinter, Action::ViewSprint),
		DecisionCase::deny("admin_needs_parent_project", &u.admin, Action::ViewSprint),
		DecisionCase::deny(
			"sprint_creator_needs_parent_project",
			&u.sprint_creator,
			Action::ManageSprintMembers,
		),
		DecisionCase::deny(
			"global_manager_needs_parent_project",
			&u.global_manager,
			Action::ManageSprintMembers,
		),
	];

	run_rejected_cases(&Resource::sprint(&f.sprint), &cases, ResourceKind::Project);
}

#[test]
fn test_sprint_member_management_authorization() {
	let f = Fixtures::new();
	let u = &f.users;
	let action = Action::ManageSprintMembers;

	let cases = vec![
		DecisionCase::allow("admin_can_manage", &u.admin, action),
		DecisionCase::allow("sprint_creator_can_manage", &u.sprint_creator, action),
		DecisionCase::allow("global_manager_can_manage", &u.global_manager, action),
		DecisionCase::allow("owner_can_manage", &u.owner, action),
		DecisionCase::allow("manager_can_manage", &u.manager, action),
		DecisionCase::deny("sprint_member_cannot_manage", &u.sprinter, action),
		DecisionCase::deny("project_member_cannot_manage", &u.member, action),
		DecisionCase::deny("outsider_cannot_manage", &u.outsider, action),
	];

	run_decision_cases(&Resource::sprint(&f.sprint).within(&f.project), &cases);
}
