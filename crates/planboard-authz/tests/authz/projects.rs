// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use planboard_authz::{Action, Resource};

use super::support::{run_decision_cases, DecisionCase, Fixtures};

const PROJECT_ACTIONS: [Action; 7] = [
	Action::EditProject,
	Action::DeleteProject,
	Action::ArchiveProject,
	Action::RestoreProject,
	Action::AddProjectMembers,
	Action::EditSprint,
	Action::DeleteSprint,
];

#[test]
fn test_project_authorization() {
	let f = Fixtures::new();
	let u = &f.users;

	let mut cases = Vec::new();
	for action in PROJECT_ACTIONS {
		cases.push(DecisionCase::allow("admin_can_manage_project", &u.admin, action));
		cases.push(DecisionCase::allow("owner_can_manage_project", &u.owner, action));
		cases.push(DecisionCase::allow("manager_can_manage_project", &u.manager, action));
		cases.push(DecisionCase::deny("member_cannot_manage_project", &u.member, action));
		cases.push(DecisionCase::deny(
			"global_manager_without_membership_cannot_manage_project",
			&u.global_manager,
			action,
		));
		cases.push(DecisionCase::deny(
			"sprint_creator_cannot_edit_via_project",
			&u.sprint_creator,
			action,
		));
		cases.push(DecisionCase::deny("outsider_cannot_manage_project", &u.outsider, action));
	}

	run_decision_cases(&Resource::project(&f.project), &cases);
}

#[test]
fn test_archived_project_keeps_authority() {
	let f = Fixtures::new();
	let u = &f.users;
	let archived = f.project.clone().archived();

	let cases = vec![
		DecisionCase::allow("owner_can_restore_archived", &u.owner, Action::RestoreProject),
		DecisionCase::allow("manager_can_restore_archived", &u.manager, Action::RestoreProject),
		DecisionCase::deny("member_cannot_restore_archived", &u.member, Action::RestoreProject),
	];

	run_decision_cases(&Resource::project(&archived), &cases);
}

#[test]
fn test_create_sprint_authorization() {
	let f = Fixtures::new();
	let u = &f.users;

	let with_project = vec![
		DecisionCase::allow("admin_can_create_sprint", &u.admin, Action::CreateSprint),
		DecisionCase::allow("owner_can_create_sprint", &u.owner, Action::CreateSprint),
		DecisionCase::allow("manager_can_create_sprint", &u.manager, Action::CreateSprint),
		DecisionCase::deny("member_cannot_create_sprint", &u.member, Action::CreateSprint),
		DecisionCase::deny(
			"global_manager_cannot_create_sprint_in_foreign_project",
			&u.global_manager,
			Action::CreateSprint,
		),
	];
	run_decision_cases(&Resource::project(&f.project), &with_project);

	let legacy_manager = u.member.clone().with_project_role("Project Manager");
	let without_project = vec![
		DecisionCase::allow("admin_can_create_sprint_without_project", &u.admin, Action::CreateSprint),
		DecisionCase::allow(
			"stored_manager_role_can_create_without_project",
			&legacy_manager,
			Action::CreateSprint,
		),
		DecisionCase::deny(
			"owner_without_project_snapshot_cannot_create",
			&u.owner,
			Action::CreateSprint,
		),
		DecisionCase::deny(
			"global_manager_without_stored_role_cannot_create",
			&u.global_manager,
			Action::CreateSprint,
		),
	];
	run_decision_cases(&Resource::none(), &without_project);
}
