// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use planboard_authz::{Action, Resource};

use super::support::{run_decision_cases, DecisionCase, Fixtures};

#[test]
fn test_task_edit_authorization() {
	let f = Fixtures::new();
	let u = &f.users;

	let cases = vec![
		DecisionCase::allow("admin_can_edit", &u.admin, Action::EditTask),
		DecisionCase::allow("author_can_edit", &u.task_author, Action::EditTask),
		DecisionCase::allow("assignee_can_edit", &u.assignee, Action::EditTask),
		DecisionCase::allow("owner_can_edit", &u.owner, Action::EditTask),
		DecisionCase::allow("manager_can_edit", &u.manager, Action::EditTask),
		DecisionCase::deny("member_cannot_edit", &u.member, Action::EditTask),
		DecisionCase::deny("sprint_member_cannot_edit", &u.sprinter, Action::EditTask),
		DecisionCase::deny("global_manager_cannot_edit", &u.global_manager, Action::EditTask),
		DecisionCase::deny("outsider_cannot_edit", &u.outsider, Action::EditTask),
	];

	run_decision_cases(&Resource::task(&f.assigned_task).within(&f.project), &cases);
}

#[test]
fn test_task_delete_authorization() {
	let f = Fixtures::new();
	let u = &f.users;

	let assigned = vec![
		DecisionCase::allow("admin_can_delete_assigned", &u.admin, Action::DeleteTask),
		DecisionCase::allow("owner_can_delete_assigned", &u.owner, Action::DeleteTask),
		DecisionCase::allow("manager_can_delete_assigned", &u.manager, Action::DeleteTask),
		DecisionCase::deny("author_cannot_delete_assigned", &u.task_author, Action::DeleteTask),
		DecisionCase::deny("assignee_cannot_delete", &u.assignee, Action::DeleteTask),
		DecisionCase::deny("member_cannot_delete", &u.member, Action::DeleteTask),
	];
	run_decision_cases(&Resource::task(&f.assigned_task).within(&f.project), &assigned);

	let unassigned = vec![
		DecisionCase::allow("author_can_delete_unassigned", &u.task_author, Action::DeleteTask),
		DecisionCase::allow("owner_can_delete_unassigned", &u.owner, Action::DeleteTask),
		DecisionCase::deny("member_cannot_delete_unassigned", &u.member, Action::DeleteTask),
		DecisionCase::deny("outsider_cannot_delete_unassigned", &u.outsider, Action::DeleteTask),
	];
	run_decision_cases(&Resource::task(&f.unassigned_task).within(&f.project), &unassigned);
}
