// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! End-to-end decisions on snapshots decoded from stored JSON documents.

use planboard_authz::{Action, Authorizer, Principal, Project, Resource, Rule, Sprint, Task};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

fn decode<T: DeserializeOwned>(value: Value) -> T {
	serde_json::from_value(value).expect("fixture should decode")
}

fn u1() -> Principal {
	decode(json!({ "id": "u1", "globalRole": "Member" }))
}

#[test]
fn plain_member_cannot_edit_project() {
	let project: Project = decode(json!({
		"id": "p1",
		"ownerId": "u2",
		"members": [{ "userId": "u1", "role": "Member" }],
	}));

	assert!(!Authorizer::strict().can_edit_project(&u1(), &project));
}

#[test]
fn owner_can_edit_project_without_membership() {
	let project: Project = decode(json!({ "id": "p1", "ownerId": "u1", "members": [] }));

	let explanation = Authorizer::strict()
		.explain(&u1(), Action::EditProject, &Resource::project(&project))
		.unwrap();
	assert!(explanation.allowed());
	assert_eq!(explanation.rule(), Rule::ProjectOwner);
}

#[test]
fn author_can_delete_task_only_while_unassigned() {
	let authz = Authorizer::strict();
	let project: Project = decode(json!({
		"id": "p1",
		"ownerId": "u2",
		"members": [{ "userId": { "_id": "u1" }, "role": "Member" }],
	}));

	let task: Task = decode(json!({
		"id": "t1",
		"projectId": "p1",
		"createdBy": { "_id": "u1" },
		"assignees": [],
	}));
	assert!(authz.can_delete_task(&u1(), &task, &project));

	let task: Task = decode(json!({
		"id": "t1",
		"projectId": "p1",
		"createdBy": { "_id": "u1" },
		"assignees": ["u3"],
	}));
	assert!(!authz.can_delete_task(&u1(), &task, &project));
}

#[test]
fn sprint_membership_grants_view() {
	let authz = Authorizer::strict();
	let project: Project = decode(json!({ "id": "p1", "ownerId": "u2", "members": [] }));

	let sprint: Sprint = decode(json!({
		"id": "s1",
		"projectId": "p1",
		"createdBy": "u9",
		"members": ["u1"],
	}));
	assert!(authz.can_view_sprint(&u1(), &sprint, &project));

	let sprint: Sprint = decode(json!({
		"id": "s1",
		"projectId": "p1",
		"createdBy": "u9",
		"members": [],
	}));
	assert!(!authz.can_view_sprint(&u1(), &sprint, &project));
}

#[test]
fn global_manager_can_manage_any_sprint_members() {
	let authz = Authorizer::strict();
	let principal: Principal = decode(json!({ "id": "u5", "globalRole": "ProjectManager" }));
	let sprint: Sprint = decode(json!({
		"id": "s1",
		"projectId": "p1",
		"createdBy": "u9",
		"members": [],
	}));
	let project: Project = decode(json!({ "id": "p1", "ownerId": "u2", "members": [] }));

	assert!(authz.can_manage_sprint_members(&principal, &sprint, &project));
}

#[test]
fn stored_legacy_project_role_allows_create_sprint_without_project() {
	let principal: Principal = decode(json!({
		"id": "u1",
		"globalRole": "member",
		"projectRole": "project_manager",
	}));

	let explanation = Authorizer::strict()
		.explain(
			&principal,
			Action::CreateSprint,
			&Resource::none(),
		)
		.unwrap();
	assert!(explanation.allowed());
	assert_eq!(explanation.rule(), Rule::StoredProjectRole);
}

#[test]
fn negative_and_float_numeric_ids_resolve_authority() {
	let owner: Principal = decode(json!({ "id": "-5", "globalRole": "member" }));
	let manager: Principal = decode(json!({ "id": 3, "globalRole": "member" }));
	let project: Project = decode(json!({
		"id": 12,
		"ownerId": -5,
		"members": [{ "userId": { "_id": 3.0 }, "role": "project_manager" }],
	}));
	let authz = Authorizer::strict();

	assert!(authz.can_edit_project(&owner, &project));
	assert!(authz.can_add_project_members(&manager, &project));
	assert!(!authz.can_delete_project(&u1(), &project));
}
