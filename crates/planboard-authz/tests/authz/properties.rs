// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use planboard_authz::{
	Action, Authorizer, GlobalRole, IdRef, Principal, Project, ProjectRole, Resource, ResourceKind,
	Rule, Sprint, Task,
};
use proptest::prelude::*;

fn arb_id() -> impl Strategy<Value = String> {
	"[a-z][a-z0-9]{0,11}"
}

fn arb_ref(id: String) -> impl Strategy<Value = IdRef> {
	prop_oneof![
		Just(IdRef::bare(id.clone())),
		Just(IdRef::embedded(id.clone())),
		Just(IdRef::bare(format!("  {id} "))),
	]
}

fn arb_project_role() -> impl Strategy<Value = ProjectRole> {
	prop_oneof![Just(ProjectRole::Member), Just(ProjectRole::ProjectManager)]
}

fn bundle<'a>(project: &'a Project, sprint: &'a Sprint, task: &'a Task) -> Resource<'a> {
	Resource {
		project: Some(project),
		sprint: Some(sprint),
		task: Some(task),
		document: None,
	}
}

proptest! {
	#[test]
	fn adding_an_assignee_never_grants_task_deletion(
		author in arb_id(),
		assignee in arb_id(),
	) {
		let authz = Authorizer::strict();
		let principal = Principal::member(author.clone());
		let project = Project::new("p1", "project-owner").with_member(author.clone(), ProjectRole::Member);
		let task = Task::new("t1", "p1", author);

		prop_assert!(authz.can_delete_task(&principal, &task, &project));
		let task = task.with_assignee(assignee);
		prop_assert!(!authz.can_delete_task(&principal, &task, &project));
	}

	#[test]
	fn sprint_view_follows_membership(
		shape in arb_id().prop_flat_map(arb_ref),
	) {
		let authz = Authorizer::strict();
		let principal = Principal::member(shape.canonical().to_string());
		let project = Project::new("p1", "project-owner");
		let sprint = Sprint::new("s1", "p1", "sprint-creator");

		prop_assert!(!authz.can_view_sprint(&principal, &sprint, &project));
		let sprint = sprint.with_member(shape);
		prop_assert!(authz.can_view_sprint(&principal, &sprint, &project));
	}

	#[test]
	fn membership_reference_shape_does_not_change_decisions(
		user in arb_id(),
		role in arb_project_role(),
		action in proptest::sample::select(
			Action::all()
				.iter()
				.copied()
				.filter(|a| a.target() != Some(ResourceKind::Document))
				.collect::<Vec<_>>(),
		),
	) {
		let authz = Authorizer::strict();
		let principal = Principal::member(user.clone());
		let bare = Project::new("p1", "project-owner").with_member(IdRef::bare(user.clone()), role);
		let embedded = Project::new("p1", "project-owner").with_member(IdRef::embedded(user), role);
		let sprint = Sprint::new("s1", "p1", "sprint-creator");
		let task = Task::new("t1", "p1", "sprint-creator").with_assignee("someone");

		prop_assert_eq!(
			authz.can(&principal, action, &bundle(&bare, &sprint, &task)),
			authz.can(&principal, action, &bundle(&embedded, &sprint, &task))
		);
	}

	#[test]
	fn unrelated_principal_is_denied_by_default(
		user in "outsider-[a-z0-9]{1,8}",
		role in prop_oneof![Just(GlobalRole::Member), Just(GlobalRole::ProjectManager)],
		action in proptest::sample::select(vec![
			Action::EditProject,
			Action::DeleteProject,
			Action::ArchiveProject,
			Action::RestoreProject,
			Action::AddProjectMembers,
			Action::CreateSprint,
			Action::EditSprint,
			Action::DeleteSprint,
			Action::ViewSprint,
			Action::EditTask,
			Action::DeleteTask,
		]),
	) {
		let authz = Authorizer::strict();
		let principal = Principal::new(user, role);
		let project = Project::new("p1", "project-owner").with_member("pm", ProjectRole::ProjectManager);
		let sprint = Sprint::new("s1", "p1", "sprint-creator").with_member("sprinter");
		let task = Task::new("t1", "p1", "sprint-creator").with_assignee("assignee");
		let resource = bundle(&project, &sprint, &task);

		let explanation = authz.explain(&principal, action, &resource).unwrap();
		prop_assert!(!explanation.allowed());
		prop_assert_eq!(explanation.rule(), Rule::DefaultDeny);
	}
}
