// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The single entry point for authorization checks.
//!
//! Every gated operation goes through an [`Authorizer`], either through the
//! generic [`Authorizer::can`] or one of the per-action convenience methods.
//! Call sites must not re-derive owner/admin/manager checks themselves.
//!
//! # Enforcement modes
//!
//! [`Authorizer::can`] returns a plain `bool`, so it has to decide what to do
//! with a request the engine refuses to decide (missing target snapshot,
//! unknown action name):
//!
//! - [`EnforcementMode::FailClosed`]: log at warn level and deny
//! - [`EnforcementMode::Strict`]: panic, surfacing the call-site bug
//!
//! [`Authorizer::try_can`] and [`Authorizer::explain`] return the error in
//! both modes.

use crate::action::Action;
use crate::decision::Explanation;
use crate::engine;
use crate::error::AuthzError;
use crate::snapshot::{Document, Principal, Project, Resource, Sprint, Task};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// What [`Authorizer::can`] does with an undecidable request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnforcementMode {
	/// Panic. Intended for development and tests.
	Strict,
	/// Log and deny. Intended for production.
	#[default]
	FailClosed,
}

impl EnforcementMode {
	pub fn as_str(&self) -> &'static str {
		match self {
			EnforcementMode::Strict => "strict",
			EnforcementMode::FailClosed => "fail_closed",
		}
	}

	/// Parses a mode name, ignoring ASCII case and accepting `-` for `_`.
	pub fn parse(raw: &str) -> Option<Self> {
		match raw.trim().to_ascii_lowercase().replace('-', "_").as_str() {
			"strict" => Some(EnforcementMode::Strict),
			"fail_closed" => Some(EnforcementMode::FailClosed),
			_ => None,
		}
	}
}

impl fmt::Display for EnforcementMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Authorization facade.
///
/// Holds no state besides its enforcement mode; share one instance freely
/// across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Authorizer {
	mode: EnforcementMode,
}

impl Authorizer {
	pub fn new(mode: EnforcementMode) -> Self {
		Self { mode }
	}

	pub fn strict() -> Self {
		Self::new(EnforcementMode::Strict)
	}

	pub fn fail_closed() -> Self {
		Self::new(EnforcementMode::FailClosed)
	}

	pub fn mode(&self) -> EnforcementMode {
		self.mode
	}

	/// Returns the verdict, applying the enforcement mode to request errors.
	///
	/// # Panics
	///
	/// In [`EnforcementMode::Strict`], panics if the request is invalid.
	pub fn can(&self, principal: &Principal, action: Action, resource: &Resource<'_>) -> bool {
		match self.try_can(principal, action, resource) {
			Ok(allowed) => allowed,
			Err(err) => self.reject(err),
		}
	}

	/// Returns the verdict or the request error.
	pub fn try_can(
		&self,
		principal: &Principal,
		action: Action,
		resource: &Resource<'_>,
	) -> Result<bool, AuthzError> {
		engine::is_allowed(principal, action, resource)
	}

	/// Returns the verdict together with the rule that fired and the checks
	/// consulted. The verdict is always the one [`Authorizer::can`] returns.
	pub fn explain(
		&self,
		principal: &Principal,
		action: Action,
		resource: &Resource<'_>,
	) -> Result<Explanation, AuthzError> {
		engine::evaluate(principal, action, resource)
	}

	/// String-keyed variant of [`Authorizer::can`] for remote bindings.
	///
	/// # Panics
	///
	/// In [`EnforcementMode::Strict`], panics if the action name is unknown or
	/// the request is invalid.
	pub fn can_named(&self, principal: &Principal, action: &str, resource: &Resource<'_>) -> bool {
		match self.try_can_named(principal, action, resource) {
			Ok(allowed) => allowed,
			Err(err) => self.reject(err),
		}
	}

	/// String-keyed variant of [`Authorizer::try_can`].
	pub fn try_can_named(
		&self,
		principal: &Principal,
		action: &str,
		resource: &Resource<'_>,
	) -> Result<bool, AuthzError> {
		let action: Action = action.parse()?;
		self.try_can(principal, action, resource)
	}

	/// Returns every action the principal may perform on the supplied bundle.
	///
	/// Only actions whose required snapshots are all present are evaluated;
	/// sprint creation needs none. Order follows [`Action::all`].
	pub fn allowed_actions(&self, principal: &Principal, resource: &Resource<'_>) -> Vec<Action> {
		Action::all()
			.iter()
			.copied()
			.filter(|action| action.required_snapshots().iter().all(|kind| resource.has(*kind)))
			.filter(|action| matches!(self.try_can(principal, *action, resource), Ok(true)))
			.collect()
	}

	fn reject(&self, err: AuthzError) -> bool {
		match self.mode {
			EnforcementMode::Strict => panic!("authorization request rejected: {err}"),
			EnforcementMode::FailClosed => {
				warn!(error = %err, "authorization request rejected, denying");
				false
			}
		}
	}

	// =========================================================================
	// Project actions
	// =========================================================================

	pub fn can_edit_project(&self, principal: &Principal, project: &Project) -> bool {
		self.can(principal, Action::EditProject, &Resource::project(project))
	}

	pub fn can_delete_project(&self, principal: &Principal, project: &Project) -> bool {
		self.can(principal, Action::DeleteProject, &Resource::project(project))
	}

	pub fn can_archive_project(&self, principal: &Principal, project: &Project) -> bool {
		self.can(principal, Action::ArchiveProject, &Resource::project(project))
	}

	pub fn can_restore_project(&self, principal: &Principal, project: &Project) -> bool {
		self.can(principal, Action::RestoreProject, &Resource::project(project))
	}

	pub fn can_add_project_members(&self, principal: &Principal, project: &Project) -> bool {
		self.can(principal, Action::AddProjectMembers, &Resource::project(project))
	}

	// =========================================================================
	// Sprint actions
	// =========================================================================

	/// `project` may be absent; see [`crate::policies::sprint::evaluate_create`].
	pub fn can_create_sprint(&self, principal: &Principal, project: Option<&Project>) -> bool {
		self.can(
			principal,
			Action::CreateSprint,
			&Resource::none().within_opt(project),
		)
	}

	/// `project` is the sprint's parent project.
	pub fn can_edit_sprint(&self, principal: &Principal, project: &Project) -> bool {
		self.can(principal, Action::EditSprint, &Resource::project(project))
	}

	/// `project` is the sprint's parent project.
	pub fn can_delete_sprint(&self, principal: &Principal, project: &Project) -> bool {
		self.can(principal, Action::DeleteSprint, &Resource::project(project))
	}

	/// `project` is the sprint's parent project.
	pub fn can_view_sprint(&self, principal: &Principal, sprint: &Sprint, project: &Project) -> bool {
		self.can(
			principal,
			Action::ViewSprint,
			&Resource::sprint(sprint).within(project),
		)
	}

	pub fn can_manage_sprint_members(
		&self,
		principal: &Principal,
		sprint: &Sprint,
		project: &Project,
	) -> bool {
		self.can(
			principal,
			Action::ManageSprintMembers,
			&Resource::sprint(sprint).within(project),
		)
	}

	// =========================================================================
	// Task actions
	// =========================================================================

	pub fn can_edit_task(&self, principal: &Principal, task: &Task, project: &Project) -> bool {
		self.can(principal, Action::EditTask, &Resource::task(task).within(project))
	}

	pub fn can_delete_task(&self, principal: &Principal, task: &Task, project: &Project) -> bool {
		self.can(principal, Action::DeleteTask, &Resource::task(task).within(project))
	}

	// =========================================================================
	// Document actions
	// =========================================================================

	pub fn can_edit_document(
		&self,
		principal: &Principal,
		document: &Document,
		project: &Project,
	) -> bool {
		self.can(
			principal,
			Action::EditDocument,
			&Resource::document(document).within(project),
		)
	}

	pub fn can_delete_document(
		&self,
		principal: &Principal,
		document: &Document,
		project: &Project,
	) -> bool {
		self.can(
			principal,
			Action::DeleteDocument,
			&Resource::document(document).within(project),
		)
	}
}
