// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Resource-specific authority chains.
//!
//! Each function here is one row family of the decision table. Policies
//! receive snapshots that the engine has already validated: the target and,
//! for every action except sprint creation, its parent project.

pub mod document;
pub mod project;
pub mod sprint;
pub mod task;

use crate::decision::{AuthorityChain, Rule};
use crate::ids::CanonicalId;
use crate::membership::{is_project_manager, is_project_owner};
use crate::snapshot::{Principal, Project};

/// The principal together with its normalized id.
#[derive(Debug, Clone)]
pub struct Subject<'a> {
	pub principal: &'a Principal,
	pub id: CanonicalId,
}

impl<'a> Subject<'a> {
	pub fn new(principal: &'a Principal) -> Self {
		Self {
			principal,
			id: principal.id.canonical(),
		}
	}

	pub fn is_admin(&self) -> bool {
		self.principal.is_admin()
	}
}

/// General project-level permission: admin, owner or project manager.
pub fn has_project_authority(principal: &Principal, project: &Project) -> bool {
	let subject = Subject::new(principal);
	project_authority(admin_chain(&subject), &subject, project)
		.finish()
		.decision
		.allowed
}

/// Starts a chain with the admin check every policy begins with.
pub(crate) fn admin_chain(subject: &Subject<'_>) -> AuthorityChain {
	AuthorityChain::new().check(Rule::Admin, || subject.is_admin())
}

/// Appends the owner and project-manager checks for `project`.
pub(crate) fn project_authority(
	chain: AuthorityChain,
	subject: &Subject<'_>,
	project: &Project,
) -> AuthorityChain {
	chain
		.check(Rule::ProjectOwner, || is_project_owner(project, &subject.id))
		.check(Rule::ProjectManager, || is_project_manager(project, &subject.id))
}
