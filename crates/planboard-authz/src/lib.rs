// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Hierarchical resource authorization for Planboard.
//!
//! Given a signed-in principal, an action and a target resource (project,
//! sprint, task or document) with its project ancestry, this crate decides
//! allow or deny. Authority comes from several overlapping sources, checked
//! in a fixed order per action:
//!
//! - the principal's global role (`Admin`, `ProjectManager`, `Member`)
//! - ownership of the project
//! - the principal's membership role in the project
//! - membership of the sprint
//! - authorship of the sprint, task or document
//! - assignment to the task
//!
//! The first matching source allows the action; when none matches the action
//! is denied.
//!
//! # Architecture
//!
//! 1. **Role registry** ([`roles`]) and **identity normalization** ([`ids`])
//! 2. **Membership resolver** ([`membership`]): owner, manager, sprint member,
//!    author, assignee lookups
//! 3. **Rule evaluator** ([`policies`], [`engine`]): one authority chain per
//!    action family
//! 4. **Facade** ([`authorizer`]): [`Authorizer::can`], [`Authorizer::explain`]
//!    and one convenience method per action
//!
//! ```text
//! Authorizer::can(principal, action, resource)
//!     │
//!     └── engine::evaluate
//!         ├── target snapshot missing → AuthzError::InvalidRequest
//!         └── route by action:
//!             ├── project actions, sprint edit/delete → policies::project
//!             ├── CreateSprint / ViewSprint / ManageSprintMembers → policies::sprint
//!             ├── EditTask / DeleteTask → policies::task
//!             └── EditDocument / DeleteDocument → policies::document
//! ```
//!
//! # Example
//!
//! ```
//! use planboard_authz::{Authorizer, Principal, Project, ProjectRole, Task};
//!
//! let project = Project::new("p1", "u2").with_member("u1", ProjectRole::Member);
//! let principal = Principal::member("u1");
//! let authz = Authorizer::default();
//!
//! // A plain member cannot edit the project...
//! assert!(!authz.can_edit_project(&principal, &project));
//!
//! // ...but may delete a task they created while nobody is assigned to it.
//! let task = Task::new("t1", "p1", "u1");
//! assert!(authz.can_delete_task(&principal, &task, &project));
//!
//! let task = task.with_assignee("u3");
//! assert!(!authz.can_delete_task(&principal, &task, &project));
//! ```
//!
//! Decisions are pure functions of the supplied snapshots. The engine holds
//! no state, performs no I/O and never mutates its inputs, so any number of
//! callers may evaluate concurrently.

pub mod action;
pub mod authorizer;
pub mod decision;
pub mod engine;
pub mod error;
pub mod ids;
pub mod membership;
pub mod policies;
pub mod roles;
pub mod snapshot;

pub use action::Action;
pub use authorizer::{Authorizer, EnforcementMode};
pub use decision::{Check, Decision, Explanation, Rule};
pub use engine::{evaluate, is_allowed};
pub use error::AuthzError;
pub use ids::{normalize_id, CanonicalId, IdRef};
pub use membership::{
	find_project_membership, is_assignee, is_author, is_project_manager, is_project_owner,
	is_sprint_member, Authored,
};
pub use policies::has_project_authority;
pub use roles::{is_admin, normalize_role, GlobalRole, ProjectRole};
pub use snapshot::{
	Document, DocumentKind, Principal, Project, ProjectMembership, Resource, ResourceKind,
	ResourceSnapshot, Sprint, Task,
};
