// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Decisions, the rules that produce them, and the authority chain.
//!
//! Every policy is an [`AuthorityChain`]: an ordered list of checks where the
//! first check that matches allows the action. When no check matches the
//! decision is a deny attributed to [`Rule::DefaultDeny`].

use crate::action::Action;
use crate::ids::CanonicalId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Authority sources a check can be attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
	/// Principal holds the global `Admin` role.
	Admin,
	/// Principal owns the (parent) project.
	ProjectOwner,
	/// Principal's project membership carries the `ProjectManager` role.
	ProjectManager,
	/// Principal's legacy stored project role is `ProjectManager`.
	StoredProjectRole,
	/// Principal holds the global `ProjectManager` role.
	GlobalProjectManager,
	/// Principal is listed in the sprint's member set.
	SprintMember,
	/// Principal created the sprint.
	SprintCreator,
	/// Principal created the task or document.
	Author,
	/// Principal created the task and nobody is assigned to it.
	UnassignedTaskAuthor,
	/// Principal is assigned to the task.
	Assignee,
	/// No check matched.
	DefaultDeny,
}

impl Rule {
	pub fn as_str(&self) -> &'static str {
		match self {
			Rule::Admin => "admin",
			Rule::ProjectOwner => "project_owner",
			Rule::ProjectManager => "project_manager",
			Rule::StoredProjectRole => "stored_project_role",
			Rule::GlobalProjectManager => "global_project_manager",
			Rule::SprintMember => "sprint_member",
			Rule::SprintCreator => "sprint_creator",
			Rule::Author => "author",
			Rule::UnassignedTaskAuthor => "unassigned_task_author",
			Rule::Assignee => "assignee",
			Rule::DefaultDeny => "default_deny",
		}
	}
}

impl fmt::Display for Rule {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// The verdict and the rule that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
	pub allowed: bool,
	pub rule: Rule,
}

impl Decision {
	pub fn allow(rule: Rule) -> Self {
		Self {
			allowed: true,
			rule,
		}
	}

	pub fn deny() -> Self {
		Self {
			allowed: false,
			rule: Rule::DefaultDeny,
		}
	}
}

impl fmt::Display for Decision {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let verdict = if self.allowed { "allow" } else { "deny" };
		write!(f, "{verdict} ({})", self.rule)
	}
}

/// One consulted check and whether it matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Check {
	pub rule: Rule,
	pub matched: bool,
}

/// Result of running a policy's authority chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
	pub decision: Decision,
	/// Checks consulted, in order, up to and including the match.
	pub trail: Vec<Check>,
}

/// A decision annotated with the checks that led to it.
///
/// Produced on request only; it never changes the verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Explanation {
	pub action: Action,
	pub principal_id: CanonicalId,
	pub decision: Decision,
	pub trail: Vec<Check>,
}

impl Explanation {
	pub fn allowed(&self) -> bool {
		self.decision.allowed
	}

	pub fn rule(&self) -> Rule {
		self.decision.rule
	}
}

impl fmt::Display for Explanation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{} by {}: {}",
			self.action, self.principal_id, self.decision
		)?;
		for check in &self.trail {
			let mark = if check.matched { "+" } else { "-" };
			write!(f, "\n  {mark} {}", check.rule)?;
		}
		Ok(())
	}
}

/// Ordered, first-match-wins list of checks with default deny.
///
/// Checks after the first match are not evaluated.
#[derive(Debug, Default)]
pub struct AuthorityChain {
	matched: Option<Rule>,
	trail: Vec<Check>,
}

impl AuthorityChain {
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a check. `test` runs only if no earlier check matched.
	pub fn check(mut self, rule: Rule, test: impl FnOnce() -> bool) -> Self {
		if self.matched.is_none() {
			let matched = test();
			self.trail.push(Check { rule, matched });
			if matched {
				self.matched = Some(rule);
			}
		}
		self
	}

	pub fn finish(self) -> Evaluation {
		let decision = match self.matched {
			Some(rule) => Decision::allow(rule),
			None => Decision::deny(),
		};
		Evaluation {
			decision,
			trail: self.trail,
		}
	}
}
