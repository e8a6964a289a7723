// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Authorization request errors.
//!
//! A denied decision is not an error. These variants describe requests the
//! engine refuses to decide at all; both are programming errors at the call
//! site.

use crate::action::Action;
use crate::snapshot::ResourceKind;
use thiserror::Error;

/// Errors raised for requests that cannot be decided.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthzError {
	/// The snapshot the action targets was not supplied.
	#[error("invalid request: {action} requires a {missing} snapshot")]
	InvalidRequest {
		action: Action,
		missing: ResourceKind,
	},

	/// The action name does not belong to the closed action set.
	#[error("unsupported action: {0}")]
	UnsupportedAction(String),
}

impl AuthzError {
	/// Returns true for a request with a missing snapshot.
	pub fn is_invalid_request(&self) -> bool {
		matches!(self, AuthzError::InvalidRequest { .. })
	}

	/// Returns true for an unknown action name.
	pub fn is_unsupported_action(&self) -> bool {
		matches!(self, AuthzError::UnsupportedAction(_))
	}
}
