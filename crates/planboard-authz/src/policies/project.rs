// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Project-scoped policies.

use super::{admin_chain, project_authority, Subject};
use crate::decision::Evaluation;
use crate::snapshot::Project;

/// General project authority: admin, then owner, then project manager.
///
/// Decides editing, deleting, archiving and restoring the project, adding
/// members to it, and editing or deleting its sprints.
pub fn evaluate(subject: &Subject<'_>, project: &Project) -> Evaluation {
	project_authority(admin_chain(subject), subject, project).finish()
}
