// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Comment and attachment policies.

use super::{admin_chain, project_authority, Subject};
use crate::decision::{Evaluation, Rule};
use crate::membership::is_author;
use crate::snapshot::{Document, Project};

/// Editing or deleting a document: admin, author, then project authority.
pub fn evaluate(subject: &Subject<'_>, document: &Document, project: &Project) -> Evaluation {
	let chain = admin_chain(subject).check(Rule::Author, || is_author(document, &subject.id));
	project_authority(chain, subject, project).finish()
}
