// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Entity references and their canonical form.
//!
//! Upstream snapshots are inconsistent about how they reference other
//! entities. A relation field may hold:
//!
//! - a bare string id: `"u1"`
//! - a bare numeric id: `42`, `-5` or `3.0`
//! - a populated object carrying the id: `{ "_id": "u1", "name": "..." }` or `{ "id": "u1" }`
//!
//! Every comparison in the engine goes through [`normalize_id`], which reduces
//! all of these shapes to a [`CanonicalId`]. Nothing else in the crate compares
//! raw [`IdRef`] values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical string form of an entity id.
///
/// An empty canonical id means the reference carried no usable id. Empty ids
/// never match anything, including other empty ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalId(String);

impl CanonicalId {
	/// Returns the canonical id as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Returns true if the reference did not carry a usable id.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Returns true if both ids are non-empty and equal.
	pub fn matches(&self, other: &CanonicalId) -> bool {
		!self.is_empty() && self == other
	}
}

impl fmt::Display for CanonicalId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// A reference to an entity, in whatever shape the caller supplied it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdRef {
	/// A bare string id.
	Text(String),
	/// A bare non-negative integer id.
	Number(u64),
	/// A bare negative integer id.
	Signed(i64),
	/// A bare numeric id with a fractional part or exponent, such as `3.0`.
	Float(f64),
	/// A populated object that carries the id as a field.
	Embedded(EmbeddedRef),
}

/// A populated entity object, reduced to the fields that can carry its id.
///
/// Document-store payloads may carry `_id`, `id`, or both. `_id` wins when
/// both are present. Any other fields of the object are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmbeddedRef {
	#[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
	pub object_id: Option<Box<IdRef>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<Box<IdRef>>,
}

impl IdRef {
	/// Creates a bare string reference.
	pub fn bare(id: impl Into<String>) -> Self {
		IdRef::Text(id.into())
	}

	/// Creates a populated-object reference of the form `{ "_id": id }`.
	pub fn embedded(id: impl Into<String>) -> Self {
		IdRef::Embedded(EmbeddedRef {
			object_id: Some(Box::new(IdRef::Text(id.into()))),
			id: None,
		})
	}

	/// Returns the canonical form of this reference.
	pub fn canonical(&self) -> CanonicalId {
		normalize_id(self)
	}

	/// Returns true if both references resolve to the same non-empty id.
	pub fn same_as(&self, other: &IdRef) -> bool {
		self.canonical().matches(&other.canonical())
	}
}

impl From<&str> for IdRef {
	fn from(id: &str) -> Self {
		IdRef::bare(id)
	}
}

impl From<String> for IdRef {
	fn from(id: String) -> Self {
		IdRef::Text(id)
	}
}

impl From<u64> for IdRef {
	fn from(id: u64) -> Self {
		IdRef::Number(id)
	}
}

impl From<i64> for IdRef {
	fn from(id: i64) -> Self {
		u64::try_from(id).map_or(IdRef::Signed(id), IdRef::Number)
	}
}

impl fmt::Display for IdRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.canonical())
	}
}

/// Reduces any supported reference shape to its canonical id.
///
/// Surrounding whitespace is stripped from string ids. Ids are otherwise
/// compared exactly; they are not case-folded. Numbers use their shortest
/// decimal form, so `3.0` and `3` both become `"3"`.
pub fn normalize_id(reference: &IdRef) -> CanonicalId {
	match reference {
		IdRef::Text(s) => CanonicalId(s.trim().to_string()),
		IdRef::Number(n) => CanonicalId(n.to_string()),
		IdRef::Signed(n) => CanonicalId(n.to_string()),
		// -0.0 would otherwise print as "-0".
		IdRef::Float(n) if *n == 0.0 => CanonicalId("0".to_string()),
		IdRef::Float(n) => CanonicalId(n.to_string()),
		IdRef::Embedded(embedded) => embedded
			.object_id
			.as_deref()
			.or(embedded.id.as_deref())
			.map(normalize_id)
			.unwrap_or_else(|| CanonicalId(String::new())),
	}
}
