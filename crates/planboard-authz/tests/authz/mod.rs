// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary


mod missing_project;
mod projects;
mod properties;
mod scenarios;
mod sprints;
mod tasks;
