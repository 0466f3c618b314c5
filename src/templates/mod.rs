// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boardwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boardwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Diagram constructors for common shapes of content.
//!
//! Templates only produce a rough initial placement; their output always goes through
//! [`crate::layout::repair_diagram`] before it reaches the plugin.

pub mod flowchart;
pub mod mindmap;

pub use flowchart::{flowchart, FlowDirection, FlowLink, FlowStep};
pub use mindmap::{mindmap, MindmapBranch};
