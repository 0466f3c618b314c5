// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boardwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boardwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Deterministic layout repair for agent-authored diagrams.
//!
//! The pipeline sizes shapes to their labels, pushes overlapping shapes apart, picks connector
//! attachment sides, and finally derives the enclosing section. See [`repair_diagram`].

pub mod container;
pub mod geometry;
pub mod magnets;
pub mod overlap;
pub mod policy;
pub mod repair;
pub mod sizer;

pub use container::enclosing_section;
pub use geometry::{estimate_label_size, shapes_overlap, Rect};
pub use magnets::{assign_magnets, auto_magnets, relieve_congestion, MagnetAssignment, SideLoads};
pub use overlap::{count_overlapping_pairs, resolve_overlaps, OverlapOutcome};
pub use policy::LayoutPolicy;
pub use repair::{repair_diagram, repair_diagram_with, RepairReport, Repaired};
pub use sizer::{fit_shapes, min_size};
