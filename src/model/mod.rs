// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boardwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boardwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Diagram value types exchanged with the agent and the whiteboard plugin.
//!
//! A diagram is a plain value: shapes, connections between them, and the enclosing section.
//! Deserialization is lenient for every optional field so that model-generated input never
//! fails on a missing or malformed hint.

pub mod connection;
pub mod diagram;
pub mod section;
pub mod shape;

pub use connection::{Connection, Magnet};
pub use diagram::Diagram;
pub use section::Section;
pub use shape::{Shape, ShapeKind};
