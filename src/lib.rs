// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boardwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boardwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Boardwright: an MCP relay that repairs diagram layouts and hands them to a whiteboard plugin.
//!
//! The [`layout`] core is pure and synchronous: [`layout::repair_diagram`] grows shapes to fit
//! their text, separates overlapping shapes, picks connector sides and derives the enclosing
//! section. Everything around it is plumbing: [`session`] pairing codes, the [`bridge`]
//! WebSocket server plugins connect to, and the [`mcp`] tools agents call.

pub mod bridge;
pub mod config;
pub mod layout;
pub mod mcp;
pub mod model;
pub mod relay;
pub mod session;
pub mod templates;

pub use config::{Args, RelayConfig};
pub use relay::{run, RelayError};
