// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boardwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boardwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Model Context Protocol (MCP) server surface.
//!
//! Agents create a pairing session, then send diagrams. Every diagram is repaired before it
//! is handed to the plugin bridge.

mod server;
mod types;

pub use server::BoardwrightMcp;
pub use types::*;
