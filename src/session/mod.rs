// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boardwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boardwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pairing sessions between an agent and a whiteboard plugin.
//!
//! The agent opens a session and receives a short code; the user types the code into the
//! plugin, which then connects to the bridge. Sessions without activity expire after a TTL.

mod code;
mod store;

pub use code::{SessionCode, CODE_ALPHABET, CODE_LENGTH};
pub use store::{PluginState, SessionEntry, SessionError, SessionStore, DEFAULT_QUEUE_LIMIT};
