// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boardwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boardwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The bridge between the relay and whiteboard plugins.
//!
//! Plugins connect over a WebSocket with their pairing code. Commands produced by MCP tools
//! are wrapped in an [`Envelope`] and handed to [`PluginHub::send_to_plugin`], which delivers
//! them right away or queues them until the plugin (re)connects.

mod envelope;
mod hub;
mod server;

pub use envelope::{Envelope, PluginMessage, ENVELOPE_SOURCE};
pub use hub::{Delivery, HealthSnapshot, PluginChannel, PluginHub, SessionStatus};
pub use server::{router, serve};

use thiserror::Error;

use crate::session::SessionError;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("failed to encode envelope: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to bind bridge listener on {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("bridge server error: {0}")]
    Serve(#[source] std::io::Error),
}
