// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boardwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boardwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, Mutex};

use crate::session::{SessionCode, SessionError, SessionStore};

use super::envelope::{Envelope, PluginMessage};
use super::BridgeError;

/// Outcome of [`PluginHub::send_to_plugin`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Handed to an open plugin connection.
    Sent,
    /// Stored until a plugin connects; `pending` is the queue length afterwards.
    Queued { pending: usize },
}

impl Delivery {
    pub fn label(self) -> &'static str {
        match self {
            Self::Sent => "sent",
            Self::Queued { .. } => "queued",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SessionStatus {
    pub session_code: String,
    pub plugin_connected: bool,
    pub pending: usize,
    pub dropped: usize,
    pub age_secs: u64,
    pub idle_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HealthSnapshot {
    pub status: String,
    pub sessions: usize,
    pub connected: usize,
}

/// The receiving half handed to a freshly attached plugin connection.
#[derive(Debug)]
pub struct PluginChannel {
    pub connection_id: u64,
    pub outbound: mpsc::UnboundedReceiver<Envelope>,
}

#[derive(Debug)]
struct HubState {
    store: SessionStore,
    channels: BTreeMap<SessionCode, (u64, mpsc::UnboundedSender<Envelope>)>,
    next_connection_id: u64,
}

/// Shared session store plus the open plugin channels.
#[derive(Debug, Clone)]
pub struct PluginHub {
    state: Arc<Mutex<HubState>>,
}

impl PluginHub {
    pub fn new(store: SessionStore) -> Self {
        Self {
            state: Arc::new(Mutex::new(HubState {
                store,
                channels: BTreeMap::new(),
                next_connection_id: 0,
            })),
        }
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self::new(SessionStore::new(ttl))
    }

    pub async fn create_session(&self) -> Result<SessionCode, SessionError> {
        let code = self.state.lock().await.store.create(Instant::now())?;
        log::info!(code = code.as_str(); "session created");
        Ok(code)
    }

    pub async fn contains(&self, code: &SessionCode) -> bool {
        self.state.lock().await.store.contains(code)
    }

    pub async fn status(&self, code: &SessionCode) -> Result<SessionStatus, SessionError> {
        let state = self.state.lock().await;
        let entry = state
            .store
            .get(code)
            .ok_or_else(|| SessionError::UnknownSession { code: code.clone() })?;
        let now = Instant::now();
        Ok(SessionStatus {
            session_code: code.as_str().to_owned(),
            plugin_connected: entry.is_connected(),
            pending: entry.pending().len(),
            dropped: entry.dropped(),
            age_secs: now.saturating_duration_since(entry.created_at()).as_secs(),
            idle_secs: now.saturating_duration_since(entry.last_activity()).as_secs(),
        })
    }

    pub async fn health(&self) -> HealthSnapshot {
        let state = self.state.lock().await;
        HealthSnapshot {
            status: "ok".to_owned(),
            sessions: state.store.len(),
            connected: state.store.connected_count(),
        }
    }

    /// Delivers `envelope` over the session's open plugin channel, or queues it.
    ///
    /// A channel whose receiver is gone counts as closed: it is dropped and the envelope is
    /// queued instead.
    pub async fn send_to_plugin(
        &self,
        code: &SessionCode,
        envelope: Envelope,
    ) -> Result<Delivery, BridgeError> {
        let mut guard = self.state.lock().await;
        let state = &mut *guard;
        let now = Instant::now();
        if !state.store.contains(code) {
            return Err(SessionError::UnknownSession { code: code.clone() }.into());
        }

        let envelope = if let Some((_, sender)) = state.channels.get(code) {
            match sender.send(envelope) {
                Ok(()) => {
                    state.store.touch(code, now)?;
                    log::debug!(code = code.as_str(); "envelope sent to plugin");
                    return Ok(Delivery::Sent);
                }
                Err(mpsc::error::SendError(envelope)) => {
                    state.channels.remove(code);
                    state.store.mark_disconnected(code, now)?;
                    envelope
                }
            }
        } else {
            envelope
        };

        let pending = state.store.enqueue(code, envelope, now)?;
        log::debug!(code = code.as_str(), pending; "envelope queued for plugin");
        Ok(Delivery::Queued { pending })
    }

    /// Registers a new plugin connection, replacing any previous one for the session.
    ///
    /// Queued envelopes are moved into the new channel first, so they are delivered before
    /// anything sent afterwards.
    pub async fn attach(&self, code: &SessionCode) -> Result<PluginChannel, BridgeError> {
        let mut state = self.state.lock().await;
        let now = Instant::now();
        state.store.mark_connected(code, now)?;

        let pending = state.store.drain_pending(code)?;
        let (sender, outbound) = mpsc::unbounded_channel();
        let flushed = pending.len();
        for envelope in pending {
            // The receiver is held right here, so this cannot fail.
            let _ = sender.send(envelope);
        }

        state.next_connection_id += 1;
        let connection_id = state.next_connection_id;
        if state.channels.insert(code.clone(), (connection_id, sender)).is_some() {
            log::info!(code = code.as_str(); "plugin reconnected, previous connection replaced");
        }
        log::info!(code = code.as_str(), connection_id, flushed; "plugin attached");

        Ok(PluginChannel { connection_id, outbound })
    }

    /// Unregisters a plugin connection and hands back envelopes it never delivered.
    ///
    /// When the connection was already replaced by a newer one, the leftovers go straight to the
    /// live connection; otherwise they are re-queued at the front.
    pub async fn detach(&self, code: &SessionCode, connection_id: u64, undelivered: Vec<Envelope>) {
        let mut guard = self.state.lock().await;
        let state = &mut *guard;
        let now = Instant::now();
        let current = state.channels.get(code).map(|(id, _)| *id) == Some(connection_id);
        if current {
            state.channels.remove(code);
            if let Err(err) = state.store.mark_disconnected(code, now) {
                log::debug!(code = code.as_str(), err:%; "detach after session expired");
            }
        }

        let mut undelivered = undelivered;
        if !current {
            if let Some((_, sender)) = state.channels.get(code) {
                let flushed = undelivered.len();
                undelivered = undelivered
                    .into_iter()
                    .filter_map(|envelope| sender.send(envelope).err().map(|err| err.0))
                    .collect();
                log::debug!(code = code.as_str(), flushed; "handed leftovers to the live connection");
            }
        }
        if !undelivered.is_empty() {
            if let Err(err) = state.store.requeue_front(code, undelivered) {
                log::warn!(code = code.as_str(), err:%; "dropped undelivered envelopes");
            }
        }
        log::info!(code = code.as_str(), connection_id; "plugin detached");
    }

    /// Handles a text frame from the plugin; returns the reply to send back, if any.
    pub async fn handle_plugin_text(&self, code: &SessionCode, text: &str) -> Option<String> {
        let message = match serde_json::from_str::<PluginMessage>(text) {
            Ok(message) => message,
            Err(err) => {
                log::warn!(code = code.as_str(), err:%; "ignoring malformed plugin frame");
                return None;
            }
        };

        if let Err(err) = self.state.lock().await.store.touch(code, Instant::now()) {
            log::debug!(code = code.as_str(), err:%; "plugin frame for expired session");
        }

        match message.kind.as_str() {
            "ping" => Some(serde_json::json!({ "type": "pong" }).to_string()),
            "error" => {
                log::warn!(code = code.as_str(), data:% = message.data; "plugin reported an error");
                None
            }
            kind => {
                log::info!(code = code.as_str(), kind; "plugin message");
                None
            }
        }
    }

    /// Evicts expired sessions; returns their codes.
    pub async fn sweep(&self) -> Vec<SessionCode> {
        let mut state = self.state.lock().await;
        let expired = state.store.sweep(Instant::now());
        for code in &expired {
            state.channels.remove(code);
        }
        if !expired.is_empty() {
            log::info!(expired = expired.len(); "evicted idle sessions");
        }
        expired
    }
}
