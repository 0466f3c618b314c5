// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boardwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boardwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{BTreeMap, VecDeque};
use std::time::{Duration, Instant};

use thiserror::Error;

use crate::bridge::Envelope;

use super::code::SessionCode;

/// Envelopes kept per session while no plugin is connected.
pub const DEFAULT_QUEUE_LIMIT: usize = 64;

const MAX_CODE_ATTEMPTS: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("invalid session code {code:?}")]
    InvalidCode { code: String },
    #[error("unknown session {code}")]
    UnknownSession { code: SessionCode },
    #[error("could not allocate a unique session code")]
    CodeSpaceExhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginState {
    Disconnected,
    Connected,
}

#[derive(Debug, Clone)]
pub struct SessionEntry {
    code: SessionCode,
    created_at: Instant,
    last_activity: Instant,
    plugin: PluginState,
    pending: VecDeque<Envelope>,
    dropped: usize,
}

impl SessionEntry {
    fn new(code: SessionCode, now: Instant) -> Self {
        Self {
            code,
            created_at: now,
            last_activity: now,
            plugin: PluginState::Disconnected,
            pending: VecDeque::new(),
            dropped: 0,
        }
    }

    pub fn code(&self) -> &SessionCode {
        &self.code
    }

    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    pub fn last_activity(&self) -> Instant {
        self.last_activity
    }

    pub fn plugin(&self) -> PluginState {
        self.plugin
    }

    pub fn is_connected(&self) -> bool {
        self.plugin == PluginState::Connected
    }

    pub fn pending(&self) -> &VecDeque<Envelope> {
        &self.pending
    }

    /// Envelopes discarded because the queue was full.
    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

/// Live sessions keyed by code.
///
/// Time is passed in by the caller so expiry can be driven deterministically.
#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: BTreeMap<SessionCode, SessionEntry>,
    ttl: Duration,
    queue_limit: usize,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self { sessions: BTreeMap::new(), ttl, queue_limit: DEFAULT_QUEUE_LIMIT }
    }

    pub fn with_queue_limit(mut self, queue_limit: usize) -> Self {
        self.queue_limit = queue_limit.max(1);
        self
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn connected_count(&self) -> usize {
        self.sessions.values().filter(|entry| entry.is_connected()).count()
    }

    pub fn create(&mut self, now: Instant) -> Result<SessionCode, SessionError> {
        self.create_with(now, SessionCode::generate)
    }

    /// Like [`SessionStore::create`] with a caller-supplied code source.
    pub fn create_with(
        &mut self,
        now: Instant,
        mut next_code: impl FnMut() -> SessionCode,
    ) -> Result<SessionCode, SessionError> {
        for _ in 0..MAX_CODE_ATTEMPTS {
            let code = next_code();
            if self.sessions.contains_key(&code) {
                continue;
            }
            self.sessions.insert(code.clone(), SessionEntry::new(code.clone(), now));
            return Ok(code);
        }
        Err(SessionError::CodeSpaceExhausted)
    }

    pub fn get(&self, code: &SessionCode) -> Option<&SessionEntry> {
        self.sessions.get(code)
    }

    pub fn contains(&self, code: &SessionCode) -> bool {
        self.sessions.contains_key(code)
    }

    pub fn touch(&mut self, code: &SessionCode, now: Instant) -> Result<(), SessionError> {
        self.entry_mut(code)?.last_activity = now;
        Ok(())
    }

    pub fn mark_connected(&mut self, code: &SessionCode, now: Instant) -> Result<(), SessionError> {
        let entry = self.entry_mut(code)?;
        entry.plugin = PluginState::Connected;
        entry.last_activity = now;
        Ok(())
    }

    pub fn mark_disconnected(&mut self, code: &SessionCode, now: Instant) -> Result<(), SessionError> {
        let entry = self.entry_mut(code)?;
        entry.plugin = PluginState::Disconnected;
        entry.last_activity = now;
        Ok(())
    }

    /// Queues an envelope for later delivery, dropping the oldest one when the queue is full.
    /// Returns the queue length afterwards.
    pub fn enqueue(
        &mut self,
        code: &SessionCode,
        envelope: Envelope,
        now: Instant,
    ) -> Result<usize, SessionError> {
        let queue_limit = self.queue_limit;
        let entry = self.entry_mut(code)?;
        if entry.pending.len() >= queue_limit {
            entry.pending.pop_front();
            entry.dropped += 1;
            log::warn!(code = code.as_str(), queue_limit; "pending queue full, dropped oldest envelope");
        }
        entry.pending.push_back(envelope);
        entry.last_activity = now;
        Ok(entry.pending.len())
    }

    /// Puts envelopes that were handed out but never delivered back at the front, in order.
    pub fn requeue_front(
        &mut self,
        code: &SessionCode,
        envelopes: Vec<Envelope>,
    ) -> Result<(), SessionError> {
        let queue_limit = self.queue_limit;
        let entry = self.entry_mut(code)?;
        for envelope in envelopes.into_iter().rev() {
            entry.pending.push_front(envelope);
        }
        while entry.pending.len() > queue_limit {
            entry.pending.pop_front();
            entry.dropped += 1;
        }
        Ok(())
    }

    pub fn drain_pending(&mut self, code: &SessionCode) -> Result<Vec<Envelope>, SessionError> {
        Ok(self.entry_mut(code)?.pending.drain(..).collect())
    }

    pub fn remove(&mut self, code: &SessionCode) -> Option<SessionEntry> {
        self.sessions.remove(code)
    }

    /// Evicts sessions idle for longer than the TTL. Sessions with a connected plugin stay.
    pub fn sweep(&mut self, now: Instant) -> Vec<SessionCode> {
        let ttl = self.ttl;
        let expired = self
            .sessions
            .values()
            .filter(|entry| {
                !entry.is_connected() && now.saturating_duration_since(entry.last_activity) > ttl
            })
            .map(|entry| entry.code.clone())
            .collect::<Vec<_>>();
        for code in &expired {
            self.sessions.remove(code);
        }
        expired
    }

    fn entry_mut(&mut self, code: &SessionCode) -> Result<&mut SessionEntry, SessionError> {
        self.sessions
            .get_mut(code)
            .ok_or_else(|| SessionError::UnknownSession { code: code.clone() })
    }
}
