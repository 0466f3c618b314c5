// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boardwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boardwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use smol_str::SmolStr;

use super::store::SessionError;

/// Characters used in pairing codes; no `0`/`O`/`1`/`I` so codes survive being read aloud.
pub const CODE_ALPHABET: &[u8; 32] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
pub const CODE_LENGTH: usize = 6;

/// A pairing code such as `K7QX2M`. Parsing is case-insensitive; the stored form is uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionCode {
    value: SmolStr,
}

impl SessionCode {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, SessionError> {
        let value = raw.as_ref().trim().to_ascii_uppercase();
        let valid = value.len() == CODE_LENGTH && value.bytes().all(|b| CODE_ALPHABET.contains(&b));
        if !valid {
            return Err(SessionError::InvalidCode { code: raw.as_ref().to_owned() });
        }
        Ok(Self { value: SmolStr::from(value) })
    }

    /// A fresh random code. Uniqueness is the store's concern.
    pub fn generate() -> Self {
        let random = uuid::Uuid::new_v4();
        // The low five bits of the leading uuid bytes are all random.
        let value: SmolStr = random.as_bytes()[..CODE_LENGTH]
            .iter()
            .map(|byte| CODE_ALPHABET[usize::from(byte & 0x1f)] as char)
            .collect();
        Self { value }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for SessionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for SessionCode {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for SessionCode {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for SessionCode {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
