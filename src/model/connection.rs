// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boardwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boardwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// Side of a shape where a connector attaches.
///
/// [`Magnet::Auto`] means "compute it"; empty and unknown values deserialize as `Auto`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Magnet {
    Top,
    Bottom,
    Left,
    Right,
    Auto,
}

impl Magnet {
    pub const SIDES: [Magnet; 4] = [Magnet::Top, Magnet::Bottom, Magnet::Left, Magnet::Right];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "TOP",
            Self::Bottom => "BOTTOM",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::Auto => "AUTO",
        }
    }

    pub fn is_concrete(self) -> bool {
        self != Self::Auto
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Auto => Self::Auto,
        }
    }

    /// Returns the magnet only when it names a concrete side.
    pub fn explicit(magnet: Option<Magnet>) -> Option<Magnet> {
        magnet.filter(|magnet| magnet.is_concrete())
    }

    pub fn parse_lenient(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "TOP" => Self::Top,
            "BOTTOM" => Self::Bottom,
            "LEFT" => Self::Left,
            "RIGHT" => Self::Right,
            _ => Self::Auto,
        }
    }
}

impl fmt::Display for Magnet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Magnet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().map(Self::parse_lenient).unwrap_or(Self::Auto))
    }
}

/// A directed edge between two shapes, addressed by shape id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_magnet: Option<Magnet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_magnet: Option<Magnet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Connection {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            from_magnet: None,
            to_magnet: None,
            label: None,
        }
    }

    pub fn with_magnets(mut self, from_magnet: Magnet, to_magnet: Magnet) -> Self {
        self.from_magnet = Some(from_magnet);
        self.to_magnet = Some(to_magnet);
        self
    }
}
