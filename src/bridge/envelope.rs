// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boardwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boardwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::Diagram;
use crate::session::SessionCode;

/// Value of [`Envelope::source`] for everything the relay sends.
pub const ENVELOPE_SOURCE: &str = "boardwright";

/// A command for the plugin. The plugin dispatches on `type` and reads `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    #[serde(rename = "type")]
    pub kind: String,
    pub data: Value,
    pub source: String,
    pub id: String,
    pub session_code: String,
}

impl Envelope {
    pub const CREATE_DIAGRAM: &'static str = "create_diagram";

    pub fn new(kind: impl Into<String>, data: Value, session_code: &SessionCode) -> Self {
        Self {
            kind: kind.into(),
            data,
            source: ENVELOPE_SOURCE.to_owned(),
            id: uuid::Uuid::new_v4().to_string(),
            session_code: session_code.as_str().to_owned(),
        }
    }

    pub fn create_diagram(
        diagram: &Diagram,
        session_code: &SessionCode,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self::new(Self::CREATE_DIAGRAM, serde_json::to_value(diagram)?, session_code))
    }
}

/// A frame sent by the plugin.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PluginMessage {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub data: Value,
}
