// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boardwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boardwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::bridge::SessionStatus;
use crate::layout::RepairReport;
use crate::model::{Connection, Diagram, Section, Shape};
use crate::templates::{FlowDirection, FlowLink, FlowStep, MindmapBranch};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SessionCreateResponse {
    pub session_code: String,
    /// What to tell the human so they can pair their whiteboard plugin.
    pub instructions: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bridge_url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct SessionStatusParams {
    /// Defaults to the active session.
    #[serde(default)]
    pub session_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SessionStatusResponse {
    pub session: SessionStatus,
    /// Whether this is the session tools send to by default.
    pub active: bool,
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct DiagramCreateParams {
    /// Name of the enclosing section; blank falls back to "Diagram".
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub shapes: Vec<Shape>,
    #[serde(default)]
    pub connections: Vec<Connection>,
    /// Defaults to the active session.
    #[serde(default)]
    pub session_code: Option<String>,
}

impl DiagramCreateParams {
    pub(crate) fn into_parts(self) -> (Diagram, String, Option<String>) {
        let Self { title, shapes, connections, session_code } = self;
        (Diagram::new(shapes, connections), title.unwrap_or_default(), session_code)
    }
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DiagramFlowchartParams {
    #[serde(default)]
    pub title: Option<String>,
    pub steps: Vec<FlowStep>,
    /// Extra connections between step ids, beyond the step sequence.
    #[serde(default)]
    pub links: Vec<FlowLink>,
    #[serde(default)]
    pub direction: Option<FlowDirection>,
    #[serde(default)]
    pub session_code: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DiagramMindmapParams {
    pub center: String,
    #[serde(default)]
    pub branches: Vec<MindmapBranch>,
    /// Defaults to the center topic.
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub session_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DiagramSendResponse {
    pub session_code: String,
    /// `sent` (plugin connected) or `queued` (delivered once a plugin connects).
    pub delivery: String,
    pub pending: usize,
    pub shapes: usize,
    pub connections: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<Section>,
    pub report: RepairReport,
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct DiagramPreviewParams {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub shapes: Vec<Shape>,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DiagramPreviewResponse {
    pub diagram: Diagram,
    pub report: RepairReport,
}
