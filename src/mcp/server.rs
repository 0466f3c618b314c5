// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boardwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boardwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::{Json, Parameters};
use rmcp::model::{ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ErrorData, ServerHandler, ServiceExt};
use tokio::sync::Mutex;

use crate::bridge::{BridgeError, Delivery, Envelope, PluginHub};
use crate::layout::{repair_diagram_with, LayoutPolicy};
use crate::model::Diagram;
use crate::session::{SessionCode, SessionError};
use crate::templates::{flowchart, mindmap};

use super::types::*;

#[derive(Clone)]
pub struct BoardwrightMcp {
    hub: PluginHub,
    active_session: Arc<Mutex<Option<SessionCode>>>,
    policy: Arc<LayoutPolicy>,
    bridge_url: Option<Arc<str>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl BoardwrightMcp {
    pub fn new(hub: PluginHub) -> Self {
        Self::with_policy(hub, LayoutPolicy::default())
    }

    pub fn with_policy(hub: PluginHub, policy: LayoutPolicy) -> Self {
        Self {
            hub,
            active_session: Arc::new(Mutex::new(None)),
            policy: Arc::new(policy),
            bridge_url: None,
            tool_router: Self::tool_router(),
        }
    }

    /// Advertises where plugins connect, e.g. `ws://127.0.0.1:27436/bridge`.
    pub fn with_bridge_url(mut self, url: impl Into<String>) -> Self {
        self.bridge_url = Some(Arc::from(url.into()));
        self
    }

    pub async fn serve_stdio(self) -> Result<(), rmcp::RmcpError> {
        let service = self.serve((tokio::io::stdin(), tokio::io::stdout())).await?;
        service.waiting().await?;
        Ok(())
    }

    pub async fn active_session(&self) -> Option<SessionCode> {
        self.active_session.lock().await.clone()
    }

    async fn resolve_session(&self, session_code: Option<String>) -> Result<SessionCode, ErrorData> {
        let code = match session_code {
            Some(raw) => SessionCode::new(&raw).map_err(map_session_error)?,
            None => self.active_session().await.ok_or_else(|| {
                ErrorData::invalid_params(
                    "no active session; call session.create first or pass session_code",
                    None,
                )
            })?,
        };
        if !self.hub.contains(&code).await {
            return Err(map_session_error(SessionError::UnknownSession { code }));
        }
        Ok(code)
    }

    /// Repairs `diagram`, wraps it in a `create_diagram` envelope and hands it to the bridge.
    async fn relay(
        &self,
        session_code: Option<String>,
        diagram: Diagram,
        title: &str,
    ) -> Result<DiagramSendResponse, ErrorData> {
        let code = self.resolve_session(session_code).await?;
        let repaired = repair_diagram_with(&diagram, title, &self.policy);
        let envelope = Envelope::create_diagram(&repaired.diagram, &code).map_err(|err| {
            ErrorData::internal_error(format!("cannot encode diagram: {err}"), None)
        })?;
        let delivery = self.hub.send_to_plugin(&code, envelope).await.map_err(map_bridge_error)?;
        log::info!(
            code = code.as_str(),
            delivery = delivery.label(),
            shapes = repaired.diagram.shapes.len();
            "diagram relayed"
        );

        Ok(send_response(code, delivery, repaired.diagram, repaired.report))
    }

    /// Start a pairing session and make it the default target; show the returned code to the
    /// human so their whiteboard plugin can connect.
    #[tool(name = "session.create")]
    async fn session_create(&self) -> Result<Json<SessionCreateResponse>, ErrorData> {
        let code = self.hub.create_session().await.map_err(map_session_error)?;
        *self.active_session.lock().await = Some(code.clone());

        let instructions = match self.bridge_url.as_deref() {
            Some(url) => format!(
                "Open the whiteboard plugin and enter code {code}. The plugin connects to {url}?code={code}. Diagrams sent before it connects are queued."
            ),
            None => format!(
                "Open the whiteboard plugin and enter code {code}. Diagrams sent before it connects are queued."
            ),
        };

        Ok(Json(SessionCreateResponse {
            session_code: code.to_string(),
            instructions,
            bridge_url: self.bridge_url.as_deref().map(str::to_owned),
        }))
    }

    /// Report whether a plugin is connected and how many diagrams wait for it.
    #[tool(name = "session.status")]
    async fn session_status(
        &self,
        params: Parameters<SessionStatusParams>,
    ) -> Result<Json<SessionStatusResponse>, ErrorData> {
        let code = self.resolve_session(params.0.session_code).await?;
        let session = self.hub.status(&code).await.map_err(map_session_error)?;
        let active = self.active_session().await.as_ref() == Some(&code);
        Ok(Json(SessionStatusResponse { session, active }))
    }

    /// Send shapes and connections to the whiteboard. Positions are hints: shapes are grown to
    /// fit their text, pushed apart until none overlap, connectors get attachment sides, and a
    /// titled section encloses everything.
    #[tool(name = "diagram.create")]
    async fn diagram_create(
        &self,
        params: Parameters<DiagramCreateParams>,
    ) -> Result<Json<DiagramSendResponse>, ErrorData> {
        let (diagram, title, session_code) = params.0.into_parts();
        self.relay(session_code, diagram, &title).await.map(Json)
    }

    /// Send a flowchart built from ordered steps (top-down by default); extra links may
    /// connect any two step ids.
    #[tool(name = "diagram.flowchart")]
    async fn diagram_flowchart(
        &self,
        params: Parameters<DiagramFlowchartParams>,
    ) -> Result<Json<DiagramSendResponse>, ErrorData> {
        let DiagramFlowchartParams { title, steps, links, direction, session_code } = params.0;
        if steps.is_empty() {
            return Err(ErrorData::invalid_params("steps must not be empty", None));
        }

        let diagram = flowchart(&steps, &links, direction.unwrap_or_default());
        self.relay(session_code, diagram, title.as_deref().unwrap_or_default()).await.map(Json)
    }

    /// Send a mind map: a central topic with branches and their child topics arranged around
    /// it.
    #[tool(name = "diagram.mindmap")]
    async fn diagram_mindmap(
        &self,
        params: Parameters<DiagramMindmapParams>,
    ) -> Result<Json<DiagramSendResponse>, ErrorData> {
        let DiagramMindmapParams { center, branches, title, session_code } = params.0;
        if center.trim().is_empty() {
            return Err(ErrorData::invalid_params("center must not be empty", None));
        }

        let diagram = mindmap(&center, &branches);
        let title = title.unwrap_or_else(|| center.clone());
        self.relay(session_code, diagram, &title).await.map(Json)
    }

    /// Repair a diagram without sending it; returns the corrected shapes, connections and
    /// section so the layout can be inspected first.
    #[tool(name = "diagram.preview")]
    async fn diagram_preview(
        &self,
        params: Parameters<DiagramPreviewParams>,
    ) -> Result<Json<DiagramPreviewResponse>, ErrorData> {
        let DiagramPreviewParams { title, shapes, connections } = params.0;
        let repaired = repair_diagram_with(
            &Diagram::new(shapes, connections),
            title.as_deref().unwrap_or_default(),
            &self.policy,
        );
        Ok(Json(DiagramPreviewResponse { diagram: repaired.diagram, report: repaired.report }))
    }
}

#[tool_handler]
impl ServerHandler for BoardwrightMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Boardwright whiteboard relay (tools: session.create, session.status, diagram.create, diagram.flowchart, diagram.mindmap, diagram.preview). Call session.create first and share the code with the human; diagrams are repaired (no overlaps, text fits, connector sides chosen) before they reach the plugin."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

// Error mapping and response assembly for the tool handlers.
include!("server/helpers.rs");
