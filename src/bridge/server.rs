// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boardwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boardwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::future::Future;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::session::SessionCode;

use super::hub::PluginHub;
use super::BridgeError;

#[derive(Debug, Deserialize)]
struct BridgeQuery {
    code: String,
}

/// Routes: `GET /bridge?code=<CODE>` (WebSocket) and `GET /health`.
pub fn router(hub: PluginHub) -> Router {
    Router::new()
        .route("/bridge", get(bridge_upgrade))
        .route("/health", get(health))
        .with_state(hub)
}

/// Serves `router` on `listener` until `shutdown` resolves.
pub async fn serve(
    listener: tokio::net::TcpListener,
    router: Router,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), BridgeError> {
    axum::serve(listener, router).with_graceful_shutdown(shutdown).await.map_err(BridgeError::Serve)
}

async fn health(State(hub): State<PluginHub>) -> impl IntoResponse {
    Json(hub.health().await)
}

async fn bridge_upgrade(
    ws: WebSocketUpgrade,
    Query(query): Query<BridgeQuery>,
    State(hub): State<PluginHub>,
) -> Response {
    let code = match SessionCode::new(&query.code) {
        Ok(code) => code,
        Err(err) => return (StatusCode::BAD_REQUEST, err.to_string()).into_response(),
    };
    if !hub.contains(&code).await {
        return (StatusCode::NOT_FOUND, format!("unknown session {code}")).into_response();
    }

    ws.on_upgrade(move |socket| async move {
        if let Err(err) = serve_plugin(socket, hub, code.clone()).await {
            log::warn!(code = code.as_str(), err:%; "plugin connection ended with error");
        }
    })
}

async fn serve_plugin(
    mut socket: WebSocket,
    hub: PluginHub,
    code: SessionCode,
) -> Result<(), BridgeError> {
    let mut channel = hub.attach(&code).await?;
    let mut undelivered = Vec::new();

    let result = loop {
        tokio::select! {
            outbound = channel.outbound.recv() => {
                // `None` means a newer connection replaced this one.
                let Some(envelope) = outbound else { break Ok(()) };
                let payload = match serde_json::to_string(&envelope) {
                    Ok(payload) => payload,
                    Err(err) => break Err(BridgeError::Encode(err)),
                };
                if let Err(err) = socket.send(Message::Text(payload.into())).await {
                    log::debug!(code = code.as_str(), err:%; "plugin socket send failed");
                    undelivered.push(envelope);
                    break Ok(());
                }
            }
            inbound = socket.recv() => match inbound {
                Some(Ok(Message::Text(text))) => {
                    if let Some(reply) = hub.handle_plugin_text(&code, text.as_str()).await {
                        if socket.send(Message::Text(reply.into())).await.is_err() {
                            break Ok(());
                        }
                    }
                }
                Some(Ok(Message::Close(_))) | None => break Ok(()),
                Some(Ok(_)) => {}
                Some(Err(err)) => {
                    log::warn!(code = code.as_str(), err:%; "plugin socket receive error");
                    break Ok(());
                }
            },
        }
    };

    channel.outbound.close();
    while let Ok(envelope) = channel.outbound.try_recv() {
        undelivered.push(envelope);
    }
    hub.detach(&code, channel.connection_id, undelivered).await;
    result
}
