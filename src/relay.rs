// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boardwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boardwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Process wiring: plugin bridge, session sweeper and the MCP transport.

use std::sync::Arc;
use std::time::Duration;

use rmcp::transport::{
    streamable_http_server::session::local::LocalSessionManager, StreamableHttpServerConfig,
    StreamableHttpService,
};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use crate::bridge::{self, BridgeError, PluginHub};
use crate::config::{McpTransport, RelayConfig};
use crate::mcp::BoardwrightMcp;
use crate::session::SessionStore;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error(transparent)]
    Bridge(#[from] BridgeError),
    #[error("MCP transport error: {0}")]
    Mcp(#[from] rmcp::RmcpError),
}

/// Runs the relay until the MCP client disconnects (stdio) or the process receives Ctrl-C.
pub async fn run(config: RelayConfig) -> Result<(), RelayError> {
    let hub = PluginHub::new(SessionStore::new(config.session_ttl));
    let sweeper = tokio::spawn(sweep_sessions(hub.clone(), config.sweep_interval));

    let addr = config.bridge_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| BridgeError::Bind { addr: addr.clone(), source })?;
    let local_addr = listener.local_addr().map_err(BridgeError::Serve)?;
    log::info!(addr:% = local_addr; "plugin bridge listening");

    let mcp = BoardwrightMcp::with_policy(hub.clone(), config.layout.clone())
        .with_bridge_url(format!("ws://{local_addr}/bridge"));

    let result = match config.mcp_transport {
        McpTransport::Stdio => run_stdio(listener, hub, mcp).await,
        McpTransport::Http => run_http(listener, hub, mcp).await,
    };

    sweeper.abort();
    result
}

async fn run_stdio(
    listener: TcpListener,
    hub: PluginHub,
    mcp: BoardwrightMcp,
) -> Result<(), RelayError> {
    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let bridge = tokio::spawn(bridge::serve(listener, bridge::router(hub), async move {
        let _ = stop_rx.await;
    }));

    log::info!("serving MCP over stdio");
    let result = tokio::select! {
        result = mcp.serve_stdio() => result.map_err(RelayError::from),
        _ = tokio::signal::ctrl_c() => {
            log::info!("interrupted");
            Ok(())
        }
    };

    let _ = stop_tx.send(());
    match bridge.await {
        Ok(Err(err)) => log::error!(err:%; "plugin bridge stopped with an error"),
        Err(err) => log::error!(err:%; "plugin bridge task failed"),
        Ok(Ok(())) => {}
    }
    result
}

async fn run_http(
    listener: TcpListener,
    hub: PluginHub,
    mcp: BoardwrightMcp,
) -> Result<(), RelayError> {
    let config = StreamableHttpServerConfig {
        stateful_mode: true,
        ..StreamableHttpServerConfig::default()
    };
    let shutdown_token = config.cancellation_token.clone();
    let session_manager = Arc::new(LocalSessionManager::default());
    let mcp_service = StreamableHttpService::new(move || Ok(mcp.clone()), session_manager, config);

    let router = bridge::router(hub).nest_service("/mcp", mcp_service);
    log::info!("serving MCP over streamable HTTP at /mcp");

    bridge::serve(listener, router, async move {
        let _ = tokio::signal::ctrl_c().await;
        log::info!("interrupted");
        shutdown_token.cancel();
    })
    .await
    .map_err(RelayError::from)
}

async fn sweep_sessions(hub: PluginHub, every: Duration) {
    let mut interval = tokio::time::interval(every);
    // The first tick completes immediately.
    interval.tick().await;
    loop {
        interval.tick().await;
        hub.sweep().await;
    }
}

