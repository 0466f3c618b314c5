// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boardwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boardwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Command-line configuration.

use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use crate::layout::LayoutPolicy;

pub const DEFAULT_BRIDGE_PORT: u16 = 27436;

/// Relay diagram commands from MCP agents to whiteboard plugins, repairing layouts on the way.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Interface the plugin bridge listens on
    #[arg(long, default_value = "127.0.0.1")]
    pub bridge_host: String,

    /// Port of the plugin bridge (0 = ephemeral)
    #[arg(long, default_value_t = DEFAULT_BRIDGE_PORT)]
    pub bridge_port: u16,

    /// Serve MCP over streamable HTTP at `/mcp` on the bridge listener instead of stdio
    #[arg(long)]
    pub mcp_http: bool,

    /// Seconds of inactivity after which an unconnected session expires
    #[arg(long, default_value_t = 3600)]
    pub session_ttl_secs: u64,

    /// Seconds between expiry sweeps
    #[arg(long, default_value_t = 60)]
    pub sweep_interval_secs: u64,

    /// Minimum gap between shapes, overriding the layout default
    #[arg(long)]
    pub min_gap: Option<f64>,

    /// Cap on overlap resolver passes, overriding the layout default
    #[arg(long)]
    pub max_iterations: Option<usize>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum McpTransport {
    Stdio,
    Http,
}

/// Validated runtime configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RelayConfig {
    pub bridge_host: String,
    pub bridge_port: u16,
    pub mcp_transport: McpTransport,
    pub session_ttl: Duration,
    pub sweep_interval: Duration,
    pub layout: LayoutPolicy,
}

impl RelayConfig {
    pub fn bridge_addr(&self) -> String {
        format!("{}:{}", self.bridge_host, self.bridge_port)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("--session-ttl-secs must be greater than zero")]
    ZeroSessionTtl,
    #[error("--sweep-interval-secs must be greater than zero")]
    ZeroSweepInterval,
    #[error("--min-gap must be a finite, non-negative number (got {0})")]
    InvalidMinGap(f64),
}

impl TryFrom<Args> for RelayConfig {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        if args.session_ttl_secs == 0 {
            return Err(ConfigError::ZeroSessionTtl);
        }
        if args.sweep_interval_secs == 0 {
            return Err(ConfigError::ZeroSweepInterval);
        }

        let mut layout = LayoutPolicy::default();
        if let Some(min_gap) = args.min_gap {
            if !min_gap.is_finite() || min_gap < 0.0 {
                return Err(ConfigError::InvalidMinGap(min_gap));
            }
            layout = layout.with_min_gap(min_gap);
        }
        if let Some(max_iterations) = args.max_iterations {
            layout = layout.with_max_iterations(max_iterations);
        }

        Ok(Self {
            bridge_host: args.bridge_host,
            bridge_port: args.bridge_port,
            mcp_transport: if args.mcp_http { McpTransport::Http } else { McpTransport::Stdio },
            session_ttl: Duration::from_secs(args.session_ttl_secs),
            sweep_interval: Duration::from_secs(args.sweep_interval_secs),
            layout,
        })
    }
}
