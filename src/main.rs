// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boardwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boardwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Boardwright CLI entrypoint.
//!
//! Serves MCP over stdio by default and the plugin bridge at `ws://<host>:<port>/bridge`.
//! With `--mcp-http`, MCP is served over streamable HTTP at `/mcp` on the same listener.

use std::{process, str::FromStr};

use clap::Parser;
use log::{debug, error, info, LevelFilter};

use boardwright::{Args, RelayConfig};

fn main() {
    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using 'info' instead.", args.log_level);
        LevelFilter::Info
    });
    // stdout carries the stdio MCP transport; env_logger writes to stderr.
    env_logger::Builder::from_env(env_logger::Env::default()).filter_level(log_level).init();
    debug!(args:?; "Parsed arguments");

    let config = match RelayConfig::try_from(args) {
        Ok(config) => config,
        Err(err) => {
            error!(err:%; "invalid configuration");
            process::exit(2);
        }
    };

    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(err) => {
            error!(err:%; "cannot start tokio runtime");
            process::exit(1);
        }
    };

    info!(bridge = config.bridge_addr().as_str(); "Starting Boardwright");
    if let Err(err) = runtime.block_on(boardwright::run(config)) {
        error!(err:%; "relay stopped");
        process::exit(1);
    }
    info!("Stopped");
}
