// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boardwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boardwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

fn map_session_error(err: SessionError) -> ErrorData {
    match err {
        SessionError::InvalidCode { ref code } => ErrorData::invalid_params(
            format!("invalid session_code: {err}"),
            Some(serde_json::json!({ "session_code": code })),
        ),
        SessionError::UnknownSession { ref code } => ErrorData::resource_not_found(
            "unknown or expired session; call session.create",
            Some(serde_json::json!({ "session_code": code.as_str() })),
        ),
        SessionError::CodeSpaceExhausted => ErrorData::internal_error(err.to_string(), None),
    }
}

fn map_bridge_error(err: BridgeError) -> ErrorData {
    match err {
        BridgeError::Session(err) => map_session_error(err),
        other => ErrorData::internal_error(other.to_string(), None),
    }
}

fn send_response(
    code: SessionCode,
    delivery: Delivery,
    diagram: Diagram,
    report: crate::layout::RepairReport,
) -> DiagramSendResponse {
    let pending = match delivery {
        Delivery::Sent => 0,
        Delivery::Queued { pending } => pending,
    };
    let section = diagram.section().cloned();

    DiagramSendResponse {
        session_code: code.to_string(),
        delivery: delivery.label().to_owned(),
        pending,
        shapes: diagram.shapes.len(),
        connections: diagram.connections.len(),
        section,
        report,
    }
}
