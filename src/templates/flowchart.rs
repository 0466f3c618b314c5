// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boardwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boardwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::layout::{min_size, LayoutPolicy};
use crate::model::{Connection, Diagram, Shape, ShapeKind};

/// Space between consecutive steps along the flow axis.
const STEP_SPACING: f64 = 80.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlowDirection {
    #[default]
    TopDown,
    LeftRight,
}

/// One step of a flowchart. Steps are connected in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FlowStep {
    /// Defaults to `step-<n>` (1-based).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub text: String,
    #[serde(default)]
    pub kind: ShapeKind,
}

impl FlowStep {
    pub fn new(text: impl Into<String>) -> Self {
        Self { id: None, text: text.into(), kind: ShapeKind::Rectangle }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_kind(mut self, kind: ShapeKind) -> Self {
        self.kind = kind;
        self
    }
}

/// An extra connection beyond the step sequence, e.g. a loop back from a decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FlowLink {
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Lays `steps` out along `direction`, each centered on the flow axis, connected in order.
pub fn flowchart(steps: &[FlowStep], links: &[FlowLink], direction: FlowDirection) -> Diagram {
    let policy = LayoutPolicy::default();
    let mut shapes = Vec::with_capacity(steps.len());
    let mut cursor = 0.0;

    for (idx, step) in steps.iter().enumerate() {
        let id = step.id.clone().unwrap_or_else(|| format!("step-{}", idx + 1));
        let (width, height) = min_size(step.kind, &step.text, &policy);
        let (x, y) = match direction {
            FlowDirection::TopDown => (-width / 2.0, cursor),
            FlowDirection::LeftRight => (cursor, -height / 2.0),
        };
        cursor += STEP_SPACING
            + match direction {
                FlowDirection::TopDown => height,
                FlowDirection::LeftRight => width,
            };

        shapes.push(
            Shape::new(id, step.text.clone()).with_kind(step.kind).at(x, y).sized(width, height),
        );
    }

    let mut connections = shapes
        .windows(2)
        .map(|pair| Connection::new(pair[0].id.clone(), pair[1].id.clone()))
        .collect::<Vec<_>>();
    connections.extend(links.iter().map(|link| Connection {
        label: link.label.clone(),
        ..Connection::new(link.from.clone(), link.to.clone())
    }));

    Diagram::new(shapes, connections)
}
