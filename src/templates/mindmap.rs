// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boardwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boardwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::f64::consts::{FRAC_PI_2, TAU};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::layout::{min_size, LayoutPolicy};
use crate::model::{Connection, Diagram, Shape, ShapeKind};

const BRANCH_RADIUS: f64 = 260.0;
const BRANCH_RADIUS_PER_BRANCH: f64 = 60.0;
const CHILD_RING_OFFSET: f64 = 260.0;

/// A first-level topic and its leaf topics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MindmapBranch {
    pub text: String,
    #[serde(default)]
    pub children: Vec<String>,
}

impl MindmapBranch {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), children: Vec::new() }
    }

    pub fn with_children<I, S>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.children = children.into_iter().map(Into::into).collect();
        self
    }
}

/// Places `center` at the origin, branches evenly on a ring starting at twelve o'clock, and
/// each branch's children on an outer ring inside the branch's angular sector.
///
/// Ids are `center`, `branch-<i>` and `branch-<i>-<j>` (1-based).
pub fn mindmap(center: &str, branches: &[MindmapBranch]) -> Diagram {
    let policy = LayoutPolicy::default();
    let mut shapes = vec![node("center", center, ShapeKind::Ellipse, (0.0, 0.0), &policy)];
    let mut connections = Vec::new();

    let count = branches.len().max(1) as f64;
    let branch_radius = BRANCH_RADIUS.max(count * BRANCH_RADIUS_PER_BRANCH);
    let child_radius = branch_radius + CHILD_RING_OFFSET;
    let sector = TAU / count;

    for (idx, branch) in branches.iter().enumerate() {
        let angle = -FRAC_PI_2 + sector * idx as f64;
        let branch_id = format!("branch-{}", idx + 1);
        shapes.push(node(
            &branch_id,
            &branch.text,
            ShapeKind::Rectangle,
            polar(branch_radius, angle),
            &policy,
        ));
        connections.push(Connection::new("center", branch_id.clone()));

        let children = branch.children.len() as f64;
        for (child_idx, child) in branch.children.iter().enumerate() {
            let child_angle = angle - sector / 2.0 + sector * (child_idx as f64 + 0.5) / children;
            let child_id = format!("{branch_id}-{}", child_idx + 1);
            shapes.push(node(
                &child_id,
                child,
                ShapeKind::Rectangle,
                polar(child_radius, child_angle),
                &policy,
            ));
            connections.push(Connection::new(branch_id.clone(), child_id));
        }
    }

    Diagram::new(shapes, connections)
}

fn polar(radius: f64, angle: f64) -> (f64, f64) {
    (radius * angle.cos(), radius * angle.sin())
}

fn node(id: &str, text: &str, kind: ShapeKind, center: (f64, f64), policy: &LayoutPolicy) -> Shape {
    let (width, height) = min_size(kind, text, policy);
    Shape::new(id, text)
        .with_kind(kind)
        .at(center.0 - width / 2.0, center.1 - height / 2.0)
        .sized(width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{count_overlapping_pairs, repair_diagram};
    use crate::model::Magnet;

    fn branches() -> Vec<MindmapBranch> {
        vec![
            MindmapBranch::new("Goals").with_children(["Revenue", "Hiring"]),
            MindmapBranch::new("Risks").with_children(["Churn"]),
            MindmapBranch::new("Ideas"),
            MindmapBranch::new("Open questions").with_children(["Pricing", "Launch date", "Scope"]),
        ]
    }

    #[test]
    fn builds_center_branches_and_children_with_stable_ids() {
        let diagram = mindmap("Plan", &branches());

        assert_eq!(diagram.shapes.len(), 1 + 4 + 6);
        assert_eq!(diagram.connections.len(), 4 + 6);
        assert_eq!(diagram.shapes[0].id, "center");
        assert_eq!(diagram.shapes[0].kind, ShapeKind::Ellipse);
        assert!(diagram.shape("branch-4-3").is_some());
        assert!(diagram
            .connections
            .iter()
            .any(|c| c.from == "branch-1" && c.to == "branch-1-2"));
    }

    #[test]
    fn first_branch_sits_above_the_center() {
        let diagram = mindmap("Plan", &branches());
        let (_, center_y) = diagram.shapes[0].center();
        let (branch_x, branch_y) = diagram.shape("branch-1").expect("branch").center();
        assert!(branch_y < center_y);
        assert!(branch_x.abs() < 1e-9);
    }

    #[test]
    fn repaired_mindmap_has_no_overlaps_and_concrete_magnets() {
        let repaired = repair_diagram(&mindmap("Plan", &branches()), "Plan");

        assert_eq!(count_overlapping_pairs(&repaired.shapes, LayoutPolicy::default().min_gap), 0);
        assert!(repaired.connections.iter().all(|c| {
            c.from_magnet.is_some_and(Magnet::is_concrete) && c.to_magnet.is_some_and(Magnet::is_concrete)
        }));
        assert_eq!(repaired.sections.len(), 1);
    }

    #[test]
    fn center_only_mindmap() {
        let diagram = mindmap("Alone", &[]);
        assert_eq!(diagram.shapes.len(), 1);
        assert!(diagram.connections.is_empty());
    }
}
