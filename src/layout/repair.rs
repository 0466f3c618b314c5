// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boardwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boardwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The repair pipeline: size, separate, attach, enclose.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::{Diagram, Magnet, Shape};

use super::container::enclosing_section;
use super::magnets::{assign_magnets, relieve_congestion};
use super::overlap::resolve_overlaps;
use super::policy::LayoutPolicy;
use super::sizer::fit_shapes;

/// Diagnostics of one repair run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RepairReport {
    /// Resolver passes across both resolver runs.
    pub overlap_passes: usize,
    /// Pairs still closer than the minimum gap after the iteration cap.
    pub residual_overlaps: usize,
    /// Connections left untouched because an endpoint id matches no shape.
    pub unresolved_connections: usize,
    /// Shapes enlarged to fit their label.
    pub resized_shapes: usize,
    /// Shapes enlarged to make room for connector lanes.
    pub widened_shapes: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Repaired {
    pub diagram: Diagram,
    pub report: RepairReport,
}

/// Repairs `diagram` with the default [`LayoutPolicy`].
///
/// The input is never modified. The result has grown-to-fit shapes, no shape pairs closer
/// than the minimum gap (unless the resolver hit its cap), concrete magnets on every
/// resolvable connection, and exactly one section named `title` (none if there are no
/// shapes).
pub fn repair_diagram(diagram: &Diagram, title: &str) -> Diagram {
    repair_diagram_with(diagram, title, &LayoutPolicy::default()).diagram
}

pub fn repair_diagram_with(diagram: &Diagram, title: &str, policy: &LayoutPolicy) -> Repaired {
    let mut shapes = diagram.shapes.clone();
    let mut connections = diagram.connections.clone();
    let mut report = RepairReport::default();

    shapes.iter_mut().for_each(sanitize);
    report.resized_shapes = fit_shapes(&mut shapes, policy);

    let resolved = resolve_overlaps(&mut shapes, policy);
    report.overlap_passes = resolved.passes;
    report.residual_overlaps = resolved.residual_overlaps;

    let assignment = assign_magnets(&shapes, &mut connections);
    report.unresolved_connections = assignment.unresolved;
    report.widened_shapes = relieve_congestion(&mut shapes, &assignment.loads, policy);

    if report.widened_shapes > 0 {
        // Wider shapes may crowd their neighbours again; separate once more and re-derive the
        // computed sides from the final centers. Explicit sides stay as authored.
        let resolved = resolve_overlaps(&mut shapes, policy);
        report.overlap_passes += resolved.passes;
        report.residual_overlaps = resolved.residual_overlaps;

        for (connection, authored) in connections.iter_mut().zip(&diagram.connections) {
            connection.from_magnet = Magnet::explicit(authored.from_magnet);
            connection.to_magnet = Magnet::explicit(authored.to_magnet);
        }
        assign_magnets(&shapes, &mut connections);
    }

    let title = if title.trim().is_empty() { policy.default_section_title.as_str() } else { title };
    let sections = enclosing_section(&shapes, title, policy).into_iter().collect();

    if report.residual_overlaps > 0 {
        log::warn!(
            residual_overlaps = report.residual_overlaps,
            passes = report.overlap_passes;
            "overlap resolver hit its iteration cap"
        );
    }
    if report.unresolved_connections > 0 {
        log::warn!(
            unresolved = report.unresolved_connections;
            "skipped connections referencing unknown shapes"
        );
    }
    log::debug!(
        shapes = shapes.len(),
        connections = connections.len(),
        passes = report.overlap_passes,
        resized = report.resized_shapes,
        widened = report.widened_shapes;
        "repaired diagram"
    );

    Repaired { diagram: Diagram { shapes, connections, sections }, report }
}

// Non-finite coordinates and sizes carry no usable hint; treat them as absent.
fn sanitize(shape: &mut Shape) {
    for coordinate in [&mut shape.x, &mut shape.y] {
        if !coordinate.is_finite() {
            *coordinate = 0.0;
        }
    }
    for extent in [&mut shape.width, &mut shape.height] {
        if !extent.is_finite() || *extent < 0.0 {
            *extent = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Connection, Section, ShapeKind};

    #[test]
    fn caller_diagram_is_not_modified() {
        let diagram = Diagram::new(
            vec![Shape::new("a", "A"), Shape::new("b", "B")],
            vec![Connection::new("a", "b")],
        );
        let before = diagram.clone();

        let repaired = repair_diagram(&diagram, "Title");

        assert_eq!(diagram, before);
        assert_ne!(repaired, before);
    }

    #[test]
    fn supplied_sections_are_replaced_by_one_derived_section() {
        let mut diagram = Diagram::new(vec![Shape::new("a", "A").at(0.0, 0.0)], Vec::new());
        for name in ["one", "two"] {
            diagram.sections.push(Section {
                name: name.to_owned(),
                x: 9999.0,
                y: 9999.0,
                width: 1.0,
                height: 1.0,
            });
        }

        let repaired = repair_diagram(&diagram, "Derived");

        assert_eq!(repaired.sections.len(), 1);
        assert_eq!(repaired.sections[0].name, "Derived");
        assert_eq!(repaired.sections[0].x, -50.0);
    }

    #[test]
    fn empty_diagram_gets_no_section() {
        let mut diagram = Diagram::default();
        diagram.sections.push(Section {
            name: "stale".to_owned(),
            x: 0.0,
            y: 0.0,
            width: 10.0,
            height: 10.0,
        });

        let repaired = repair_diagram_with(&diagram, "Empty", &LayoutPolicy::default());

        assert!(repaired.diagram.sections.is_empty());
        assert_eq!(repaired.report.overlap_passes, 1);
    }

    #[test]
    fn blank_title_falls_back_to_default() {
        let diagram = Diagram::new(vec![Shape::new("a", "A")], Vec::new());
        let repaired = repair_diagram(&diagram, "  ");
        assert_eq!(repaired.sections[0].name, "Diagram");
    }

    #[test]
    fn non_finite_and_negative_hints_are_treated_as_absent() {
        let diagram = Diagram::new(
            vec![Shape::new("a", "A").at(f64::NAN, f64::INFINITY).sized(-5.0, f64::NAN)],
            Vec::new(),
        );

        let repaired = repair_diagram(&diagram, "T");

        let shape = &repaired.shapes[0];
        assert_eq!((shape.x, shape.y), (0.0, 0.0));
        assert_eq!((shape.width, shape.height), (100.0, 50.0));
    }

    #[test]
    fn congestion_reruns_resolver_and_keeps_explicit_sides() {
        let policy = LayoutPolicy::default();
        // Four sources fan into the top of `t`; `t` and its right neighbour sit exactly far
        // enough apart until `t` grows.
        let mut shapes = (0..4)
            .map(|idx| Shape::new(format!("s{idx}"), "src").at(idx as f64 * 250.0, 0.0).sized(140.0, 50.0))
            .collect::<Vec<_>>();
        shapes.push(Shape::new("t", "target").at(300.0, 600.0).sized(140.0, 50.0));
        shapes.push(Shape::new("n", "next").at(501.0, 600.0).sized(140.0, 50.0));
        let mut connections = (0..4).map(|idx| Connection::new(format!("s{idx}"), "t")).collect::<Vec<_>>();
        connections.push(Connection {
            from_magnet: Some(Magnet::Bottom),
            ..Connection::new("t", "n")
        });

        let repaired = repair_diagram_with(&Diagram::new(shapes, connections), "T", &policy);

        assert_eq!(repaired.report.widened_shapes, 1);
        assert_eq!(repaired.report.residual_overlaps, 0);
        let diagram = &repaired.diagram;
        // Two lanes on top of the 100 wide floor.
        assert_eq!(diagram.shapes[4].width, 160.0);
        assert!(diagram.shapes[5].x - diagram.shapes[4].right() > policy.min_gap);
        assert_eq!(diagram.connections[4].from_magnet, Some(Magnet::Bottom));
        assert!(diagram.connections.iter().all(|c| {
            c.from_magnet.is_some_and(Magnet::is_concrete) && c.to_magnet.is_some_and(Magnet::is_concrete)
        }));
    }

    #[test]
    fn diamond_labels_keep_diamond_floor() {
        let diagram = Diagram::new(
            vec![Shape::new("d", "ok?").with_kind(ShapeKind::Diamond).sized(10.0, 10.0)],
            Vec::new(),
        );
        let repaired = repair_diagram(&diagram, "T");
        assert_eq!((repaired.shapes[0].width, repaired.shapes[0].height), (140.0, 80.0));
    }
}
