// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boardwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boardwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use boardwright::model::{Connection, Diagram, Shape, ShapeKind};
use boardwright::templates::MindmapBranch;

#[derive(Debug, Clone, Copy)]
pub enum Case {
    /// Already valid grid; repair should be a no-op apart from magnets and section.
    Clean,
    /// Everything stacked on a handful of points.
    Pile,
    /// Long labels on a tight grid.
    LongLabels,
    /// Fan-in on one target, triggering lane growth.
    Congested,
}

impl Case {
    pub const ALL: [Case; 4] = [Case::Clean, Case::Pile, Case::LongLabels, Case::Congested];

    pub const fn id(self) -> &'static str {
        match self {
            Case::Clean => "clean",
            Case::Pile => "pile",
            Case::LongLabels => "long_labels",
            Case::Congested => "congested",
        }
    }
}

fn kind_for(idx: usize) -> ShapeKind {
    match idx % 3 {
        0 => ShapeKind::Rectangle,
        1 => ShapeKind::Diamond,
        _ => ShapeKind::Ellipse,
    }
}

fn grid(count: usize, columns: usize, pitch: f64, text: impl Fn(usize) -> String) -> Vec<Shape> {
    (0..count)
        .map(|idx| {
            let (col, row) = (idx % columns, idx / columns);
            Shape::new(format!("s{idx}"), text(idx))
                .with_kind(kind_for(idx))
                .at(col as f64 * pitch, row as f64 * pitch)
        })
        .collect()
}

fn chain(shapes: &[Shape]) -> Vec<Connection> {
    shapes.windows(2).map(|pair| Connection::new(&pair[0].id, &pair[1].id)).collect()
}

pub fn diagram(case: Case, size: usize) -> Diagram {
    match case {
        Case::Clean => {
            let shapes = grid(size, 8, 300.0, |idx| format!("Step {idx}"));
            let connections = chain(&shapes);
            Diagram::new(shapes, connections)
        }
        Case::Pile => {
            let shapes: Vec<_> = (0..size)
                .map(|idx| Shape::new(format!("s{idx}"), format!("N{idx}")).at((idx % 3) as f64, 0.0))
                .collect();
            let connections = chain(&shapes);
            Diagram::new(shapes, connections)
        }
        Case::LongLabels => {
            let shapes = grid(size, 6, 120.0, |idx| {
                format!("Component {idx} handles the request and forwards it downstream")
            });
            let connections = chain(&shapes);
            Diagram::new(shapes, connections)
        }
        Case::Congested => {
            let mut shapes = vec![Shape::new("hub", "Hub").at(0.0, 1000.0)];
            shapes.extend(
                (0..size).map(|idx| Shape::new(format!("s{idx}"), "Source").at(idx as f64 * 250.0, 0.0)),
            );
            let connections =
                (0..size).map(|idx| Connection::new(format!("s{idx}"), "hub")).collect();
            Diagram::new(shapes, connections)
        }
    }
}

pub fn branches(count: usize, children: usize) -> Vec<MindmapBranch> {
    (0..count)
        .map(|idx| {
            MindmapBranch::new(format!("Topic {idx}"))
                .with_children((0..children).map(|child| format!("Idea {idx}.{child}")))
        })
        .collect()
}

pub fn checksum(diagram: &Diagram) -> u64 {
    let mut acc = diagram.shapes.len() as u64;
    for shape in &diagram.shapes {
        acc = acc
            .wrapping_mul(31)
            .wrapping_add(shape.x.to_bits())
            .wrapping_add(shape.y.to_bits().rotate_left(7))
            .wrapping_add(shape.width.to_bits().rotate_left(13));
    }
    acc
}
