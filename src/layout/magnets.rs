// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boardwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boardwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Connector attachment sides and per-side congestion.

use std::collections::{BTreeMap, HashMap};

use crate::model::{Connection, Magnet, Shape};

use super::policy::LayoutPolicy;
use super::sizer::min_size;

/// Connector count per `(shape index, side)`, counting both ends of every connection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SideLoads {
    counts: BTreeMap<(usize, Magnet), usize>,
}

impl SideLoads {
    pub fn get(&self, shape_index: usize, side: Magnet) -> usize {
        self.counts.get(&(shape_index, side)).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    fn add(&mut self, shape_index: usize, side: Magnet) {
        *self.counts.entry((shape_index, side)).or_insert(0) += 1;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MagnetAssignment {
    pub loads: SideLoads,
    /// Connections skipped because an endpoint id matches no shape.
    pub unresolved: usize,
}

/// Attachment sides derived from the centers of the two shapes.
///
/// Mostly-vertical relationships attach bottom-to-top (or top-to-bottom); everything else,
/// including exact diagonals, attaches horizontally.
pub fn auto_magnets(from: &Shape, to: &Shape) -> (Magnet, Magnet) {
    let (from_x, from_y) = from.center();
    let (to_x, to_y) = to.center();
    let dx = to_x - from_x;
    let dy = to_y - from_y;

    let source = if dy.abs() > dx.abs() {
        if dy > 0.0 {
            Magnet::Bottom
        } else {
            Magnet::Top
        }
    } else if dx > 0.0 {
        Magnet::Right
    } else {
        Magnet::Left
    };
    (source, source.opposite())
}

/// Fills in every non-explicit magnet of resolvable connections and tallies side usage.
///
/// Explicit sides are kept verbatim. Connections whose `from`/`to` id is unknown are left as
/// they are. When ids repeat, the first shape with the id wins.
pub fn assign_magnets(shapes: &[Shape], connections: &mut [Connection]) -> MagnetAssignment {
    let mut index = HashMap::<&str, usize>::with_capacity(shapes.len());
    for (idx, shape) in shapes.iter().enumerate() {
        index.entry(shape.id.as_str()).or_insert(idx);
    }

    let mut assignment = MagnetAssignment::default();
    for connection in connections.iter_mut() {
        let (Some(&from), Some(&to)) =
            (index.get(connection.from.as_str()), index.get(connection.to.as_str()))
        else {
            assignment.unresolved += 1;
            continue;
        };

        let (auto_from, auto_to) = auto_magnets(&shapes[from], &shapes[to]);
        let from_magnet = Magnet::explicit(connection.from_magnet).unwrap_or(auto_from);
        let to_magnet = Magnet::explicit(connection.to_magnet).unwrap_or(auto_to);

        connection.from_magnet = Some(from_magnet);
        connection.to_magnet = Some(to_magnet);
        assignment.loads.add(from, from_magnet);
        assignment.loads.add(to, to_magnet);
    }
    assignment
}

/// Makes room for connector lanes on shapes whose sides carry more than
/// `lane_free_connections` connectors.
///
/// Every extra connector on TOP or BOTTOM adds one `lane_width` to the width, every extra one on
/// LEFT or RIGHT to the height. Lanes are added on top of the label-fitted minimum size, never on
/// top of the current size, so a shape that already has the room keeps its size. Returns how many
/// shapes grew.
pub fn relieve_congestion(shapes: &mut [Shape], loads: &SideLoads, policy: &LayoutPolicy) -> usize {
    let extra = |idx: usize, side: Magnet| loads.get(idx, side).saturating_sub(policy.lane_free_connections);

    let mut grown = 0;
    for (idx, shape) in shapes.iter_mut().enumerate() {
        let width_lanes = extra(idx, Magnet::Top) + extra(idx, Magnet::Bottom);
        let height_lanes = extra(idx, Magnet::Left) + extra(idx, Magnet::Right);
        if width_lanes == 0 && height_lanes == 0 {
            continue;
        }

        let (min_width, min_height) = min_size(shape.kind, &shape.text, policy);
        let width = shape.width.max(min_width + width_lanes as f64 * policy.lane_width);
        let height = shape.height.max(min_height + height_lanes as f64 * policy.lane_width);
        if width == shape.width && height == shape.height {
            continue;
        }

        shape.width = width;
        shape.height = height;
        log::debug!(
            shape_id = shape.id.as_str(),
            width_lanes,
            height_lanes;
            "widened congested shape"
        );
        grown += 1;
    }
    grown
}
