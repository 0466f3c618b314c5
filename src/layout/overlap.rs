// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boardwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boardwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pairwise relaxation that pushes overlapping shapes apart.
//!
//! Each pass visits every unordered pair in input order and separates overlapping pairs along
//! the axis that needs the smaller displacement, moving both shapes half the distance. Passes
//! repeat until one finds nothing to fix or `max_iterations` is reached; in the latter case
//! the outcome reports how many pairs still overlap.

use crate::model::Shape;

use super::geometry::shapes_overlap;
use super::policy::LayoutPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlapOutcome {
    /// Full passes performed, including the final clean pass.
    pub passes: usize,
    /// Overlapping pairs left when the iteration cap was hit.
    pub residual_overlaps: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

pub fn resolve_overlaps(shapes: &mut [Shape], policy: &LayoutPolicy) -> OverlapOutcome {
    let gap = policy.min_gap;

    for pass in 0..policy.max_iterations {
        let mut separated = 0usize;
        for i in 0..shapes.len() {
            for j in (i + 1)..shapes.len() {
                if shapes_overlap(&shapes[i], &shapes[j], gap) {
                    separate_pair(shapes, i, j, policy);
                    separated += 1;
                }
            }
        }
        if separated == 0 {
            return OverlapOutcome { passes: pass + 1, residual_overlaps: 0 };
        }
    }

    OverlapOutcome {
        passes: policy.max_iterations,
        residual_overlaps: count_overlapping_pairs(shapes, gap),
    }
}

pub fn count_overlapping_pairs(shapes: &[Shape], gap: f64) -> usize {
    let mut count = 0;
    for i in 0..shapes.len() {
        for j in (i + 1)..shapes.len() {
            if shapes_overlap(&shapes[i], &shapes[j], gap) {
                count += 1;
            }
        }
    }
    count
}

// Requires i < j. Coincident centers have no "away" direction; they split horizontally with the
// earlier shape moving left. Equal required displacement on both axes also goes horizontal.
fn separate_pair(shapes: &mut [Shape], i: usize, j: usize, policy: &LayoutPolicy) {
    let gap = policy.min_gap;
    let (ax, ay) = shapes[i].center();
    let (bx, by) = shapes[j].center();
    let dx = bx - ax;
    let dy = by - ay;

    let need_x = (shapes[i].width + shapes[j].width) / 2.0 + gap - dx.abs();
    let need_y = (shapes[i].height + shapes[j].height) / 2.0 + gap - dy.abs();

    let axis = if (dx == 0.0 && dy == 0.0) || need_x <= need_y {
        Axis::Horizontal
    } else {
        Axis::Vertical
    };

    let (need, delta) = match axis {
        Axis::Horizontal => (need_x, dx),
        Axis::Vertical => (need_y, dy),
    };
    let direction = if delta < 0.0 { -1.0 } else { 1.0 };
    let shift = direction * (need / 2.0 + policy.separation_bias);

    match axis {
        Axis::Horizontal => {
            shapes[i].x -= shift;
            shapes[j].x += shift;
        }
        Axis::Vertical => {
            shapes[i].y -= shift;
            shapes[j].y += shift;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boxed(id: &str, x: f64, y: f64, width: f64, height: f64) -> Shape {
        Shape::new(id, id).at(x, y).sized(width, height)
    }

    fn pile(count: usize) -> Vec<Shape> {
        (0..count)
            .map(|idx| {
                let x = (idx % 3) as f64 * 5.0;
                let y = (idx / 3) as f64 * 7.0;
                boxed(&format!("s{idx}"), x, y, 120.0, 60.0)
            })
            .collect()
    }

    #[test]
    fn coincident_shapes_split_horizontally_by_full_extent_plus_gap() {
        let policy = LayoutPolicy::default();
        let mut shapes = vec![boxed("a", 0.0, 0.0, 140.0, 50.0), boxed("b", 0.0, 0.0, 140.0, 50.0)];

        let outcome = resolve_overlaps(&mut shapes, &policy);

        assert_eq!(outcome.residual_overlaps, 0);
        assert_eq!(outcome.passes, 2);
        let (ax, _) = shapes[0].center();
        let (bx, _) = shapes[1].center();
        assert!(bx - ax >= 140.0 + 60.0);
        assert!(shapes[0].x < shapes[1].x);
        assert_eq!(shapes[0].y, 0.0);
        assert_eq!(shapes[1].y, 0.0);
    }

    #[test]
    fn pushes_along_cheaper_axis_away_from_each_other() {
        let policy = LayoutPolicy::default();
        // Side by side with a small vertical offset: horizontal fix needs 100, vertical 150.
        let mut shapes = vec![boxed("a", 0.0, 0.0, 100.0, 100.0), boxed("b", 60.0, 10.0, 100.0, 100.0)];

        resolve_overlaps(&mut shapes, &policy);

        assert_eq!(shapes[0].x, -51.0);
        assert_eq!(shapes[1].x, 111.0);
        assert_eq!(shapes[0].y, 0.0);
        assert_eq!(shapes[1].y, 10.0);
        assert!(!shapes_overlap(&shapes[0], &shapes[1], policy.min_gap));
    }

    #[test]
    fn vertical_push_moves_lower_shape_down() {
        let policy = LayoutPolicy::default();
        let mut shapes = vec![boxed("a", 0.0, 40.0, 200.0, 50.0), boxed("b", 10.0, 0.0, 200.0, 50.0)];

        resolve_overlaps(&mut shapes, &policy);

        assert!(shapes[0].y > shapes[1].y);
        assert_eq!(shapes[0].x, 0.0);
        assert_eq!(shapes[1].x, 10.0);
        assert!(!shapes_overlap(&shapes[0], &shapes[1], policy.min_gap));
    }

    #[test]
    fn separated_shapes_are_untouched() {
        let policy = LayoutPolicy::default();
        let original = vec![boxed("a", 0.0, 0.0, 100.0, 50.0), boxed("b", 300.0, 0.0, 100.0, 50.0)];
        let mut shapes = original.clone();

        let outcome = resolve_overlaps(&mut shapes, &policy);

        assert_eq!(outcome, OverlapOutcome { passes: 1, residual_overlaps: 0 });
        assert_eq!(shapes, original);
    }

    #[test]
    fn dense_pile_is_fully_separated() {
        let policy = LayoutPolicy::default();
        let mut shapes = pile(8);

        let outcome = resolve_overlaps(&mut shapes, &policy);

        assert_eq!(outcome.residual_overlaps, 0);
        assert!(outcome.passes < policy.max_iterations);
        assert_eq!(count_overlapping_pairs(&shapes, policy.min_gap), 0);
    }

    #[test]
    fn oversized_pile_stops_at_cap_and_reports_what_is_left() {
        let policy = LayoutPolicy::default();
        let mut shapes = pile(12);

        let outcome = resolve_overlaps(&mut shapes, &policy);

        assert_eq!(outcome.passes, policy.max_iterations);
        assert!(outcome.residual_overlaps > 0);
        assert_eq!(outcome.residual_overlaps, count_overlapping_pairs(&shapes, policy.min_gap));
    }

    #[test]
    fn identical_input_yields_identical_layout() {
        let policy = LayoutPolicy::default();
        let mut first = pile(7);
        let mut second = pile(7);
        resolve_overlaps(&mut first, &policy);
        resolve_overlaps(&mut second, &policy);
        assert_eq!(first, second);
    }

    #[test]
    fn iteration_cap_reports_residual_overlaps() {
        let policy = LayoutPolicy::default().with_max_iterations(0);
        let mut shapes = vec![boxed("a", 0.0, 0.0, 100.0, 50.0), boxed("b", 0.0, 0.0, 100.0, 50.0)];

        let outcome = resolve_overlaps(&mut shapes, &policy);

        assert_eq!(outcome, OverlapOutcome { passes: 0, residual_overlaps: 1 });
        assert_eq!(shapes[0].x, 0.0);
    }
}
