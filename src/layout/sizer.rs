// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boardwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boardwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Shape, ShapeKind};

use super::geometry::estimate_label_size;
use super::policy::LayoutPolicy;

/// Minimum `(width, height)` for a shape of `kind` carrying `text`.
pub fn min_size(kind: ShapeKind, text: &str, policy: &LayoutPolicy) -> (f64, f64) {
    let (label_width, label_height) = estimate_label_size(text, policy);
    let (floor_width, floor_height) = policy.floor(kind);
    (label_width.max(floor_width), label_height.max(floor_height))
}

/// Grows a shape to at least its minimum size. Returns whether it grew.
pub fn fit_shape(shape: &mut Shape, policy: &LayoutPolicy) -> bool {
    let (min_width, min_height) = min_size(shape.kind, &shape.text, policy);
    let mut grew = false;
    if shape.width < min_width {
        shape.width = min_width;
        grew = true;
    }
    if shape.height < min_height {
        shape.height = min_height;
        grew = true;
    }
    grew
}

/// Grows every shape to fit its label. Returns how many shapes grew.
pub fn fit_shapes(shapes: &mut [Shape], policy: &LayoutPolicy) -> usize {
    shapes.iter_mut().filter_map(|shape| fit_shape(shape, policy).then_some(())).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_label_on_tiny_shape_grows_to_capped_width() {
        let policy = LayoutPolicy::default();
        let mut shape = Shape::new("a", "y".repeat(80)).sized(10.0, 10.0);
        assert!(fit_shape(&mut shape, &policy));
        assert!(shape.width >= 190.0);
        assert_eq!(shape.width, 190.0);
        assert!(shape.height >= 50.0);
    }

    #[test]
    fn sizes_never_shrink() {
        let policy = LayoutPolicy::default();
        let mut shape = Shape::new("a", "ok").sized(500.0, 300.0);
        assert!(!fit_shape(&mut shape, &policy));
        assert_eq!((shape.width, shape.height), (500.0, 300.0));
    }

    #[test]
    fn empty_labels_get_kind_specific_floors() {
        let policy = LayoutPolicy::default();
        assert_eq!(min_size(ShapeKind::Rectangle, "", &policy), (100.0, 50.0));
        assert_eq!(min_size(ShapeKind::Diamond, "", &policy), (140.0, 80.0));
        assert_eq!(min_size(ShapeKind::Ellipse, "", &policy), (120.0, 60.0));
    }

    #[test]
    fn fit_shapes_counts_grown_shapes() {
        let policy = LayoutPolicy::default();
        let mut shapes = vec![
            Shape::new("a", "A"),
            Shape::new("b", "B").sized(400.0, 400.0),
            Shape::new("c", "C").with_kind(ShapeKind::Diamond).sized(100.0, 100.0),
        ];
        assert_eq!(fit_shapes(&mut shapes, &policy), 2);
        assert_eq!((shapes[2].width, shapes[2].height), (140.0, 100.0));
    }
}
