// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boardwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boardwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::ShapeKind;

/// Tunable constants of the repair pipeline.
///
/// All lengths are canvas units. [`LayoutPolicy::default`] is what the relay uses unless the
/// command line overrides the gap or iteration cap.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPolicy {
    /// Estimated width of one label character.
    pub char_width: f64,
    /// Characters per line counted towards width; longer labels wrap onto more lines.
    pub label_length_cap: usize,
    pub horizontal_padding: f64,
    pub line_height: f64,
    pub vertical_padding: f64,
    pub rectangle_floor: (f64, f64),
    pub diamond_floor: (f64, f64),
    pub ellipse_floor: (f64, f64),
    /// Minimum empty space between any two shapes.
    pub min_gap: f64,
    /// Upper bound on full resolver passes.
    pub max_iterations: usize,
    /// Extra push per shape so separated pairs do not sit exactly on the gap boundary.
    pub separation_bias: f64,
    /// Room added per connector lane beyond `lane_free_connections` on one side.
    pub lane_width: f64,
    pub lane_free_connections: usize,
    pub section_padding: f64,
    pub section_floor: (f64, f64),
    pub default_section_title: String,
}

impl Default for LayoutPolicy {
    fn default() -> Self {
        Self {
            char_width: 8.0,
            label_length_cap: 20,
            horizontal_padding: 30.0,
            line_height: 20.0,
            vertical_padding: 20.0,
            rectangle_floor: (100.0, 50.0),
            diamond_floor: (140.0, 80.0),
            ellipse_floor: (120.0, 60.0),
            min_gap: 60.0,
            max_iterations: 50,
            separation_bias: 1.0,
            lane_width: 30.0,
            lane_free_connections: 2,
            section_padding: 50.0,
            section_floor: (300.0, 200.0),
            default_section_title: "Diagram".to_owned(),
        }
    }
}

impl LayoutPolicy {
    /// Minimum `(width, height)` for a kind regardless of its label.
    pub fn floor(&self, kind: ShapeKind) -> (f64, f64) {
        match kind {
            ShapeKind::Rectangle => self.rectangle_floor,
            ShapeKind::Diamond => self.diamond_floor,
            ShapeKind::Ellipse => self.ellipse_floor,
        }
    }

    pub fn with_min_gap(mut self, min_gap: f64) -> Self {
        self.min_gap = min_gap;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}
