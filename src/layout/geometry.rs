// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boardwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boardwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Axis-aligned rectangles, the gap-aware overlap test, and label size estimation.

use crate::model::Shape;

use super::policy::LayoutPolicy;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn of(shape: &Shape) -> Self {
        Self::new(shape.x, shape.y, shape.width, shape.height)
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Smallest rectangle covering both.
    pub fn union(&self, other: &Rect) -> Rect {
        let left = self.left().min(other.left());
        let top = self.top().min(other.top());
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(left, top, right - left, bottom - top)
    }

    /// True unless the two rectangles are separated on some axis by more than `gap`.
    ///
    /// Rectangles exactly `gap` apart still count as overlapping.
    pub fn overlaps_with_gap(&self, other: &Rect, gap: f64) -> bool {
        !(self.right() + gap < other.left()
            || other.right() + gap < self.left()
            || self.bottom() + gap < other.top()
            || other.bottom() + gap < self.top())
    }
}

pub fn shapes_overlap(a: &Shape, b: &Shape, gap: f64) -> bool {
    Rect::of(a).overlaps_with_gap(&Rect::of(b), gap)
}

/// Estimated `(width, height)` a label needs, padding included.
///
/// Width counts at most `label_length_cap` characters of the longest line; characters beyond
/// the cap wrap onto additional lines, which only grows the height.
pub fn estimate_label_size(text: &str, policy: &LayoutPolicy) -> (f64, f64) {
    let cap = policy.label_length_cap.max(1);
    let mut effective_length = 0usize;
    let mut lines = 0usize;

    for line in text.split('\n') {
        let chars = line.trim_end_matches('\r').chars().count();
        effective_length = effective_length.max(chars.min(cap));
        lines += chars.div_ceil(cap).max(1);
    }

    let width = effective_length as f64 * policy.char_width + policy.horizontal_padding;
    let height = lines as f64 * policy.line_height + policy.vertical_padding;
    (width, height)
}
