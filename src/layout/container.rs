// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boardwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boardwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{Section, Shape};

use super::geometry::Rect;
use super::policy::LayoutPolicy;

/// The single section enclosing every shape plus `section_padding`, at least
/// `section_floor` in size. Returns `None` when there is nothing to enclose.
pub fn enclosing_section(shapes: &[Shape], title: &str, policy: &LayoutPolicy) -> Option<Section> {
    let bounds = shapes
        .iter()
        .map(Rect::of)
        .reduce(|acc, rect| acc.union(&rect))?;

    let padding = policy.section_padding;
    let (floor_width, floor_height) = policy.section_floor;
    Some(Section {
        name: title.to_owned(),
        x: bounds.left() - padding,
        y: bounds.top() - padding,
        width: (bounds.width + 2.0 * padding).max(floor_width),
        height: (bounds.height + 2.0 * padding).max(floor_height),
    })
}
