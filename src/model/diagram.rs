// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Boardwright-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Boardwright and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use super::connection::Connection;
use super::section::Section;
use super::shape::Shape;

/// A diagram as exchanged with the agent and the plugin.
///
/// Field order is part of the wire contract: the plugin applies changes incrementally, so
/// shapes and connections must be serialized before the enclosing section. Otherwise the
/// container is created first and clips the children added afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Diagram {
    #[serde(default)]
    pub shapes: Vec<Shape>,
    #[serde(default)]
    pub connections: Vec<Connection>,
    #[serde(default, deserialize_with = "lenient_sections")]
    #[schemars(with = "Vec<Section>")]
    pub sections: Vec<Section>,
}

impl Diagram {
    pub fn new(shapes: Vec<Shape>, connections: Vec<Connection>) -> Self {
        Self { shapes, connections, sections: Vec::new() }
    }

    pub fn shape(&self, id: &str) -> Option<&Shape> {
        self.shapes.iter().find(|shape| shape.id == id)
    }

    pub fn section(&self) -> Option<&Section> {
        self.sections.first()
    }
}

// Caller-supplied sections are discarded by repair, so malformed ones are dropped here instead
// of failing the whole request.
fn lenient_sections<'de, D>(deserializer: D) -> Result<Vec<Section>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Array(items) = raw else {
        return Ok(Vec::new());
    };
    Ok(items.into_iter().filter_map(|item| serde_json::from_value(item).ok()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Shape;

    #[test]
    fn serializes_shapes_before_connections_before_sections() {
        let mut diagram = Diagram::new(
            vec![Shape::new("a", "A")],
            vec![Connection::new("a", "a")],
        );
        diagram.sections.push(Section {
            name: "Frame".to_owned(),
            x: 0.0,
            y: 0.0,
            width: 10.0,
            height: 10.0,
        });

        let json = serde_json::to_string(&diagram).expect("serialize");
        let shapes = json.find("\"shapes\"").expect("shapes");
        let connections = json.find("\"connections\"").expect("connections");
        let sections = json.find("\"sections\"").expect("sections");
        assert!(shapes < connections && connections < sections, "{json}");
    }

    #[test]
    fn tolerates_missing_fields_and_malformed_sections() {
        let diagram: Diagram = serde_json::from_str(r#"{"sections":"nope"}"#).expect("diagram");
        assert!(diagram.shapes.is_empty());
        assert!(diagram.sections.is_empty());

        let diagram: Diagram = serde_json::from_str(
            r#"{"shapes":[{"id":"a"}],"sections":[{"name":"ok"},{"name":7}]}"#,
        )
        .expect("diagram");
        assert_eq!(diagram.shapes.len(), 1);
        assert_eq!(diagram.sections.len(), 1);
        assert_eq!(diagram.sections[0].name, "ok");
    }
}
