use serde::{Deserialize, Serialize};

/// Graph as delivered by the data source, before any rendering
/// transformation. Missing arrays deserialize as empty so a degenerate body
/// yields an empty model instead of a hard parse error.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawGraph {
	#[serde(default)]
	pub nodes: Vec<RawNode>,
	#[serde(default)]
	pub edges: Vec<RawEdge>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RawNode {
	/// Unique package import path; doubles as the render-model identifier.
	#[serde(rename = "Name")]
	pub name: String,
	/// Package origin reported by the backend: "loc", "std" or "ext".
	#[serde(rename = "Type")]
	pub kind: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RawEdge {
	#[serde(rename = "From")]
	pub from: String,
	#[serde(rename = "To")]
	pub to: String,
}

/// 2D coordinate assigned to a node, either the stacked default or the
/// engine-computed placement.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Position {
	pub x: f64,
	pub y: f64,
}

/// Payload the rendering surface shows inside a node.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NodeData {
	pub label: String,
	pub kind: String,
}

/// Side of a node where edges attach.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnchorSide {
	Left,
	Right,
	Top,
	Bottom,
}

/// Node record in the shape the rendering surface consumes.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowNode {
	pub id: String,
	pub data: NodeData,
	pub position: Position,
	pub width: f64,
	pub height: f64,
	pub draggable: bool,
	pub deletable: bool,
	pub target_position: AnchorSide,
	pub source_position: AnchorSide,
}

/// Arrow terminating an edge at its target.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ArrowMarker {
	#[serde(rename = "type")]
	pub kind: String,
	pub width: f64,
	pub height: f64,
}

impl ArrowMarker {
	pub fn arrow() -> Self {
		Self {
			kind: "arrow".into(),
			width: 24.0,
			height: 24.0,
		}
	}
}

/// Edge record in the shape the rendering surface consumes.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowEdge {
	pub id: String,
	pub source: String,
	pub target: String,
	pub deletable: bool,
	pub reconnectable: bool,
	pub marker_end: ArrowMarker,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn raw_graph_uses_backend_field_casing() {
		let raw: RawGraph = serde_json::from_str(
			r#"{"nodes":[{"Name":"example.com/app","Type":"loc"}],"edges":[{"From":"example.com/app","To":"fmt"}]}"#,
		)
		.unwrap();
		assert_eq!(raw.nodes[0].name, "example.com/app");
		assert_eq!(raw.nodes[0].kind, "loc");
		assert_eq!(raw.edges[0].from, "example.com/app");
		assert_eq!(raw.edges[0].to, "fmt");
	}

	#[test]
	fn missing_arrays_deserialize_as_empty() {
		let raw: RawGraph = serde_json::from_str("{}").unwrap();
		assert!(raw.nodes.is_empty());
		assert!(raw.edges.is_empty());
	}

	#[test]
	fn flow_node_serializes_to_the_surface_contract() {
		let node = FlowNode {
			id: "fmt".into(),
			data: NodeData {
				label: "fmt".into(),
				kind: "std".into(),
			},
			position: Position { x: 100.0, y: 0.0 },
			width: 150.0,
			height: 40.0,
			draggable: false,
			deletable: false,
			target_position: AnchorSide::Left,
			source_position: AnchorSide::Right,
		};
		let value = serde_json::to_value(&node).unwrap();
		assert_eq!(value["data"]["label"], "fmt");
		assert_eq!(value["position"]["x"], 100.0);
		assert_eq!(value["targetPosition"], "left");
		assert_eq!(value["sourcePosition"], "right");
		assert_eq!(value["draggable"], false);
	}

	#[test]
	fn flow_edge_serializes_its_arrow_marker() {
		let edge = FlowEdge {
			id: "a-b".into(),
			source: "a".into(),
			target: "b".into(),
			deletable: false,
			reconnectable: false,
			marker_end: ArrowMarker::arrow(),
		};
		let value = serde_json::to_value(&edge).unwrap();
		assert_eq!(value["markerEnd"]["type"], "arrow");
		assert_eq!(value["markerEnd"]["width"], 24.0);
		assert_eq!(value["reconnectable"], false);
	}
}
