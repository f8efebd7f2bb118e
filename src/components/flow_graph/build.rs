use std::collections::HashSet;

use super::types::{AnchorSide, ArrowMarker, FlowEdge, FlowNode, NodeData, Position, RawGraph};

pub const NODE_MIN_WIDTH: f64 = 150.0;
pub const NODE_HEIGHT: f64 = 40.0;

const LABEL_CHAR_WIDTH: f64 = 9.0;
const LABEL_PADDING: f64 = 24.0;

/// Convert a fetched [`RawGraph`] into the node and edge records the
/// rendering surface consumes.
///
/// Nodes start on a vertical stack of default positions until the layout
/// engine places them. Edge ids are `"{from}-{to}"`, so duplicate pairs
/// collide; the first occurrence wins and later duplicates are dropped.
/// Edges referencing unknown node names pass through untouched — the
/// surface simply won't draw them.
pub fn build_graph(raw: &RawGraph) -> (Vec<FlowNode>, Vec<FlowEdge>) {
	let nodes = raw
		.nodes
		.iter()
		.enumerate()
		.map(|(idx, node)| FlowNode {
			id: node.name.clone(),
			data: NodeData {
				label: node.name.clone(),
				kind: node.kind.clone(),
			},
			position: Position {
				x: 100.0,
				y: 100.0 * idx as f64,
			},
			width: node_width(&node.name),
			height: NODE_HEIGHT,
			draggable: false,
			deletable: false,
			target_position: AnchorSide::Left,
			source_position: AnchorSide::Right,
		})
		.collect();

	let mut seen = HashSet::new();
	let edges = raw
		.edges
		.iter()
		.filter_map(|edge| {
			let id = format!("{}-{}", edge.from, edge.to);
			if !seen.insert(id.clone()) {
				return None;
			}
			Some(FlowEdge {
				id,
				source: edge.from.clone(),
				target: edge.to.clone(),
				deletable: false,
				reconnectable: false,
				marker_end: ArrowMarker::arrow(),
			})
		})
		.collect();

	(nodes, edges)
}

// Labels are not measured before first paint; the width is derived from the
// label length so layout has stable bounding boxes up front.
fn node_width(label: &str) -> f64 {
	(label.chars().count() as f64 * LABEL_CHAR_WIDTH + LABEL_PADDING).max(NODE_MIN_WIDTH)
}
