//! Layout orchestration: packages the render model into the external
//! engine's request shape and maps the computed coordinates back onto it.

use std::collections::{BTreeMap, HashMap};
use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::types::{FlowEdge, FlowNode, Position};

/// Direction the layered layout flows in.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
	Right,
	Down,
}

impl Direction {
	fn as_str(self) -> &'static str {
		match self {
			Direction::Right => "RIGHT",
			Direction::Down => "DOWN",
		}
	}
}

/// Edge-routing style requested from the engine.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EdgeRouting {
	Orthogonal,
	Polyline,
	Splines,
}

impl EdgeRouting {
	fn as_str(self) -> &'static str {
		match self {
			EdgeRouting::Orthogonal => "ORTHOGONAL",
			EdgeRouting::Polyline => "POLYLINE",
			EdgeRouting::Splines => "SPLINES",
		}
	}
}

/// Direction and spacing knobs forwarded to the layout engine. The engine
/// interprets them; the orchestrator does not.
#[derive(Clone, Debug)]
pub struct LayoutOptions {
	pub direction: Direction,
	pub edge_routing: EdgeRouting,
	/// Spacing between consecutive layers.
	pub layer_spacing: f64,
	/// Spacing between nodes in the same layer.
	pub node_spacing: f64,
	pub edge_spacing: f64,
	pub edge_node_spacing: f64,
}

impl Default for LayoutOptions {
	fn default() -> Self {
		Self {
			direction: Direction::Right,
			edge_routing: EdgeRouting::Orthogonal,
			layer_spacing: 100.0,
			node_spacing: 80.0,
			edge_spacing: 15.0,
			edge_node_spacing: 20.0,
		}
	}
}

impl LayoutOptions {
	/// Render the options into the engine's string-keyed option map.
	pub fn to_engine_options(&self) -> BTreeMap<String, String> {
		let mut options = BTreeMap::new();
		options.insert("elk.algorithm".into(), "layered".into());
		options.insert("elk.direction".into(), self.direction.as_str().into());
		options.insert("elk.edgeRouting".into(), self.edge_routing.as_str().into());
		options.insert(
			"elk.layered.spacing.nodeNodeBetweenLayers".into(),
			self.layer_spacing.to_string(),
		);
		options.insert("elk.spacing.nodeNode".into(), self.node_spacing.to_string());
		options.insert("elk.spacing.edgeEdge".into(), self.edge_spacing.to_string());
		options.insert("elk.spacing.edgeNode".into(), self.edge_node_spacing.to_string());
		options
	}
}

/// Node bounding box handed to the engine.
#[derive(Clone, Debug, Serialize)]
pub struct LayoutChild {
	pub id: String,
	pub width: f64,
	pub height: f64,
}

/// Edge connectivity handed to the engine.
#[derive(Clone, Debug, Serialize)]
pub struct LayoutEdge {
	pub id: String,
	pub sources: Vec<String>,
	pub targets: Vec<String>,
}

/// Graph description in the engine's request shape.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutRequest {
	pub id: String,
	pub layout_options: BTreeMap<String, String>,
	pub children: Vec<LayoutChild>,
	pub edges: Vec<LayoutEdge>,
}

impl LayoutRequest {
	pub fn from_graph(nodes: &[FlowNode], edges: &[FlowEdge], options: &LayoutOptions) -> Self {
		Self {
			id: "root".into(),
			layout_options: options.to_engine_options(),
			children: nodes
				.iter()
				.map(|node| LayoutChild {
					id: node.id.clone(),
					width: node.width,
					height: node.height,
				})
				.collect(),
			edges: edges
				.iter()
				.map(|edge| LayoutEdge {
					id: edge.id.clone(),
					sources: vec![edge.source.clone()],
					targets: vec![edge.target.clone()],
				})
				.collect(),
		}
	}
}

/// Positioned node coming back from the engine. The coordinate pair sits at
/// the top level of each child; routing output and other fields are ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct PlacedChild {
	pub id: String,
	pub x: f64,
	pub y: f64,
}

/// Engine response.
#[derive(Clone, Debug, Deserialize)]
pub struct LayoutResponse {
	pub children: Vec<PlacedChild>,
}

/// Asynchronous layout capability. Anything that can place a described
/// graph can stand in for the real engine.
pub trait LayoutEngine {
	/// Compute coordinates for the request. An error means the engine could
	/// not produce a usable layout.
	fn compute(&self, request: &LayoutRequest) -> impl Future<Output = Result<LayoutResponse>>;
}

/// Run one layout pass over the render model.
///
/// On success every node's `position` is replaced with the engine-assigned
/// coordinate and all other fields pass through unchanged. On failure the
/// input is returned as-is, so a broken layout degrades to an unarranged
/// graph rather than a blank screen.
pub async fn layout_graph<E: LayoutEngine>(
	engine: &E,
	nodes: Vec<FlowNode>,
	edges: Vec<FlowEdge>,
	options: &LayoutOptions,
) -> (Vec<FlowNode>, Vec<FlowEdge>) {
	let request = LayoutRequest::from_graph(&nodes, &edges, options);
	match engine.compute(&request).await {
		Ok(response) => {
			let placed: HashMap<String, Position> = response
				.children
				.into_iter()
				.map(|child| (child.id, Position { x: child.x, y: child.y }))
				.collect();
			let nodes = nodes
				.into_iter()
				.map(|mut node| {
					if let Some(position) = placed.get(&node.id) {
						node.position = position.clone();
					}
					node
				})
				.collect();
			(nodes, edges)
		}
		Err(err) => {
			log::warn!("layout failed, rendering unarranged graph: {err}");
			(nodes, edges)
		}
	}
}
