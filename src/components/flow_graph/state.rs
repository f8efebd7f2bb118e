use log::{debug, error, warn};

use crate::error::Error;

use super::build::build_graph;
use super::types::{FlowEdge, FlowNode, RawGraph};

/// Owner of the committed graph view state.
///
/// All committed mutations go through the methods below. The rendering
/// surface keeps its own transient interaction state (pan, zoom, drags) and
/// never writes back into this model, so the controller stays the single
/// writer of graph structure.
///
/// Layout results are tagged with the generation returned by
/// [`commit_raw`](Self::commit_raw); a result presenting a superseded tag is
/// discarded, which keeps "latest request wins" ordering without cancelling
/// in-flight work.
#[derive(Debug, Default)]
pub struct ViewController {
	raw: Option<RawGraph>,
	nodes: Vec<FlowNode>,
	edges: Vec<FlowEdge>,
	loading: bool,
	generation: u64,
	laid_out: bool,
}

impl ViewController {
	pub fn new() -> Self {
		Self::default()
	}

	/// Enter the loading state for a new fetch attempt.
	pub fn begin_fetch(&mut self) {
		self.loading = true;
	}

	/// Commit a freshly fetched raw graph and derive the pre-layout render
	/// model from it. Returns the generation tag identifying this snapshot;
	/// a later [`commit_layout`](Self::commit_layout) must present the same
	/// tag to be applied.
	pub fn commit_raw(&mut self, raw: RawGraph) -> u64 {
		let (nodes, edges) = build_graph(&raw);
		if nodes.is_empty() {
			warn!("fetched graph contains no nodes; rendering an empty diagram");
		}
		self.raw = Some(raw);
		self.nodes = nodes;
		self.edges = edges;
		self.laid_out = false;
		self.generation += 1;
		self.generation
	}

	/// Record a failed fetch attempt. Terminal for the attempt: the view
	/// stays empty and the failure is logged for diagnostics only.
	pub fn fetch_failed(&mut self, err: &Error) {
		error!("graph fetch failed: {err}");
	}

	/// Leave the loading state. Runs on success and failure alike.
	pub fn finish_loading(&mut self) {
		self.loading = false;
	}

	/// Apply a computed layout, but only if it belongs to the most recently
	/// committed raw snapshot. Returns whether the result was applied.
	pub fn commit_layout(
		&mut self,
		generation: u64,
		nodes: Vec<FlowNode>,
		edges: Vec<FlowEdge>,
	) -> bool {
		if generation != self.generation {
			debug!(
				"discarding stale layout result (generation {generation}, current {})",
				self.generation
			);
			return false;
		}
		self.nodes = nodes;
		self.edges = edges;
		self.laid_out = true;
		true
	}

	pub fn loading(&self) -> bool {
		self.loading
	}

	/// Tag of the most recently committed raw snapshot.
	pub fn generation(&self) -> u64 {
		self.generation
	}

	/// Whether a raw snapshot has been committed at all.
	pub fn has_model(&self) -> bool {
		self.raw.is_some()
	}

	/// Whether the current snapshot has engine-assigned geometry.
	pub fn laid_out(&self) -> bool {
		self.laid_out
	}

	pub fn nodes(&self) -> &[FlowNode] {
		&self.nodes
	}

	pub fn edges(&self) -> &[FlowEdge] {
		&self.edges
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::flow_graph::types::{Position, RawEdge, RawNode};

	fn raw(names: &[&str]) -> RawGraph {
		RawGraph {
			nodes: names
				.iter()
				.map(|name| RawNode {
					name: (*name).into(),
					kind: "loc".into(),
				})
				.collect(),
			edges: if names.len() > 1 {
				vec![RawEdge {
					from: names[0].into(),
					to: names[1].into(),
				}]
			} else {
				Vec::new()
			},
		}
	}

	fn placed(controller: &ViewController, x: f64) -> (Vec<FlowNode>, Vec<FlowEdge>) {
		let mut nodes = controller.nodes().to_vec();
		for node in &mut nodes {
			node.position = Position { x, y: 0.0 };
		}
		(nodes, controller.edges().to_vec())
	}

	#[test]
	fn commit_raw_derives_the_model_and_bumps_the_generation() {
		let mut controller = ViewController::new();
		controller.begin_fetch();
		assert!(controller.loading());
		assert!(!controller.has_model());

		let generation = controller.commit_raw(raw(&["a", "b"]));
		controller.finish_loading();

		assert_eq!(generation, 1);
		assert!(controller.has_model());
		assert!(!controller.laid_out());
		assert!(!controller.loading());
		assert_eq!(controller.nodes().len(), 2);
		assert_eq!(controller.edges().len(), 1);
	}

	#[test]
	fn current_generation_layout_is_applied() {
		let mut controller = ViewController::new();
		let generation = controller.commit_raw(raw(&["a", "b"]));
		let (nodes, edges) = placed(&controller, 42.0);

		assert!(controller.commit_layout(generation, nodes, edges));
		assert!(controller.laid_out());
		assert_eq!(controller.nodes()[0].position.x, 42.0);
	}

	#[test]
	fn stale_layout_results_are_discarded() {
		let mut controller = ViewController::new();
		let old_generation = controller.commit_raw(raw(&["a", "b"]));
		let (old_nodes, old_edges) = placed(&controller, 1.0);

		// new raw model arrives while the first layout is still in flight
		let new_generation = controller.commit_raw(raw(&["a", "b", "c"]));
		let (new_nodes, new_edges) = placed(&controller, 2.0);

		// newer result lands first, older one afterwards
		assert!(controller.commit_layout(new_generation, new_nodes, new_edges));
		assert!(!controller.commit_layout(old_generation, old_nodes, old_edges));

		assert_eq!(controller.nodes().len(), 3);
		assert_eq!(controller.nodes()[0].position.x, 2.0);
		assert!(controller.laid_out());
	}

	#[test]
	fn refetch_supersedes_the_previous_snapshot() {
		let mut controller = ViewController::new();
		let first = controller.commit_raw(raw(&["a"]));
		let second = controller.commit_raw(raw(&["a", "b"]));

		assert_eq!(second, first + 1);
		assert!(!controller.laid_out());
		assert_eq!(controller.nodes().len(), 2);
	}

	#[test]
	fn failed_fetch_leaves_an_empty_view_and_clears_loading() {
		let mut controller = ViewController::new();
		controller.begin_fetch();
		controller.fetch_failed(&Error::Status { status: 500 });
		controller.finish_loading();

		assert!(!controller.loading());
		assert!(!controller.has_model());
		assert!(controller.nodes().is_empty());
		assert!(controller.edges().is_empty());
	}
}
