//! Graph view synchronization pipeline: fetch a raw dependency graph, derive
//! the render model, hand it to the external layered-layout engine, and
//! reconcile the computed geometry back into the live view.

mod build;
mod component;
mod elk;
mod fetch;
mod fit;
mod layout;
mod state;
mod surface;
mod types;

pub use build::build_graph;
pub use component::FlowGraphView;
pub use elk::ElkEngine;
pub use fetch::GraphClient;
pub use fit::FitScheduler;
pub use layout::{
	Direction, EdgeRouting, LayoutChild, LayoutEdge, LayoutEngine, LayoutOptions, LayoutRequest,
	LayoutResponse, PlacedChild, layout_graph,
};
pub use state::ViewController;
pub use surface::{FitOptions, FlowSurface};
pub use types::{AnchorSide, ArrowMarker, FlowEdge, FlowNode, NodeData, Position, RawEdge, RawGraph, RawNode};
