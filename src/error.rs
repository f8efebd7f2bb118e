//! Pipeline failure taxonomy. None of these abort rendering; every variant
//! degrades to a visible-but-degraded view.

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by the graph view pipeline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// Network or parse failure reaching or reading the data source.
	#[error("graph fetch failed: {message}")]
	Fetch { message: String },

	/// The data source answered with a non-2xx status.
	#[error("graph endpoint returned HTTP {status}")]
	Status { status: u16 },

	/// The layout engine rejected or returned unusable output.
	#[error("layout engine failed: {message}")]
	Layout { message: String },
}
