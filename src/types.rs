//! Various types shared by the conversion stages.

/// The vertex id type.
///
/// Vertex ids double as indices into the label vector.
pub type VId = usize;

/// A directed edge `(src, dst)`.
pub type Edge = (VId, VId);
