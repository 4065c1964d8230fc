//! Geometry, vertex layout, and container primitives for a small
//! real-time terrain renderer.
//!
//! Everything here is plain value computation: vector/matrix/quaternion
//! algebra, view and projection builders, a growable store with O(1)
//! unordered removal, and the byte accounting that places declarative
//! vertex attributes into an interleaved GPU buffer. Window and context
//! plumbing, shader compilation, and draw submission live with the
//! callers; this crate only hands them numbers and bytes.

pub mod ds;
pub mod primitive;

// Re-exports the everyday types.
pub use ds::swap_vec::SwapVec;
pub use primitive::{
    camera::{Camera, OrthographicCamera, PerspectiveCamera},
    matrix::{Matrix2f, Matrix3f, Matrix4f},
    mesh::{AttributeFlags, MeshData, MeshError, ScalarKind, VertexAttribute, VertexLayout},
    transform::Transform,
    vector::{Quaternion, Vector},
};

pub mod prelude {
    pub use crate::ds::prelude::*;
    pub use crate::primitive::prelude::*;
}
