pub mod camera;
pub mod constant;
pub mod matrix;
pub mod mesh;
pub mod shapes;
pub mod transform;
pub mod vector;

pub mod prelude {
    pub use super::{
        camera::{Camera, OrthographicCamera, PerspectiveCamera},
        constant::{angles, degrees, radians},
        matrix::{Matrix2f, Matrix3f, Matrix4f},
        mesh::{MeshData, ScalarKind, VertexAttribute, VertexLayout},
        shapes,
        transform::Transform,
        vector::{Quaternion, Vector},
        Normal, Position, TexCoord,
    };
}

/// Default position type is Vector<f32, 3>.
pub type Position = vector::Vector<f32, 3>;

/// Default normal type is Vector<f32, 3>.
pub type Normal = vector::Vector<f32, 3>;

/// Default texture coordinate type is Vector<f32, 2>.
pub type TexCoord = vector::Vector<f32, 2>;
