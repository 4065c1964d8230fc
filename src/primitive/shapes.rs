use crate::primitive::{
    mesh::{MeshData, MeshError, VertexAttribute, VertexLayout},
    vector::Vector,
    Normal, Position, TexCoord,
};

/// A square terrain chunk: `size` x `size` cells on the XZ plane,
/// `cell` world units each.
#[derive(Debug, Clone, Copy)]
pub struct Grid {
    pub size: u32,
    pub cell: f32,
}

impl Grid {
    pub fn new(size: u32, cell: f32) -> Self {
        Self { size, cell }
    }
}

impl Default for Grid {
    /// A 16 x 16 chunk of unit cells.
    fn default() -> Self {
        Self::new(16, 1.0)
    }
}

impl TryFrom<Grid> for MeshData {
    type Error = MeshError;

    fn try_from(value: Grid) -> Result<Self, Self::Error> {
        create_grid_mesh(value, Vector::<f32, 3>::zeros())
    }
}

/// Builds the interleaved position/normal/uv mesh of `grid`, centered at
/// `center`: (size + 1)^2 vertices and size^2 * 2 CCW triangles.
pub fn create_grid_mesh(grid: Grid, center: Vector<f32, 3>) -> Result<MeshData, MeshError> {
    let layout = VertexLayout::new(&[
        VertexAttribute::float32x3(), // position
        VertexAttribute::float32x3(), // normal
        VertexAttribute::float32x2(), // tex coords
    ])?;

    let size = grid.size as usize;
    let side = size + 1;
    let vertex_num = side * side;
    let index_num = size * size * 6;
    let mut data = MeshData::allocate(layout, vertex_num, index_num);

    let half = grid.size as f32 * grid.cell * 0.5;
    let normal = Normal::new(0.0, 1.0, 0.0);
    for row in 0..side {
        for col in 0..side {
            let pos = Position::new(
                col as f32 * grid.cell - half + center.x(),
                center.y(),
                row as f32 * grid.cell - half + center.z(),
            );
            let uv = TexCoord::new(
                col as f32 / grid.size as f32,
                row as f32 / grid.size as f32,
            );
            let vertex = row * side + col;
            data.write_f32s(vertex, 0, &pos.0)?;
            data.write_f32s(vertex, 1, &normal.0)?;
            data.write_f32s(vertex, 2, &uv.0)?;
        }
    }

    let indices = data.indices_mut();
    for row in 0..size {
        for col in 0..size {
            let v0 = (row * side + col) as u32;
            let v1 = v0 + 1;
            let v2 = v0 + side as u32;
            let v3 = v2 + 1;
            let quad = (row * size + col) * 6;
            indices[quad..quad + 6].copy_from_slice(&[v0, v1, v2, v2, v1, v3]);
        }
    }

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_counts() {
        let data = MeshData::try_from(Grid::default()).unwrap();
        assert_eq!(17 * 17, data.vertex_num());
        assert_eq!(16 * 16 * 6, data.index_num());
        assert_eq!(32, data.layout().stride());
    }

    #[test]
    fn test_grid_indices_in_range() {
        let data = MeshData::try_from(Grid::new(4, 2.0)).unwrap();
        let max = data.vertex_num() as u32;
        assert!(data.indices().iter().all(|&i| i < max));
    }

    #[test]
    fn test_grid_is_centered() {
        let grid = Grid::new(2, 1.0);
        let data = create_grid_mesh(grid, Vector::<f32, 3>::zeros()).unwrap();
        // Corners sit at +-half the chunk extent, flat in y.
        assert_eq!(data.read_f32s(0, 0).unwrap(), [-1.0, 0.0, -1.0]);
        let last = data.vertex_num() - 1;
        assert_eq!(data.read_f32s(last, 0).unwrap(), [1.0, 0.0, 1.0]);
        // All normals point up.
        for v in 0..data.vertex_num() {
            assert_eq!(data.read_f32s(v, 1).unwrap(), [0.0, 1.0, 0.0]);
        }
    }

    #[test]
    fn test_grid_uv_spans_unit_square() {
        let data = MeshData::try_from(Grid::new(4, 0.5)).unwrap();
        assert_eq!(data.read_f32s(0, 2).unwrap(), [0.0, 0.0]);
        let last = data.vertex_num() - 1;
        assert_eq!(data.read_f32s(last, 2).unwrap(), [1.0, 1.0]);
    }
}
