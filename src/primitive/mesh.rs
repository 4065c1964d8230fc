use smallvec::SmallVec;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    #[error("unsupported vertex attribute at index {index}: {count} components")]
    UnsupportedAttribute { index: usize, count: u32 },

    #[error("vertex layout has no attributes")]
    EmptyLayout,

    #[error("attribute index {0} out of range")]
    NoSuchAttribute(usize),

    #[error("vertex index {0} out of range")]
    NoSuchVertex(usize),

    #[error("got {given} components for an attribute of {expected}")]
    ComponentMismatch { given: usize, expected: usize },

    #[error("attribute holds {held:?}, not {written:?}")]
    KindMismatch { held: ScalarKind, written: ScalarKind },
}

/// Scalar type of one vertex attribute component.
///
/// A closed set: a descriptor can only ever name a kind the byte
/// accounting below understands, so a layout cannot silently come out
/// short.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    Float32,
    Sint32,
    Uint32,
}

impl ScalarKind {
    /// Byte size of one component.
    #[inline]
    pub const fn byte_size(self) -> usize {
        match self {
            Self::Float32 => std::mem::size_of::<f32>(),
            Self::Sint32 => std::mem::size_of::<i32>(),
            Self::Uint32 => std::mem::size_of::<u32>(),
        }
    }
}

bitflags::bitflags! {
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AttributeFlags: u8 {
        /// Fixed-point data the GPU should remap to [0, 1] / [-1, 1].
        const NORMALIZED = 1 << 0;

        /// Data stays integer-typed in the shader instead of being
        /// converted to float.
        const INTEGER = 1 << 1;
    }
}

/// One entry of a vertex layout: component count, scalar kind, and
/// binding flags. Plain data; the byte accounting happens in
/// [`VertexLayout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    pub count: u32,
    pub kind: ScalarKind,
    pub flags: AttributeFlags,
}

impl VertexAttribute {
    #[inline]
    pub const fn new(count: u32, kind: ScalarKind, flags: AttributeFlags) -> Self {
        Self { count, kind, flags }
    }

    #[inline]
    pub const fn float32x2() -> Self {
        Self::new(2, ScalarKind::Float32, AttributeFlags::empty())
    }

    #[inline]
    pub const fn float32x3() -> Self {
        Self::new(3, ScalarKind::Float32, AttributeFlags::empty())
    }

    #[inline]
    pub const fn float32x4() -> Self {
        Self::new(4, ScalarKind::Float32, AttributeFlags::empty())
    }

    #[inline]
    pub const fn sint32x4() -> Self {
        Self::new(4, ScalarKind::Sint32, AttributeFlags::INTEGER)
    }

    #[inline]
    pub const fn uint32x4() -> Self {
        Self::new(4, ScalarKind::Uint32, AttributeFlags::INTEGER)
    }

    /// Byte size of the whole attribute.
    #[inline]
    pub const fn byte_size(&self) -> usize {
        self.count as usize * self.kind.byte_size()
    }
}

/// Byte placement of an ordered attribute list inside one vertex record:
/// per-attribute offsets (prefix sums, first is 0) and the total stride.
///
/// Computed once per mesh definition and immutable afterward; the
/// buffer-binding collaborator reads the numbers out, nothing more.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexLayout {
    attrs: SmallVec<[VertexAttribute; 8]>,
    offsets: SmallVec<[usize; 8]>,
    stride: usize,
}

impl VertexLayout {
    /// Lays out `attrs` in order.
    ///
    /// Component counts outside 1..=4 and an empty list are rejected
    /// rather than folded into the stride.
    pub fn new(attrs: &[VertexAttribute]) -> Result<Self, MeshError> {
        if attrs.is_empty() {
            return Err(MeshError::EmptyLayout);
        }

        let mut offsets = SmallVec::new();
        let mut stride = 0;
        for (index, attr) in attrs.iter().enumerate() {
            if attr.count == 0 || attr.count > 4 {
                return Err(MeshError::UnsupportedAttribute {
                    index,
                    count: attr.count,
                });
            }
            if attr.kind == ScalarKind::Float32
                && attr.flags.contains(AttributeFlags::INTEGER)
            {
                log::warn!(
                    "attribute {index} asks for integer storage of Float32 data; \
                     the binding collaborator will likely reject it"
                );
            }
            offsets.push(stride);
            stride += attr.byte_size();
        }

        Ok(Self {
            attrs: SmallVec::from_slice(attrs),
            offsets,
            stride,
        })
    }

    /// Byte size of one vertex record.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Byte offset of attribute `index` inside a vertex record.
    #[inline]
    pub fn offset(&self, index: usize) -> Option<usize> {
        self.offsets.get(index).copied()
    }

    #[inline]
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    #[inline]
    pub fn attr(&self, index: usize) -> Option<&VertexAttribute> {
        self.attrs.get(index)
    }

    #[inline]
    pub fn attrs(&self) -> &[VertexAttribute] {
        &self.attrs
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
}

/// CPU-side mesh: an interleaved vertex byte buffer sized by a
/// [`VertexLayout`], plus a triangle index list. The GPU-binding
/// collaborator consumes the byte views; this type never talks to a
/// graphics API.
#[derive(Debug, Clone)]
pub struct MeshData {
    layout: VertexLayout,
    vertex_bytes: Vec<u8>,
    vertex_num: usize,
    indices: Vec<u32>,
}

impl MeshData {
    /// Allocates zeroed storage for `vertex_num` vertices and
    /// `index_num` indices.
    pub fn allocate(layout: VertexLayout, vertex_num: usize, index_num: usize) -> Self {
        let vertex_bytes = vec![0; layout.stride() * vertex_num];
        Self {
            layout,
            vertex_bytes,
            vertex_num,
            indices: vec![0; index_num],
        }
    }

    #[inline]
    pub fn layout(&self) -> &VertexLayout {
        &self.layout
    }

    #[inline]
    pub fn vertex_num(&self) -> usize {
        self.vertex_num
    }

    #[inline]
    pub fn index_num(&self) -> usize {
        self.indices.len()
    }

    /// Interleaved vertex data, `vertex_num * stride` bytes.
    #[inline]
    pub fn vertex_bytes(&self) -> &[u8] {
        &self.vertex_bytes
    }

    #[inline]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    #[inline]
    pub fn indices_mut(&mut self) -> &mut [u32] {
        &mut self.indices
    }

    /// Writes float components of attribute `attr` of vertex `vertex`.
    pub fn write_f32s(
        &mut self,
        vertex: usize,
        attr: usize,
        values: &[f32],
    ) -> Result<(), MeshError> {
        self.write_components(vertex, attr, ScalarKind::Float32, bytemuck::cast_slice(values))
    }

    /// Writes signed integer components of attribute `attr` of vertex
    /// `vertex`.
    pub fn write_i32s(
        &mut self,
        vertex: usize,
        attr: usize,
        values: &[i32],
    ) -> Result<(), MeshError> {
        self.write_components(vertex, attr, ScalarKind::Sint32, bytemuck::cast_slice(values))
    }

    /// Writes unsigned integer components of attribute `attr` of vertex
    /// `vertex`.
    pub fn write_u32s(
        &mut self,
        vertex: usize,
        attr: usize,
        values: &[u32],
    ) -> Result<(), MeshError> {
        self.write_components(vertex, attr, ScalarKind::Uint32, bytemuck::cast_slice(values))
    }

    /// Reads float components of attribute `attr` of vertex `vertex`.
    ///
    /// Copies out of the byte buffer: interleaved attributes have no
    /// alignment guarantee, so the components cannot be lent as `&[f32]`.
    pub fn read_f32s(&self, vertex: usize, attr: usize) -> Result<Vec<f32>, MeshError> {
        let range = self.component_range(vertex, attr, ScalarKind::Float32, None)?;
        Ok(self.vertex_bytes[range]
            .chunks_exact(ScalarKind::Float32.byte_size())
            .map(bytemuck::pod_read_unaligned)
            .collect())
    }

    fn write_components(
        &mut self,
        vertex: usize,
        attr: usize,
        kind: ScalarKind,
        bytes: &[u8],
    ) -> Result<(), MeshError> {
        let range = self.component_range(vertex, attr, kind, Some(bytes.len()))?;
        self.vertex_bytes[range].copy_from_slice(bytes);
        Ok(())
    }

    fn component_range(
        &self,
        vertex: usize,
        attr: usize,
        kind: ScalarKind,
        written_len: Option<usize>,
    ) -> Result<std::ops::Range<usize>, MeshError> {
        let desc = *self
            .layout
            .attr(attr)
            .ok_or(MeshError::NoSuchAttribute(attr))?;
        if vertex >= self.vertex_num {
            return Err(MeshError::NoSuchVertex(vertex));
        }
        if desc.kind != kind {
            return Err(MeshError::KindMismatch {
                held: desc.kind,
                written: kind,
            });
        }
        if let Some(len) = written_len {
            if len != desc.byte_size() {
                return Err(MeshError::ComponentMismatch {
                    given: len / desc.kind.byte_size(),
                    expected: desc.count as usize,
                });
            }
        }
        // Unwrap is fine: attr() above validated the index.
        let start = vertex * self.layout.stride() + self.layout.offset(attr).unwrap();
        Ok(start..start + desc.byte_size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos_normal_uv() -> VertexLayout {
        VertexLayout::new(&[
            VertexAttribute::float32x3(),
            VertexAttribute::float32x3(),
            VertexAttribute::float32x2(),
        ])
        .unwrap()
    }

    #[test]
    fn test_stride_and_offsets() {
        let layout = pos_normal_uv();
        assert_eq!(32, layout.stride());
        assert_eq!(&[0, 12, 24], layout.offsets());
        assert_eq!(Some(24), layout.offset(2));
        assert_eq!(None, layout.offset(3));
    }

    #[test]
    fn test_mixed_kind_stride() {
        let layout = VertexLayout::new(&[
            VertexAttribute::float32x4(),
            VertexAttribute::uint32x4(),
            VertexAttribute::new(1, ScalarKind::Sint32, AttributeFlags::INTEGER),
        ])
        .unwrap();
        assert_eq!(16 + 16 + 4, layout.stride());
        assert_eq!(&[0, 16, 32], layout.offsets());
    }

    #[test]
    fn test_empty_layout_rejected() {
        assert_eq!(Err(MeshError::EmptyLayout), VertexLayout::new(&[]));
    }

    #[test]
    fn test_bad_component_count_rejected() {
        let bad = VertexAttribute::new(5, ScalarKind::Float32, AttributeFlags::empty());
        assert_eq!(
            Err(MeshError::UnsupportedAttribute { index: 1, count: 5 }),
            VertexLayout::new(&[VertexAttribute::float32x3(), bad])
        );
        let zero = VertexAttribute::new(0, ScalarKind::Uint32, AttributeFlags::empty());
        assert_eq!(
            Err(MeshError::UnsupportedAttribute { index: 0, count: 0 }),
            VertexLayout::new(&[zero])
        );
    }

    #[test]
    fn test_mesh_data_round_trip() {
        let mut data = MeshData::allocate(pos_normal_uv(), 4, 6);
        data.write_f32s(2, 0, &[1.0, 2.0, 3.0]).unwrap();
        data.write_f32s(2, 2, &[0.25, 0.75]).unwrap();
        assert_eq!(data.read_f32s(2, 0).unwrap(), [1.0, 2.0, 3.0]);
        assert_eq!(data.read_f32s(2, 2).unwrap(), [0.25, 0.75]);
        // Untouched attribute stays zeroed.
        assert_eq!(data.read_f32s(2, 1).unwrap(), [0.0, 0.0, 0.0]);
        assert_eq!(4 * 32, data.vertex_bytes().len());
        assert_eq!(6 * 4, data.index_bytes().len());
    }

    #[test]
    fn test_mesh_data_write_errors() {
        let mut data = MeshData::allocate(pos_normal_uv(), 2, 0);
        assert_eq!(
            Err(MeshError::NoSuchVertex(2)),
            data.write_f32s(2, 0, &[0.0, 0.0, 0.0])
        );
        assert_eq!(
            Err(MeshError::NoSuchAttribute(3)),
            data.write_f32s(0, 3, &[0.0])
        );
        assert_eq!(
            Err(MeshError::ComponentMismatch {
                given: 2,
                expected: 3
            }),
            data.write_f32s(0, 0, &[0.0, 0.0])
        );
        assert_eq!(
            Err(MeshError::KindMismatch {
                held: ScalarKind::Float32,
                written: ScalarKind::Uint32,
            }),
            data.write_u32s(0, 0, &[0, 0, 0])
        );
    }

    #[test]
    fn test_indices_view() {
        let mut data = MeshData::allocate(pos_normal_uv(), 3, 3);
        data.indices_mut().copy_from_slice(&[0, 1, 2]);
        assert_eq!(&[0, 1, 2], data.indices());
        assert_eq!(12, data.index_bytes().len());
    }
}
