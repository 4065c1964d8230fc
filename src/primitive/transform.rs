use crate::primitive::{
    matrix::Matrix4f,
    vector::{Quaternion, Vector},
};

bitflags::bitflags! {
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TransformDirty: u8 {
        /// Translation has changed.
        const TRANSLATE = 1 << 0;

        /// Rotation has changed.
        const ROTATE = 1 << 1;

        /// Scale has changed.
        const SCALE = 1 << 2;
    }
}

impl TransformDirty {
    /// Resets all bits.
    #[inline]
    pub fn clear(&mut self) {
        *self = Self::empty();
    }
}

/// Translation, rotation, and scale with a lazily rebuilt matrix.
///
/// Mutators only mark what changed; [`Transform::update`] rewrites the
/// affected blocks of the cached matrix.
#[derive(Debug, Clone)]
pub struct Transform {
    translation: Vector<f32, 3>,
    rotation: Quaternion,
    scale: Vector<f32, 3>,
    matrix: Matrix4f,
    dirty: TransformDirty,
}

impl Transform {
    #[inline]
    pub fn translate(&mut self, x: f32, y: f32, z: f32) {
        self.translation.set(x, y, z);
        self.dirty |= TransformDirty::TRANSLATE;
    }

    /// Rotation of `angle` radians around `axis`.
    ///
    /// # Panics
    ///
    /// In debug mode only, panics if `axis` is not a unit vector.
    #[inline]
    pub fn rotate(&mut self, axis: Vector<f32, 3>, angle: f32) {
        self.rotation = Quaternion::from_axis_angle(axis, angle);
        self.dirty |= TransformDirty::ROTATE;
    }

    #[inline]
    pub fn set_rotation(&mut self, rotation: Quaternion) {
        self.rotation = rotation;
        self.dirty |= TransformDirty::ROTATE;
    }

    #[inline]
    pub fn rescale(&mut self, x: f32, y: f32, z: f32) {
        self.scale.set(x, y, z);
        self.dirty |= TransformDirty::SCALE;
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }

    /// The cached matrix. Stale if [`Transform::is_dirty`]; call
    /// [`Transform::update`] first.
    #[inline]
    pub fn matrix(&self) -> &Matrix4f {
        &self.matrix
    }

    /// Rebuilds the stale parts of the matrix and clears the dirty set.
    pub fn update(&mut self) {
        const DIRTY_RS: TransformDirty = TransformDirty::ROTATE.union(TransformDirty::SCALE);

        if self.dirty.intersects(DIRTY_RS) {
            let rot = Matrix4f::from_quaternion(&self.rotation);
            for col in 0..3 {
                let s = self.scale[col];
                self.matrix.set_col3(
                    col,
                    rot.get_elem(col, 0) * s,
                    rot.get_elem(col, 1) * s,
                    rot.get_elem(col, 2) * s,
                );
            }
        }

        if self.dirty.contains(TransformDirty::TRANSLATE) {
            self.matrix.set_col3(
                3,
                self.translation.x(),
                self.translation.y(),
                self.translation.z(),
            );
        }

        self.dirty.clear();
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vector::<f32, 3>::zeros(),
            rotation: Quaternion::identity(),
            scale: Vector::<f32, 3>::ones(),
            matrix: Matrix4f::identity(),
            dirty: TransformDirty::empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    type V3 = Vector<f32, 3>;

    #[test]
    fn test_default_is_identity() {
        let tf = Transform::default();
        assert!(!tf.is_dirty());
        assert_eq!(&Matrix4f::identity(), tf.matrix());
    }

    #[test]
    fn test_translate_updates_column() {
        let mut tf = Transform::default();
        tf.translate(1.0, 2.0, 3.0);
        assert!(tf.is_dirty());
        tf.update();
        assert!(!tf.is_dirty());
        let m = tf.matrix();
        assert_eq!(1.0, m.get_elem(3, 0));
        assert_eq!(2.0, m.get_elem(3, 1));
        assert_eq!(3.0, m.get_elem(3, 2));
    }

    #[test]
    fn test_rotate_then_scale_compose() {
        let mut tf = Transform::default();
        tf.rotate(V3::new(0.0, 1.0, 0.0), std::f32::consts::FRAC_PI_2);
        tf.rescale(2.0, 2.0, 2.0);
        tf.update();
        // Quarter turn around y then uniform 2x: +x goes to -2z.
        let v = tf.matrix() * V3::new(1.0, 0.0, 0.0);
        assert!((v.x()).abs() < EPS);
        assert!((v.y()).abs() < EPS);
        assert!((v.z() + 2.0).abs() < EPS);
    }

    #[test]
    fn test_update_keeps_translation_when_rotating() {
        let mut tf = Transform::default();
        tf.translate(5.0, 0.0, 0.0);
        tf.update();
        tf.rotate(V3::new(0.0, 0.0, 1.0), std::f32::consts::PI);
        tf.update();
        let m = tf.matrix();
        assert_eq!(5.0, m.get_elem(3, 0));
    }
}
