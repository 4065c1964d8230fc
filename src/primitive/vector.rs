use std::ops::{Index, IndexMut};

const F32_EPS: f32 = 1e-6;
const I32_EPS: i32 = 1;
const U32_EPS: u32 = 1;

/// Scalar kinds a [`Vector`] can hold: the three 32-bit types a vertex
/// buffer can carry.
pub trait Number:
    Copy
    + PartialEq
    + PartialOrd
    + std::ops::Add<Output = Self>
    + std::ops::Sub<Output = Self>
    + std::ops::Mul<Output = Self>
    + std::ops::Div<Output = Self>
    + std::ops::AddAssign
    + std::ops::DivAssign
    + 'static
{
    fn zero() -> Self;
    fn one() -> Self;
    fn eps() -> Self;
    fn from_f32(v: f32) -> Self;
    fn _sqrt(self) -> Self;
}

impl Number for f32 {
    #[inline]
    fn zero() -> Self {
        0.0
    }

    #[inline]
    fn one() -> Self {
        1.0
    }

    #[inline]
    fn eps() -> Self {
        F32_EPS
    }

    #[inline]
    fn from_f32(v: f32) -> Self {
        v
    }

    #[inline]
    fn _sqrt(self) -> Self {
        self.sqrt()
    }
}

impl Number for i32 {
    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn one() -> Self {
        1
    }

    #[inline]
    fn eps() -> Self {
        I32_EPS
    }

    #[inline]
    fn from_f32(v: f32) -> Self {
        v as Self
    }

    #[inline]
    fn _sqrt(self) -> Self {
        panic!("no sqrt() for i32")
    }
}

impl Number for u32 {
    #[inline]
    fn zero() -> Self {
        0
    }

    #[inline]
    fn one() -> Self {
        1
    }

    #[inline]
    fn eps() -> Self {
        U32_EPS
    }

    #[inline]
    fn from_f32(v: f32) -> Self {
        v as Self
    }

    #[inline]
    fn _sqrt(self) -> Self {
        panic!("no sqrt() for u32")
    }
}

/// A fixed-dimension vector over one of the vertex scalar kinds.
///
/// The array is the canonical storage; the named accessors (`x()`,
/// `set_x()`, ...) are generated on top of it, so name-based and
/// index-based access can never disagree.
#[derive(Debug, PartialEq, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(transparent)]
pub struct Vector<T, const D: usize>(pub [T; D]);

macro_rules! strip_first_op {
    (+ $($tail:tt)+) => {
        $($tail)+
    };
}

macro_rules! impl_vector {
    ($d:tt, $({$field:ident: $index:tt}),+) => {
        impl<T: Number> Vector<T, $d> {
            #[inline]
            pub const fn new($($field: T),+) -> Self {
                Self([$($field),+])
            }

            /// Creates a vector with zeros.
            #[inline]
            pub fn zeros() -> Self {
                T::zero().into()
            }

            /// Creates a vector with ones.
            #[inline]
            pub fn ones() -> Self {
                T::one().into()
            }

            #[inline]
            pub const fn dim() -> usize {
                $d
            }

            $(
                /// Getter
                #[inline]
                pub const fn $field(&self) -> T {
                    self.0[$index]
                }

                paste::item! {
                    /// Setter
                    #[inline]
                    pub fn [<set_ $field>](&mut self, v: T) {
                        self.0[$index] = v;
                    }

                    #[inline]
                    pub fn [<add_ $field>](&mut self, v: T) {
                        self.0[$index] += v;
                    }
                }
            )+

            /// Setter
            #[inline]
            pub fn set(&mut self, $($field: T),+) {
                $(
                    self.0[$index] = $field;
                )+
            }

            #[inline]
            pub fn iter(&self) -> core::slice::Iter<T> {
                self.0.iter()
            }

            #[inline]
            pub fn dot(self, rhs: Self) -> T {
                strip_first_op!(
                    $(+ self.0[$index] * rhs.0[$index])+
                )
            }

            /// Squared L2 norm, `dot(v, v)`.
            #[inline]
            pub fn norm_sq(self) -> T {
                self.dot(self)
            }

            #[inline]
            pub fn norm_l2(&self) -> T {
                self.norm_sq()._sqrt()
            }

            #[inline]
            pub fn is_unit(&self) -> bool {
                let norm = self.norm_l2();
                let diff = match norm > T::one() {
                    true => norm - T::one(),
                    false => T::one() - norm,
                };
                diff < T::eps()
            }

            /// Scales the vector to unit length in place.
            /// A zero vector is left unchanged.
            #[inline]
            pub fn normalize(&mut self) {
                let norm = self.norm_l2();
                match norm != T::zero() {
                    true => {$(self.0[$index] /= norm);+}
                    false => (),
                }
            }

            /// Returns the unit-length copy of the vector.
            /// A zero vector is returned unchanged.
            #[inline]
            #[must_use]
            pub fn into_unit(self) -> Self {
                let norm = self.norm_l2();
                match norm != T::zero() {
                    true => Self::new($(self.0[$index] / norm),+),
                    false => self,
                }
            }
        }

        impl<T: Copy> From<T> for Vector<T, $d> {
            #[inline]
            fn from(value: T) -> Self {
                Self([value; $d])
            }
        }

        impl<T> From<[T; $d]> for Vector<T, $d> {
            #[inline]
            fn from(value: [T; $d]) -> Self {
                Self(value)
            }
        }

        macro_rules! impl_op {
            ($trait:ident, $fname:ident, $op:tt) => {
                impl<T> std::ops::$trait for Vector<T, $d>
                where
                    T: std::ops::$trait<Output = T> + Copy
                {
                    type Output = Self;

                    #[inline]
                    #[must_use]
                    fn $fname(self, rhs: Self) -> Self {
                        Self([
                            $(self.0[$index] $op rhs.0[$index]),+
                        ])
                    }
                }

                impl<'a, 'b, T> std::ops::$trait<&'b Vector<T, $d>> for &'a Vector<T, $d>
                where
                    T: std::ops::$trait<Output = T> + Copy
                {
                    type Output = Vector<T, $d>;

                    #[inline]
                    #[must_use]
                    fn $fname(self, rhs: &'b Vector<T, $d>) -> Self::Output {
                        Vector::<T, $d>([
                            $(self.0[$index] $op rhs.0[$index]),+
                        ])
                    }
                }

                impl<T> std::ops::$trait<T> for Vector<T, $d>
                where
                    T: std::ops::$trait<Output = T> + Copy
                {
                    type Output = Self;

                    #[inline]
                    #[must_use]
                    fn $fname(self, rhs: T) -> Self {
                        Self([
                            $(self.0[$index] $op rhs),+
                        ])
                    }
                }
            }
        }

        macro_rules! impl_op_assign {
            ($trait:ident, $fname:ident, $op:tt) => {
                impl<T> std::ops::$trait for Vector<T, $d>
                where
                    T: std::ops::$trait + Copy
                {
                    #[inline]
                    fn $fname(&mut self, rhs: Self) {
                        $(self.0[$index] $op rhs.0[$index]);+
                    }
                }

                impl<'a, T> std::ops::$trait<&'a Vector<T, $d>> for Vector<T, $d>
                where
                    T: std::ops::$trait + Copy
                {
                    #[inline]
                    fn $fname(&mut self, rhs: &'a Vector<T, $d>) {
                        $(self.0[$index] $op rhs.0[$index]);+
                    }
                }

                impl<T> std::ops::$trait<T> for Vector<T, $d>
                where
                    T: std::ops::$trait + Copy
                {
                    #[inline]
                    fn $fname(&mut self, rhs: T) {
                        $(self.0[$index] $op rhs);+
                    }
                }
            }
        }

        impl_op!(Add, add, +);
        impl_op!(Sub, sub, -);
        impl_op!(Mul, mul, *);
        impl_op!(Div, div, /);
        impl_op_assign!(AddAssign, add_assign, +=);
        impl_op_assign!(SubAssign, sub_assign, -=);
        impl_op_assign!(MulAssign, mul_assign, *=);
        impl_op_assign!(DivAssign, div_assign, /=);
    }
}

impl_vector!(2, {x: 0}, {y: 1});
impl_vector!(3, {x: 0}, {y: 1}, {z: 2});
impl_vector!(4, {x: 0}, {y: 1}, {z: 2}, {w: 3});

impl<T, const D: usize> Index<usize> for Vector<T, D> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T, const D: usize> IndexMut<usize> for Vector<T, D> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

impl<T: Number> Vector<T, 3> {
    /// Cross product, right-hand rule.
    #[inline]
    #[must_use]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y() * rhs.z() - self.z() * rhs.y(),
            self.z() * rhs.x() - self.x() * rhs.z(),
            self.x() * rhs.y() - self.y() * rhs.x(),
        )
    }
}

/// Rotation quaternion.
/// Inner vector's x, y, and z are the vector part, known as i, j, and k,
/// and w is the scalar part. Identity is (0, 0, 0, 1).
///
/// Construction does not force unit length; the operations that assume it
/// ([`Quaternion::rotate`], [`Matrix4f::from_quaternion`]) say so in their
/// docs.
///
/// [`Matrix4f::from_quaternion`]: crate::primitive::matrix::Matrix4f::from_quaternion
#[derive(Debug, PartialEq, Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(transparent)]
pub struct Quaternion(pub(crate) Vector<f32, 4>);

impl Quaternion {
    /// The identity rotation.
    #[inline]
    pub const fn identity() -> Self {
        Self(Vector::<f32, 4>::new(0.0, 0.0, 0.0, 1.0))
    }

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self(Vector::<f32, 4>::new(x, y, z, w))
    }

    #[inline]
    pub const fn x(&self) -> f32 {
        self.0.x()
    }

    #[inline]
    pub const fn y(&self) -> f32 {
        self.0.y()
    }

    #[inline]
    pub const fn z(&self) -> f32 {
        self.0.z()
    }

    #[inline]
    pub const fn w(&self) -> f32 {
        self.0.w()
    }

    /// Creates quaternion rotating `angle` radians around `axis`.
    ///
    /// # Panics
    ///
    /// In debug mode only, panics if `axis` is not a unit vector.
    pub fn from_axis_angle(axis: Vector<f32, 3>, angle: f32) -> Self {
        debug_assert!(axis.is_unit());
        let (sin, cos) = (angle * 0.5).sin_cos();
        let axis = axis * sin;
        Self::new(axis.x(), axis.y(), axis.z(), cos)
    }

    /// Creates quaternion from rotation `angle` radians around x-axis.
    pub fn from_rotation_x(angle: f32) -> Self {
        let (sin, cos) = (angle * 0.5).sin_cos();
        Self::new(sin, 0.0, 0.0, cos)
    }

    /// Creates quaternion from rotation `angle` radians around y-axis.
    pub fn from_rotation_y(angle: f32) -> Self {
        let (sin, cos) = (angle * 0.5).sin_cos();
        Self::new(0.0, sin, 0.0, cos)
    }

    /// Creates quaternion from rotation `angle` radians around z-axis.
    pub fn from_rotation_z(angle: f32) -> Self {
        let (sin, cos) = (angle * 0.5).sin_cos();
        Self::new(0.0, 0.0, sin, cos)
    }

    /// Creates quaternion from rotation angles around the x, y, and z axes,
    /// applied in z-y-x order.
    pub fn from_euler(angles: Vector<f32, 3>) -> Self {
        let (sx, cx) = (angles.x() * 0.5).sin_cos();
        let (sy, cy) = (angles.y() * 0.5).sin_cos();
        let (sz, cz) = (angles.z() * 0.5).sin_cos();
        Self::new(
            cz * cy * sx - sz * sy * cx,
            sz * cy * sx + cz * sy * cx,
            sz * cy * cx - cz * sy * sx,
            cz * cy * cx + sz * sy * sx,
        )
    }

    /// Recovers the z-y-x rotation angles.
    ///
    /// Known limitation: near the gimbal-lock poles (y angle approaching
    /// ±π/2) the x and z angles are not uniquely determined and the
    /// returned pair degrades; the asin input is clamped so the result is
    /// always finite.
    pub fn to_euler(&self) -> Vector<f32, 3> {
        let (x, y, z, w) = (self.x(), self.y(), self.z(), self.w());
        Vector::<f32, 3>::new(
            (2.0 * (w * x + y * z)).atan2(1.0 - 2.0 * (x * x + y * y)),
            (2.0 * (w * y - z * x)).clamp(-1.0, 1.0).asin(),
            (2.0 * (w * z + x * y)).atan2(1.0 - 2.0 * (y * y + z * z)),
        )
    }

    #[inline]
    pub fn norm_l2(&self) -> f32 {
        self.0.norm_l2()
    }

    #[inline]
    pub fn is_unit(&self) -> bool {
        self.0.is_unit()
    }

    /// Returns the unit-length copy of the quaternion.
    /// The magnitude is taken from `self` before the result is formed, and
    /// a zero quaternion yields the identity, so the result is always a
    /// usable rotation.
    #[inline]
    #[must_use]
    pub fn normalized(self) -> Self {
        let norm = self.norm_l2();
        match norm != 0.0 {
            true => Self(self.0 / norm),
            false => Self::identity(),
        }
    }

    /// Scales the quaternion to unit length in place.
    /// See [`Quaternion::normalized`] for the zero-magnitude policy.
    #[inline]
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Vector part (x, y, z).
    #[inline]
    pub(crate) fn vector_part(&self) -> Vector<f32, 3> {
        Vector::<f32, 3>::new(self.x(), self.y(), self.z())
    }

    /// Rotates `v` by this quaternion, which must be unit length.
    ///
    /// Uses `v·(w² − |q_v|²) + 2·q_v·(q_v · v) + 2w·(q_v × v)`, cheaper
    /// than forming the rotation matrix for a one-off rotation.
    #[must_use]
    pub fn rotate(&self, v: Vector<f32, 3>) -> Vector<f32, 3> {
        let qv = self.vector_part();
        let w = self.w();
        let a = qv * (2.0 * qv.dot(v));
        let b = v * (w * w - qv.dot(qv));
        let c = qv.cross(v) * (2.0 * w);
        a + b + c
    }
}

impl Default for Quaternion {
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl std::ops::Mul for Quaternion {
    type Output = Self;

    /// Hamilton product. Non-commutative: `a * b` rotates by `b` first,
    /// then by `a`.
    #[must_use]
    fn mul(self, rhs: Self) -> Self {
        let (lx, ly, lz, lw) = (self.x(), self.y(), self.z(), self.w());
        let (rx, ry, rz, rw) = (rhs.x(), rhs.y(), rhs.z(), rhs.w());
        Self::new(
            lw * rx + lx * rw + ly * rz - lz * ry,
            lw * ry - lx * rz + ly * rw + lz * rx,
            lw * rz + lx * ry - ly * rx + lz * rw,
            lw * rw - lx * rx - ly * ry - lz * rz,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    type V2f32 = Vector<f32, 2>;
    type V3f32 = Vector<f32, 3>;
    type V4f32 = Vector<f32, 4>;
    type V3i32 = Vector<i32, 3>;

    #[test]
    fn test_new() {
        assert_eq!(Vector([1, 2, 3]), V3i32::new(1, 2, 3));
        assert_eq!(Vector([0.1_f32, 0.2]), V2f32::new(0.1, 0.2));
        assert_eq!(Vector([0.1_f32, 0.2, 0.3]), V3f32::new(0.1, 0.2, 0.3));
        assert_eq!(
            Vector([0.1_f32, 0.2, 0.3, 0.4]),
            V4f32::new(0.1, 0.2, 0.3, 0.4)
        );
        assert_eq!(V3f32::zeros(), V3f32::new(0.0, 0.0, 0.0));
        assert_eq!(V3f32::ones(), V3f32::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_getter_setter() {
        let mut v = V4f32::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(1.0, v.x());
        assert_eq!(2.0, v.y());
        assert_eq!(3.0, v.z());
        assert_eq!(4.0, v.w());
        v.set_x(10.0);
        v.set_w(40.0);
        assert_eq!(V4f32::new(10.0, 2.0, 3.0, 40.0), v);
        v.set(11.0, 12.0, 13.0, 14.0);
        assert_eq!(V4f32::new(11.0, 12.0, 13.0, 14.0), v);
    }

    #[test]
    fn test_name_index_alias() {
        let mut v = V3f32::new(1.0, 2.0, 3.0);
        v.set_y(20.0);
        assert_eq!(20.0, v[1]);
        v[2] = 30.0;
        assert_eq!(30.0, v.z());
    }

    #[test]
    fn test_ops() {
        let a = V4f32::new(1.0, 2.0, 3.0, 4.0);
        let b = V4f32::new(1.2, 3.4, 5.6, 7.8);
        assert_eq!(
            V4f32::new(a.x() + b.x(), a.y() + b.y(), a.z() + b.z(), a.w() + b.w()),
            a + b
        );
        assert_eq!(
            V4f32::new(a.x() - b.x(), a.y() - b.y(), a.z() - b.z(), a.w() - b.w()),
            a - b
        );
        assert_eq!(
            V4f32::new(a.x() * b.x(), a.y() * b.y(), a.z() * b.z(), a.w() * b.w()),
            a * b
        );
        assert_eq!(
            V4f32::new(a.x() / b.x(), a.y() / b.y(), a.z() / b.z(), a.w() / b.w()),
            a / b
        );

        let mut x = a;
        x += b;
        assert_eq!(a + b, x);
        let mut x = a;
        x -= b;
        assert_eq!(a - b, x);
        let mut x = a;
        x *= b;
        assert_eq!(a * b, x);
        let mut x = a;
        x /= b;
        assert_eq!(a / b, x);
    }

    #[test]
    fn test_scalar_ops() {
        let a = V3f32::new(1.0, 2.0, 3.0);
        assert_eq!(V3f32::new(3.0, 6.0, 9.0), a * 3.0);
        assert_eq!(V3f32::new(0.5, 1.0, 1.5), a / 2.0);
        assert_eq!(V3f32::new(2.0, 3.0, 4.0), a + 1.0);
        let mut x = a;
        x *= 2.0;
        assert_eq!(a * 2.0, x);
    }

    #[test]
    fn test_dot_and_norms() {
        let a = V3f32::new(1.0, 2.0, 3.0);
        let b = V3f32::new(4.0, -5.0, 6.0);
        assert_eq!(1.0 * 4.0 - 2.0 * 5.0 + 3.0 * 6.0, a.dot(b));
        assert_eq!(14.0, a.norm_sq());
        assert!((a.norm_l2() - 14.0_f32.sqrt()).abs() < EPS);
    }

    #[test]
    fn test_normalize() {
        let (x, y, z) = (1.0, 2.0, 3.0);
        let mut v = V3f32::new(x, y, z);
        let norm = v.norm_l2();
        let unit_v = v.into_unit();
        v.normalize();
        assert!((v.norm_l2() - 1.0).abs() < EPS);
        assert_eq!(V3f32::new(x / norm, y / norm, z / norm), v);
        assert_eq!(v, unit_v);
    }

    #[test]
    fn test_normalized_has_unit_dot() {
        let u2 = V2f32::new(-3.0, 0.5).into_unit();
        let u3 = V3f32::new(1.0, 2.0, 3.0).into_unit();
        let u4 = V4f32::new(0.1, -0.2, 0.3, -0.4).into_unit();
        assert!((u2.dot(u2) - 1.0).abs() < EPS);
        assert!((u3.dot(u3) - 1.0).abs() < EPS);
        assert!((u4.dot(u4) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_normalize_zero_is_noop() {
        let mut v = V3f32::zeros();
        v.normalize();
        assert_eq!(V3f32::zeros(), v);
        assert_eq!(V3f32::zeros(), V3f32::zeros().into_unit());
    }

    #[test]
    fn test_cross() {
        let x = V3f32::new(1.0, 0.0, 0.0);
        let y = V3f32::new(0.0, 1.0, 0.0);
        let z = V3f32::new(0.0, 0.0, 1.0);
        assert_eq!(z, x.cross(y));
        assert_eq!(x, y.cross(z));
        assert_eq!(y, z.cross(x));
        assert_eq!(V3f32::zeros() - z, y.cross(x));
    }

    #[test]
    fn test_quat_identity_rotation() {
        let q = Quaternion::identity();
        let v = V3f32::new(1.5, -2.5, 3.5);
        assert_eq!(v, q.rotate(v));
    }

    #[test]
    fn test_quat_axis_angle_round_trip() {
        let axis = V3f32::new(1.0, 2.0, -0.5).into_unit();
        let theta = 1.234;
        let v = V3f32::new(0.3, -4.0, 2.2);
        let there = Quaternion::from_axis_angle(axis, theta);
        let back = Quaternion::from_axis_angle(axis, -theta);
        let w = back.rotate(there.rotate(v));
        assert!((w.x() - v.x()).abs() < 1e-4);
        assert!((w.y() - v.y()).abs() < 1e-4);
        assert!((w.z() - v.z()).abs() < 1e-4);
    }

    #[test]
    fn test_quat_rotation_y() {
        // Quarter turn around y maps +x to -z.
        let q = Quaternion::from_rotation_y(std::f32::consts::FRAC_PI_2);
        let v = q.rotate(V3f32::new(1.0, 0.0, 0.0));
        assert!((v.x() - 0.0).abs() < EPS);
        assert!((v.y() - 0.0).abs() < EPS);
        assert!((v.z() + 1.0).abs() < EPS);
    }

    #[test]
    fn test_quat_mul_composes() {
        let a = Quaternion::from_rotation_x(0.7);
        let b = Quaternion::from_rotation_y(-0.3);
        let v = V3f32::new(1.0, 2.0, 3.0);
        let composed = (a * b).rotate(v);
        let stepwise = a.rotate(b.rotate(v));
        assert!((composed.x() - stepwise.x()).abs() < EPS);
        assert!((composed.y() - stepwise.y()).abs() < EPS);
        assert!((composed.z() - stepwise.z()).abs() < EPS);
    }

    #[test]
    fn test_quat_mul_associative() {
        let a = Quaternion::from_rotation_x(0.4);
        let b = Quaternion::from_rotation_y(1.1);
        let c = Quaternion::from_rotation_z(-0.8);
        let lhs = (a * b) * c;
        let rhs = a * (b * c);
        assert!((lhs.x() - rhs.x()).abs() < EPS);
        assert!((lhs.y() - rhs.y()).abs() < EPS);
        assert!((lhs.z() - rhs.z()).abs() < EPS);
        assert!((lhs.w() - rhs.w()).abs() < EPS);
    }

    #[test]
    fn test_quat_normalized() {
        let q = Quaternion::new(1.0, 2.0, 3.0, 4.0).normalized();
        assert!(q.is_unit());
        let n = 30.0_f32.sqrt();
        assert!((q.x() - 1.0 / n).abs() < EPS);
        assert!((q.w() - 4.0 / n).abs() < EPS);

        let mut q = Quaternion::new(0.0, 0.0, 2.0, 0.0);
        q.normalize();
        assert_eq!(Quaternion::new(0.0, 0.0, 1.0, 0.0), q);
    }

    #[test]
    fn test_quat_normalize_zero_gives_identity() {
        assert_eq!(
            Quaternion::identity(),
            Quaternion::new(0.0, 0.0, 0.0, 0.0).normalized()
        );
    }

    #[test]
    fn test_quat_euler_round_trip() {
        let angles = V3f32::new(0.3, -0.4, 0.9);
        let back = Quaternion::from_euler(angles).to_euler();
        assert!((back.x() - angles.x()).abs() < 1e-4);
        assert!((back.y() - angles.y()).abs() < 1e-4);
        assert!((back.z() - angles.z()).abs() < 1e-4);
    }

    #[test]
    fn test_quat_euler_matches_axis_rotations() {
        let q = Quaternion::from_euler(V3f32::new(0.0, 0.5, 0.0));
        let r = Quaternion::from_rotation_y(0.5);
        assert!((q.x() - r.x()).abs() < EPS);
        assert!((q.y() - r.y()).abs() < EPS);
        assert!((q.z() - r.z()).abs() < EPS);
        assert!((q.w() - r.w()).abs() < EPS);
    }
}
