use crate::primitive::vector::{Quaternion, Vector};
use std::ops;

macro_rules! impl_matrix {
    ($name:ident, $n:expr) => {
        /// Column major f32 matrix. Columns are laid out contiguously, so
        /// element (col, row) lives at flat index `col * N + row`.
        #[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable, Debug, PartialEq)]
        #[repr(transparent)]
        pub struct $name(pub [f32; $n * $n]);

        impl $name {
            pub const DIM: usize = $n;

            #[inline]
            pub const fn new(value: [f32; $n * $n]) -> Self {
                Self(value)
            }

            pub const fn identity() -> Self {
                let mut data = [0.0; $n * $n];
                let mut i = 0;
                while i < $n {
                    data[i * $n + i] = 1.0;
                    i += 1;
                }
                Self(data)
            }

            #[inline]
            pub fn get_elem(&self, col: usize, row: usize) -> f32 {
                self.0[Self::index(col, row)]
            }

            #[inline]
            pub fn set_elem(&mut self, col: usize, row: usize, value: f32) {
                self.0[Self::index(col, row)] = value;
            }

            #[inline]
            pub fn add_elem(&mut self, col: usize, row: usize, increment: f32) {
                self.0[Self::index(col, row)] += increment;
            }

            #[inline]
            #[must_use]
            pub fn transpose(self) -> Self {
                let mut out = [0.0; $n * $n];
                for col in 0..$n {
                    for row in 0..$n {
                        out[col * $n + row] = self.0[row * $n + col];
                    }
                }
                Self(out)
            }

            /// Componentwise product, distinct from the matrix product.
            #[inline]
            #[must_use]
            pub fn comp_mul(self, rhs: Self) -> Self {
                let mut out = self.0;
                for i in 0..$n * $n {
                    out[i] *= rhs.0[i];
                }
                Self(out)
            }

            #[inline]
            pub fn comp_mul_assign(&mut self, rhs: Self) {
                for i in 0..$n * $n {
                    self.0[i] *= rhs.0[i];
                }
            }

            /// Componentwise quotient.
            #[inline]
            #[must_use]
            pub fn comp_div(self, rhs: Self) -> Self {
                let mut out = self.0;
                for i in 0..$n * $n {
                    out[i] /= rhs.0[i];
                }
                Self(out)
            }

            #[inline]
            pub fn comp_div_assign(&mut self, rhs: Self) {
                for i in 0..$n * $n {
                    self.0[i] /= rhs.0[i];
                }
            }

            #[inline]
            pub fn as_bytes(&self) -> &[u8] {
                bytemuck::bytes_of(self)
            }

            #[inline(always)]
            fn index(col: usize, row: usize) -> usize {
                col * $n + row
            }
        }

        impl Default for $name {
            /// Identity matrix.
            #[inline]
            fn default() -> Self {
                Self::identity()
            }
        }

        impl<'a> From<&'a $name> for &'a [u8] {
            fn from(value: &'a $name) -> Self {
                bytemuck::cast_slice(std::slice::from_ref(value))
            }
        }

        impl<'a, 'b> ops::Mul<&'b $name> for &'a $name {
            type Output = $name;

            /// Matrix product. The output index is derived from the
            /// dimension, never hard coded.
            #[must_use]
            fn mul(self, rhs: &'b $name) -> Self::Output {
                let mut out = [0.0; $n * $n];
                for col in 0..$n {
                    for row in 0..$n {
                        let mut d = 0.0;
                        for k in 0..$n {
                            d += self.0[k * $n + row] * rhs.0[col * $n + k];
                        }
                        out[col * $n + row] = d;
                    }
                }
                $name(out)
            }
        }

        // Componentwise matrix-matrix add/sub. The multiplicative pair
        // stays out of operator position: `&a * &b` is the matrix
        // product, so the componentwise forms are the named
        // `comp_mul`/`comp_div` above.
        macro_rules! impl_comp_op {
            ($trait:ident, $fname:ident, $trait_assign:ident, $fname_assign:ident, $op_assign:tt) => {
                impl ops::$trait for $name {
                    type Output = Self;

                    #[inline]
                    #[must_use]
                    fn $fname(self, rhs: Self) -> Self {
                        let mut out = self.0;
                        for i in 0..$n * $n {
                            out[i] $op_assign rhs.0[i];
                        }
                        Self(out)
                    }
                }

                impl ops::$trait_assign for $name {
                    #[inline]
                    fn $fname_assign(&mut self, rhs: Self) {
                        for i in 0..$n * $n {
                            self.0[i] $op_assign rhs.0[i];
                        }
                    }
                }
            }
        }

        // Matrix-scalar forms of all four componentwise families.
        macro_rules! impl_scalar_op {
            ($trait:ident, $fname:ident, $trait_assign:ident, $fname_assign:ident, $op_assign:tt) => {
                impl ops::$trait<f32> for $name {
                    type Output = Self;

                    #[inline]
                    #[must_use]
                    fn $fname(self, rhs: f32) -> Self {
                        let mut out = self.0;
                        for i in 0..$n * $n {
                            out[i] $op_assign rhs;
                        }
                        Self(out)
                    }
                }

                impl ops::$trait_assign<f32> for $name {
                    #[inline]
                    fn $fname_assign(&mut self, rhs: f32) {
                        for i in 0..$n * $n {
                            self.0[i] $op_assign rhs;
                        }
                    }
                }
            }
        }

        impl_comp_op!(Add, add, AddAssign, add_assign, +=);
        impl_comp_op!(Sub, sub, SubAssign, sub_assign, -=);
        impl_scalar_op!(Add, add, AddAssign, add_assign, +=);
        impl_scalar_op!(Sub, sub, SubAssign, sub_assign, -=);
        impl_scalar_op!(Mul, mul, MulAssign, mul_assign, *=);
        impl_scalar_op!(Div, div, DivAssign, div_assign, /=);
    };
}

impl_matrix!(Matrix2f, 2);
impl_matrix!(Matrix3f, 3);
impl_matrix!(Matrix4f, 4);

impl Matrix4f {
    #[inline]
    pub fn set_col3(&mut self, col: usize, x: f32, y: f32, z: f32) {
        self.set_elem(col, 0, x);
        self.set_elem(col, 1, y);
        self.set_elem(col, 2, z);
    }

    #[inline]
    pub fn add_col3(&mut self, col: usize, dx: f32, dy: f32, dz: f32) {
        self.add_elem(col, 0, dx);
        self.add_elem(col, 1, dy);
        self.add_elem(col, 2, dz);
    }

    #[inline]
    pub fn set_col4(&mut self, col: usize, x: f32, y: f32, z: f32, w: f32) {
        self.set_col3(col, x, y, z);
        self.set_elem(col, 3, w);
    }

    /// Identity with the translation column set to `t`.
    pub fn from_translation(t: Vector<f32, 3>) -> Self {
        let mut out = Self::identity();
        out.set_col3(3, t.x(), t.y(), t.z());
        out
    }

    /// Identity with the diagonal set to `s`.
    pub fn from_scale(s: Vector<f32, 3>) -> Self {
        let mut out = Self::identity();
        out.set_elem(0, 0, s.x());
        out.set_elem(1, 1, s.y());
        out.set_elem(2, 2, s.z());
        out
    }

    /// Right-handed perspective projection.
    ///
    /// `v_fov` is the full vertical field of view in radians and `aspect`
    /// is width / height. Clip-space convention: element (2, 3) is -1 and
    /// (3, 3) is 0; the depth terms come from `z_near - z_far`.
    #[rustfmt::skip]
    pub fn perspective(v_fov: f32, aspect: f32, z_near: f32, z_far: f32) -> Self {
        let f = 1.0 / (v_fov * 0.5).tan();
        let z_range = z_near - z_far;
        Self::new([
            f / aspect, 0.0, 0.0, 0.0,
            0.0, f, 0.0, 0.0,
            0.0, 0.0, (z_far + z_near) / z_range, -1.0,
            0.0, 0.0, (2.0 * z_far * z_near) / z_range, 0.0,
        ])
    }

    /// Axis-aligned box projection.
    #[rustfmt::skip]
    pub fn orthographic(
        left: f32,
        right: f32,
        top: f32,
        bottom: f32,
        z_near: f32,
        z_far: f32,
    ) -> Self {
        Self::new([
            2.0 / (right - left), 0.0, 0.0, 0.0,
            0.0, 2.0 / (top - bottom), 0.0, 0.0,
            0.0, 0.0, -2.0 / (z_far - z_near), 0.0,
            -((right + left) / (right - left)),
            -((top + bottom) / (top - bottom)),
            -((z_far + z_near) / (z_far - z_near)),
            1.0,
        ])
    }

    /// View matrix from an orthonormal camera basis.
    ///
    /// `forward` is the viewing direction, from the eye toward the scene;
    /// it is negated here, on placement, and nowhere else. Callers that
    /// derive the basis from a quaternion-rotated frame can hand it over
    /// unchanged.
    #[rustfmt::skip]
    pub fn view_from_basis(
        right: Vector<f32, 3>,
        up: Vector<f32, 3>,
        forward: Vector<f32, 3>,
        eye: Vector<f32, 3>,
    ) -> Self {
        debug_assert!(right.is_unit() && up.is_unit() && forward.is_unit());
        Self::new([
            right.x(), up.x(), -forward.x(), 0.0,
            right.y(), up.y(), -forward.y(), 0.0,
            right.z(), up.z(), -forward.z(), 0.0,
            -eye.dot(right), -eye.dot(up), eye.dot(forward), 1.0,
        ])
    }

    /// Right-handed view matrix for a camera at `eye` looking at `target`.
    ///
    /// Derives the viewing direction and the orthonormal basis, then
    /// defers to [`Matrix4f::view_from_basis`] so the forward-axis sign
    /// convention lives in exactly one place.
    pub fn look_at(
        eye: Vector<f32, 3>,
        target: Vector<f32, 3>,
        up: Vector<f32, 3>,
    ) -> Self {
        let forward = (target - eye).into_unit();
        let right = forward.cross(up).into_unit();
        let true_up = right.cross(forward);
        Self::view_from_basis(right, true_up, forward, eye)
    }

    /// Rotation matrix of `q`, which must be unit length.
    #[rustfmt::skip]
    pub fn from_quaternion(q: &Quaternion) -> Self {
        let (x, y, z, w) = (q.x(), q.y(), q.z(), q.w());
        let xx = x * x;
        let xy = x * y;
        let xz = x * z;
        let xw = x * w;
        let yy = y * y;
        let yz = y * z;
        let yw = y * w;
        let zz = z * z;
        let zw = z * w;
        Self::new([
            1.0 - 2.0 * (yy + zz), 2.0 * (xy + zw), 2.0 * (xz - yw), 0.0,
            2.0 * (xy - zw), 1.0 - 2.0 * (xx + zz), 2.0 * (yz + xw), 0.0,
            2.0 * (xz + yw), 2.0 * (yz - xw), 1.0 - 2.0 * (xx + yy), 0.0,
            0.0, 0.0, 0.0, 1.0,
        ])
    }
}

impl ops::Mul<Vector<f32, 2>> for &Matrix4f {
    type Output = Vector<f32, 2>;

    #[must_use]
    fn mul(self, rhs: Vector<f32, 2>) -> Self::Output {
        Vector::<f32, 2>::new(
            self.0[0] * rhs.x() + self.0[4] * rhs.y() + self.0[12],
            self.0[1] * rhs.x() + self.0[5] * rhs.y() + self.0[13],
        )
    }
}

impl ops::Mul<Vector<f32, 3>> for &Matrix4f {
    type Output = Vector<f32, 3>;

    #[must_use]
    fn mul(self, rhs: Vector<f32, 3>) -> Self::Output {
        Vector::<f32, 3>::new(
            self.0[0] * rhs.x() + self.0[4] * rhs.y() + self.0[8] * rhs.z() + self.0[12],
            self.0[1] * rhs.x() + self.0[5] * rhs.y() + self.0[9] * rhs.z() + self.0[13],
            self.0[2] * rhs.x() + self.0[6] * rhs.y() + self.0[10] * rhs.z() + self.0[14],
        )
    }
}

impl ops::Mul<Vector<f32, 4>> for &Matrix4f {
    type Output = Vector<f32, 4>;

    #[must_use]
    fn mul(self, rhs: Vector<f32, 4>) -> Self::Output {
        Vector::<f32, 4>::new(
            self.0[0] * rhs.x() + self.0[4] * rhs.y() + self.0[8] * rhs.z() + self.0[12] * rhs.w(),
            self.0[1] * rhs.x() + self.0[5] * rhs.y() + self.0[9] * rhs.z() + self.0[13] * rhs.w(),
            self.0[2] * rhs.x() + self.0[6] * rhs.y() + self.0[10] * rhs.z() + self.0[14] * rhs.w(),
            self.0[3] * rhs.x() + self.0[7] * rhs.y() + self.0[11] * rhs.z() + self.0[15] * rhs.w(),
        )
    }
}
