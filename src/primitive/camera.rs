use crate::primitive::{constant::angles, matrix::Matrix4f, vector::Vector};

#[derive(Debug)]
pub enum Camera {
    Perspective(PerspectiveCamera),
    Orthographic(OrthographicCamera),
}

impl From<PerspectiveCamera> for Camera {
    fn from(value: PerspectiveCamera) -> Self {
        Self::Perspective(value)
    }
}

impl From<OrthographicCamera> for Camera {
    fn from(value: OrthographicCamera) -> Self {
        Self::Orthographic(value)
    }
}

impl Camera {
    pub fn view_proj(&self) -> &Matrix4f {
        match self {
            Self::Perspective(cam) => &cam.view_proj,
            Self::Orthographic(cam) => &cam.view_proj,
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Camera::Perspective(PerspectiveCamera::default())
    }
}

impl<'a> From<&'a Camera> for &'a [u8] {
    fn from(value: &'a Camera) -> Self {
        value.view_proj().as_bytes()
    }
}

/// Perspective camera holding eye/target/up, projection parameters, and
/// the cached view, projection, and view-projection matrices.
#[derive(Debug)]
pub struct PerspectiveCamera {
    eye: Vector<f32, 3>,
    at: Vector<f32, 3>,
    up: Vector<f32, 3>,
    fovy: f32,
    aspect: f32, // width / height
    near: f32,
    far: f32,
    view: Matrix4f,
    proj: Matrix4f,
    pub view_proj: Matrix4f,
}

impl PerspectiveCamera {
    #[inline]
    pub fn new() -> Self {
        Default::default()
    }

    /// Updates any of eye/target/up and rebuilds the view matrix.
    pub fn set_view(
        &mut self,
        eye: Option<(f32, f32, f32)>,
        at: Option<(f32, f32, f32)>,
        up: Option<(f32, f32, f32)>,
    ) {
        if let Some((x, y, z)) = eye {
            self.eye.set(x, y, z);
        }
        if let Some((x, y, z)) = at {
            self.at.set(x, y, z);
        }
        if let Some((x, y, z)) = up {
            self.up.set(x, y, z);
        }

        self.view = Matrix4f::look_at(self.eye, self.at, self.up);
        self.view_proj = &self.proj * &self.view;
    }

    /// Points the camera along `forward` from `eye`, for callers that
    /// derive the viewing direction elsewhere (e.g. a quaternion-rotated
    /// frame). `forward` must be unit length.
    pub fn look_to(&mut self, eye: Vector<f32, 3>, forward: Vector<f32, 3>) {
        self.eye = eye;
        self.at = eye + forward;
        let right = forward.cross(self.up).into_unit();
        let true_up = right.cross(forward);
        self.view = Matrix4f::view_from_basis(right, true_up, forward, eye);
        self.view_proj = &self.proj * &self.view;
    }

    /// Updates any of the projection parameters and rebuilds the
    /// projection matrix.
    pub fn set_proj(
        &mut self,
        fovy: Option<f32>,
        aspect: Option<f32>,
        near: Option<f32>,
        far: Option<f32>,
    ) {
        if let Some(x) = fovy {
            self.fovy = x;
        }
        if let Some(x) = aspect {
            self.aspect = x;
        }
        if let Some(x) = near {
            self.near = x;
        }
        if let Some(x) = far {
            self.far = x;
        }

        self.proj = Matrix4f::perspective(self.fovy, self.aspect, self.near, self.far);
        self.view_proj = &self.proj * &self.view;
    }

    #[inline]
    pub fn view(&self) -> &Matrix4f {
        &self.view
    }

    #[inline]
    pub fn proj(&self) -> &Matrix4f {
        &self.proj
    }
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        let eye = Vector::<f32, 3>::from([0.0, 0.0, 1.0]);
        let at = Vector::<f32, 3>::from(0.0);
        let up = Vector::<f32, 3>::from([0.0, 1.0, 0.0]);
        let fovy = angles::FRAC_PI_2;
        let aspect = 1.0;
        let near = 0.1;
        let far = 10.0;
        let view = Matrix4f::look_at(eye, at, up);
        let proj = Matrix4f::perspective(fovy, aspect, near, far);
        let view_proj = &proj * &view;

        Self {
            eye,
            at,
            up,
            fovy,
            aspect,
            near,
            far,
            view,
            proj,
            view_proj,
        }
    }
}

impl<'a> From<&'a PerspectiveCamera> for &'a [u8] {
    fn from(value: &'a PerspectiveCamera) -> Self {
        value.view_proj.as_bytes()
    }
}

/// Orthographic camera over an axis-aligned view box.
#[derive(Debug)]
pub struct OrthographicCamera {
    eye: Vector<f32, 3>,
    at: Vector<f32, 3>,
    up: Vector<f32, 3>,
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
    near: f32,
    far: f32,
    view: Matrix4f,
    proj: Matrix4f,
    pub view_proj: Matrix4f,
}

impl OrthographicCamera {
    #[inline]
    pub fn new() -> Self {
        Default::default()
    }

    pub fn set_view(
        &mut self,
        eye: Option<(f32, f32, f32)>,
        at: Option<(f32, f32, f32)>,
        up: Option<(f32, f32, f32)>,
    ) {
        if let Some((x, y, z)) = eye {
            self.eye.set(x, y, z);
        }
        if let Some((x, y, z)) = at {
            self.at.set(x, y, z);
        }
        if let Some((x, y, z)) = up {
            self.up.set(x, y, z);
        }

        self.view = Matrix4f::look_at(self.eye, self.at, self.up);
        self.view_proj = &self.proj * &self.view;
    }

    pub fn set_proj(
        &mut self,
        horizontal: Option<(f32, f32)>,
        vertical: Option<(f32, f32)>,
        depth: Option<(f32, f32)>,
    ) {
        if let Some((left, right)) = horizontal {
            self.left = left;
            self.right = right;
        }
        if let Some((top, bottom)) = vertical {
            self.top = top;
            self.bottom = bottom;
        }
        if let Some((near, far)) = depth {
            self.near = near;
            self.far = far;
        }

        self.proj = Matrix4f::orthographic(
            self.left,
            self.right,
            self.top,
            self.bottom,
            self.near,
            self.far,
        );
        self.view_proj = &self.proj * &self.view;
    }

    #[inline]
    pub fn view(&self) -> &Matrix4f {
        &self.view
    }

    #[inline]
    pub fn proj(&self) -> &Matrix4f {
        &self.proj
    }
}

impl Default for OrthographicCamera {
    fn default() -> Self {
        let eye = Vector::<f32, 3>::from([0.0, 0.0, 1.0]);
        let at = Vector::<f32, 3>::from(0.0);
        let up = Vector::<f32, 3>::from([0.0, 1.0, 0.0]);
        let (left, right) = (-1.0, 1.0);
        let (top, bottom) = (1.0, -1.0);
        let (near, far) = (0.1, 10.0);
        let view = Matrix4f::look_at(eye, at, up);
        let proj = Matrix4f::orthographic(left, right, top, bottom, near, far);
        let view_proj = &proj * &view;

        Self {
            eye,
            at,
            up,
            left,
            right,
            top,
            bottom,
            near,
            far,
            view,
            proj,
            view_proj,
        }
    }
}

impl<'a> From<&'a OrthographicCamera> for &'a [u8] {
    fn from(value: &'a OrthographicCamera) -> Self {
        value.view_proj.as_bytes()
    }
}
