//! Column-major 4x4 matrix helpers, laid out the way GL uniforms expect.

pub type Mat4 = [f32; 16];

pub fn identity() -> Mat4 {
    let mut m = [0.0; 16];
    m[0] = 1.0;
    m[5] = 1.0;
    m[10] = 1.0;
    m[15] = 1.0;
    m
}

/// Perspective projection for the given clip planes
pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Mat4 {
    let r_width = 1.0 / (right - left);
    let r_height = 1.0 / (top - bottom);
    let r_depth = 1.0 / (near - far);

    let mut m = [0.0; 16];
    m[0] = 2.0 * near * r_width;
    m[5] = 2.0 * near * r_height;
    m[8] = (right + left) * r_width;
    m[9] = (top + bottom) * r_height;
    m[10] = (far + near) * r_depth;
    m[11] = -1.0;
    m[14] = 2.0 * far * near * r_depth;
    m
}

fn normalize(v: [f32; 3]) -> [f32; 3] {
    let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    if len == 0.0 {
        return v;
    }
    [v[0] / len, v[1] / len, v[2] / len]
}

fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// View matrix for a camera at `eye` looking at `center`
pub fn look_at(eye: [f32; 3], center: [f32; 3], up: [f32; 3]) -> Mat4 {
    let f = normalize([center[0] - eye[0], center[1] - eye[1], center[2] - eye[2]]);
    let s = normalize(cross(f, up));
    let u = cross(s, f);

    let mut m = [
        s[0], u[0], -f[0], 0.0,
        s[1], u[1], -f[1], 0.0,
        s[2], u[2], -f[2], 0.0,
        0.0, 0.0, 0.0, 1.0,
    ];

    // translate by -eye
    for i in 0..4 {
        m[12 + i] -= m[i] * eye[0] + m[4 + i] * eye[1] + m[8 + i] * eye[2];
    }
    m
}

/// Rotation of `degrees` about the axis (x, y, z)
pub fn rotate(degrees: f32, x: f32, y: f32, z: f32) -> Mat4 {
    let (s, c) = degrees.to_radians().sin_cos();
    let [x, y, z] = normalize([x, y, z]);
    let nc = 1.0 - c;

    let mut m = identity();
    m[0] = x * x * nc + c;
    m[1] = x * y * nc + z * s;
    m[2] = z * x * nc - y * s;
    m[4] = x * y * nc - z * s;
    m[5] = y * y * nc + c;
    m[6] = y * z * nc + x * s;
    m[8] = z * x * nc + y * s;
    m[9] = y * z * nc - x * s;
    m[10] = z * z * nc + c;
    m
}

/// `lhs * rhs`
pub fn multiply(lhs: &Mat4, rhs: &Mat4) -> Mat4 {
    let mut m = [0.0; 16];
    for col in 0..4 {
        for row in 0..4 {
            m[col * 4 + row] = (0..4).map(|k| lhs[k * 4 + row] * rhs[col * 4 + k]).sum();
        }
    }
    m
}
