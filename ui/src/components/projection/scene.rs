//! Projection Scene Math
//!
//! Pure geometry for the point cloud view: a rotation about the vertical
//! axis, a bounding radius to normalize arbitrary embeddings, and a simple
//! perspective projection onto the SVG canvas. No DOM types here so it all
//! stays unit-testable.

/// Camera distance as a multiple of the cloud's bounding radius. Keeps the
/// whole cloud in front of the camera at any rotation angle.
const CAMERA_DISTANCE_FACTOR: f64 = 3.0;

/// Lift server coordinates into 3-space. Two-dimensional projections get a
/// zero depth component, extra components beyond the third are ignored.
pub fn to_point3(coords: &[f64]) -> [f64; 3] {
    [
        coords.first().copied().unwrap_or(0.0),
        coords.get(1).copied().unwrap_or(0.0),
        coords.get(2).copied().unwrap_or(0.0),
    ]
}

/// Rotate a point about the Y axis.
pub fn rotate_y([x, y, z]: [f64; 3], angle: f64) -> [f64; 3] {
    let (sin, cos) = angle.sin_cos();
    [x * cos + z * sin, y, -x * sin + z * cos]
}

/// Largest distance of any point from the origin. Never returns zero so it
/// is always safe to divide by.
pub fn bounding_radius<'a>(points: impl IntoIterator<Item = &'a [f64; 3]>) -> f64 {
    points
        .into_iter()
        .map(|[x, y, z]| (x * x + y * y + z * z).sqrt())
        .fold(0.0_f64, f64::max)
        .max(1e-9)
}

/// Perspective-project a point onto a canvas of the given size. Points
/// closer to the camera land farther from the center and draw larger.
pub fn project(point: [f64; 3], radius: f64, width: f64, height: f64) -> (f64, f64) {
    let distance = radius * CAMERA_DISTANCE_FACTOR;
    let depth = distance - point[2];
    let focal = width.min(height);
    (
        width / 2.0 + point[0] * focal / depth,
        height / 2.0 - point[1] * focal / depth,
    )
}

/// Marker radius scaled by depth, so nearer points read as nearer.
pub fn marker_radius(point: [f64; 3], radius: f64) -> f64 {
    let distance = radius * CAMERA_DISTANCE_FACTOR;
    let depth = distance - point[2];
    (radius / depth * 12.0).clamp(2.0, 8.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
    }

    #[test]
    fn missing_components_default_to_zero() {
        assert_eq!(to_point3(&[1.0, 2.0]), [1.0, 2.0, 0.0]);
        assert_eq!(to_point3(&[1.0, 2.0, 3.0]), [1.0, 2.0, 3.0]);
        assert_eq!(to_point3(&[]), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn rotation_preserves_height_and_length() {
        let p = [1.0, 5.0, 0.0];
        let r = rotate_y(p, std::f64::consts::FRAC_PI_2);
        assert_close(r[0], 0.0);
        assert_close(r[1], 5.0);
        assert_close(r[2], -1.0);
    }

    #[test]
    fn full_turn_is_identity() {
        let p = [0.3, -0.7, 0.2];
        let r = rotate_y(p, std::f64::consts::TAU);
        assert_close(r[0], p[0]);
        assert_close(r[1], p[1]);
        assert_close(r[2], p[2]);
    }

    #[test]
    fn bounding_radius_is_never_zero() {
        let points: Vec<[f64; 3]> = vec![];
        assert!(bounding_radius(points.iter()) > 0.0);
        assert!(bounding_radius([[0.0, 0.0, 0.0]].iter()) > 0.0);
    }

    #[test]
    fn bounding_radius_finds_farthest_point() {
        let points = [[1.0, 0.0, 0.0], [0.0, 3.0, 4.0]];
        assert_close(bounding_radius(points.iter()), 5.0);
    }

    #[test]
    fn origin_projects_to_canvas_center() {
        let (x, y) = project([0.0, 0.0, 0.0], 1.0, 800.0, 600.0);
        assert_close(x, 400.0);
        assert_close(y, 300.0);
    }

    #[test]
    fn projection_keeps_points_on_canvas() {
        let radius = 2.0;
        for point in [
            [2.0, 0.0, 0.0],
            [-2.0, 0.0, 0.0],
            [0.0, 2.0, 0.0],
            [0.0, -2.0, 0.0],
            [1.0, 1.0, 1.0],
        ] {
            let (x, y) = project(point, radius, 800.0, 600.0);
            assert!((0.0..=800.0).contains(&x), "x out of canvas: {}", x);
            assert!((0.0..=600.0).contains(&y), "y out of canvas: {}", y);
        }
    }

    #[test]
    fn nearer_points_draw_larger() {
        let radius = 1.0;
        let near = marker_radius([0.0, 0.0, 0.9], radius);
        let far = marker_radius([0.0, 0.0, -0.9], radius);
        assert!(near > far);
    }
}
