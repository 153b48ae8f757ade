use super::*;

const EPS: f64 = 1e-12;

#[test]
fn test_origin_projects_to_screen_center() {
    let mut view = ViewTransform::new(300.0, 300.0);
    view.adjust_rotation(1.3, -0.4);

    let (sx, sy) = view.project(&Point3::ORIGIN);
    assert_eq!((sx, sy), (300.0, 300.0));
}

#[test]
fn test_zero_rotation_is_plain_perspective() {
    let view = ViewTransform::new(300.0, 300.0);

    // z = 1.0 puts the point at depth 4, so scale = 300 / 4 = 75
    let (sx, sy) = view.project(&Point3::new(0.5, 0.5, 1.0));
    assert!((sx - 337.5).abs() < EPS);
    assert!((sy - 262.5).abs() < EPS);
}

#[test]
fn test_screen_y_is_inverted() {
    let view = ViewTransform::new(0.0, 0.0);

    // Positive model y goes up, which is negative screen y
    let (_, sy) = view.project(&Point3::new(0.0, 1.0, 0.0));
    assert!(sy < 0.0);
}

#[test]
fn test_yaw_quarter_turn_maps_x_to_z() {
    let mut view = ViewTransform::new(0.0, 0.0);
    view.adjust_rotation(std::f64::consts::FRAC_PI_2, 0.0);

    let r = view.rotate(&Point3::new(1.0, 0.0, 0.0));
    assert!(r.x.abs() < EPS);
    assert!(r.y.abs() < EPS);
    assert!((r.z - 1.0).abs() < EPS);
}

#[test]
fn test_pitch_quarter_turn_maps_y_to_z() {
    let mut view = ViewTransform::new(0.0, 0.0);
    view.adjust_rotation(0.0, std::f64::consts::FRAC_PI_2);

    let r = view.rotate(&Point3::new(0.0, 1.0, 0.0));
    assert!(r.x.abs() < EPS);
    assert!(r.y.abs() < EPS);
    assert!((r.z - 1.0).abs() < EPS);
}

#[test]
fn test_yaw_applies_before_pitch() {
    let mut view = ViewTransform::new(0.0, 0.0);
    view.adjust_rotation(std::f64::consts::FRAC_PI_2, std::f64::consts::FRAC_PI_2);

    // Yaw takes (1,0,0) to (0,0,1); pitch about the horizontal axis then
    // takes that z into -y. The reverse order would leave y untouched.
    let r = view.rotate(&Point3::new(1.0, 0.0, 0.0));
    assert!(r.x.abs() < EPS);
    assert!((r.y + 1.0).abs() < EPS);
    assert!(r.z.abs() < EPS);
}

#[test]
fn test_pitch_clamps_at_the_poles() {
    let mut view = ViewTransform::new(0.0, 0.0);

    for _ in 0..100 {
        view.adjust_rotation(0.1, 0.3);
    }
    assert_eq!(view.pitch(), std::f64::consts::FRAC_PI_2);

    for _ in 0..100 {
        view.adjust_rotation(0.1, -0.3);
    }
    assert_eq!(view.pitch(), -std::f64::consts::FRAC_PI_2);

    // Yaw keeps accumulating unbounded
    assert!((view.yaw() - 20.0).abs() < 1e-9);
}

#[test]
fn test_nearer_points_project_larger() {
    let view = ViewTransform::new(0.0, 0.0);

    // Same x offset, different depth: the closer point lands further from
    // center
    let (near_x, _) = view.project(&Point3::new(1.0, 0.0, -1.0));
    let (far_x, _) = view.project(&Point3::new(1.0, 0.0, 1.0));
    assert!(near_x > far_x);
}
