use approx::{abs_diff_eq, assert_abs_diff_eq};
use test_case::test_case;

use crate::*;

#[test]
fn sdr_components() {
    // vertical strike-slip fault striking north
    let got = sdr_to_tensor(0.0, 90.0, 0.0);
    let is2 = std::f64::consts::FRAC_1_SQRT_2;
    let want = MomentTensor::new(0.0, 0.0, 0.0, 0.0, 0.0, -is2);
    assert_abs_diff_eq!(got, want, epsilon = 1e-12);

    // 45 degree thrust striking north
    let got = sdr_to_tensor(0.0, 45.0, 90.0);
    let want = MomentTensor::new(is2, 0.0, -is2, 0.0, 0.0, 0.0);
    assert_abs_diff_eq!(got, want, epsilon = 1e-12);
}

#[test]
fn sdr_is_traceless() {
    for (s, d, r) in [(321.0, 69.0, -173.0), (12.0, 33.0, 71.0)] {
        let m = sdr_to_tensor(s, d, r);
        assert_abs_diff_eq!(m.trace(), 0.0, epsilon = 1e-12);
        assert_eq!(m, NodalPlane::new(s, d, r).to_tensor());
    }
}

#[test]
fn reference_auxiliary_plane() {
    let np1 = NodalPlane::new(321.0, 69.0, -173.0);
    let np2 = auxiliary_plane(&np1).unwrap();
    assert_abs_diff_eq!(
        np2,
        NodalPlane::new(228.48, 83.47, -21.13),
        epsilon = 0.5
    );
    let back = np2.auxiliary().unwrap();
    assert_abs_diff_eq!(back, np1, epsilon = 1e-8);
}

#[test]
fn thrust_auxiliary_plane() {
    let got = auxiliary_plane(&NodalPlane::new(0.0, 45.0, 90.0)).unwrap();
    let want = NodalPlane::new(180.0, 45.0, 90.0);
    assert_abs_diff_eq!(got, want, epsilon = 1e-8);
}

#[test_case(321.0, 69.0, -173.0)]
#[test_case(10.0, 30.0, 45.0)]
#[test_case(200.0, 80.0, -60.0)]
#[test_case(45.0, 60.0, 120.0)]
#[test_case(90.0, 89.0, -10.0)]
#[test_case(300.0, 15.0, -100.0)]
fn involution(strike: f64, dip: f64, rake: f64) {
    let np1 = NodalPlane::new(strike, dip, rake);
    let np2 = auxiliary_plane(&np1).unwrap();
    assert!((0.0..360.0).contains(&np2.strike));
    assert!((0.0..=90.0).contains(&np2.dip));
    assert!((-180.0..=180.0).contains(&np2.rake));
    let back = auxiliary_plane(&np2).unwrap();
    assert_abs_diff_eq!(back, np1, epsilon = 1e-8);
    // both planes describe the same double couple
    assert_abs_diff_eq!(np1.to_tensor(), np2.to_tensor(), epsilon = 1e-10);
}

#[test]
fn horizontal_plane() {
    let got = auxiliary_plane(&NodalPlane::new(40.0, 0.0, 30.0));
    assert_eq!(
        got,
        Err(DomainError::HorizontalPlane {
            strike: 40.0,
            rake: 30.0
        })
    );
}

#[test]
fn vertical_slip() {
    let got = auxiliary_plane(&NodalPlane::new(30.0, 90.0, -90.0));
    assert_eq!(got, Err(DomainError::VerticalSlip { strike: 30.0 }));
}

#[test]
fn normal_and_slip_are_orthogonal() {
    let np = NodalPlane::new(123.0, 37.0, -58.0);
    assert_abs_diff_eq!(np.normal().norm(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(np.slip().norm(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(np.normal().dot(&np.slip()), 0.0, epsilon = 1e-12);
}

#[test_case(321.0, 69.0, -173.0)]
#[test_case(10.0, 30.0, 45.0)]
#[test_case(200.0, 80.0, -60.0)]
#[test_case(45.0, 60.0, 120.0)]
fn planes_from_tensor(strike: f64, dip: f64, rake: f64) {
    let np = NodalPlane::new(strike, dip, rake);
    let aux = auxiliary_plane(&np).unwrap();
    // scaling and an isotropic part do not move the planes
    let m = np.to_tensor().scaled(3.2e17).matrix() + Mat3::identity() * 1e16;
    let (np1, np2) = nodal_planes(&MomentTensor::from_matrix(&m)).unwrap();
    let matches =
        |a: &NodalPlane, b: &NodalPlane| abs_diff_eq!(*a, *b, epsilon = 1e-6);
    assert!(
        (matches(&np1, &np) && matches(&np2, &aux))
            || (matches(&np1, &aux) && matches(&np2, &np)),
        "got {np1:.3}, {np2:.3}, want {np:.3}, {aux:.3}"
    );
}

#[test]
fn planes_of_isotropic_tensor() {
    let got = nodal_planes(&MomentTensor::new(1.0, 1.0, 1.0, 0.0, 0.0, 0.0));
    assert_eq!(got, Err(DomainError::Isotropic));
}

#[test]
fn display() {
    let np = NodalPlane::new(228.48, 83.47, -21.13);
    assert_eq!(np.to_string(), "Strike = 228 Dip = 83 Rake = -21");
    assert_eq!(format!("{np:.1}"), "Strike = 228.5 Dip = 83.5 Rake = -21.1");
}
