//! Nodal planes and their relation to double-couple moment tensors.
//!
//! Plane geometry is done in (north, east, down) with the Aki & Richards
//! conventions: for strike φ, dip δ and rake λ the fault normal is
//!
//! ```text
//! n = (-sin δ sin φ, sin δ cos φ, -cos δ)
//! ```
//!
//! and the slip vector of the hanging wall is `u = cos λ f + sin λ g`, where
//! `f` is the horizontal strike direction and `g` the up-dip direction in the
//! plane. Exchanging `n` and `u` leaves the double couple unchanged and gives
//! the auxiliary plane.

use std::{f64::consts::FRAC_1_SQRT_2, fmt::Display};

use serde::{Deserialize, Serialize};

use crate::{
    DomainError, MomentTensor, Vec3, axes::principal_axes, wrap_azimuth,
};

/// threshold for treating sin(dip) or the horizontal part of a unit vector
/// as zero
const DEGEN: f64 = 1e-10;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodalPlane {
    /// degrees clockwise from north, [0, 360)
    pub strike: f64,
    /// degrees from horizontal, [0, 90]
    pub dip: f64,
    /// degrees, [-180, 180]
    pub rake: f64,
}

impl NodalPlane {
    pub fn new(strike: f64, dip: f64, rake: f64) -> Self {
        Self { strike, dip, rake }
    }

    pub fn to_tensor(&self) -> MomentTensor {
        sdr_to_tensor(self.strike, self.dip, self.rake)
    }

    pub fn auxiliary(&self) -> Result<Self, DomainError> {
        auxiliary_plane(self)
    }

    /// unit normal of the hanging wall in (north, east, down)
    pub fn normal(&self) -> Vec3 {
        let (ss, cs) = self.strike.to_radians().sin_cos();
        let (sd, cd) = self.dip.to_radians().sin_cos();
        Vec3::new(-sd * ss, sd * cs, -cd)
    }

    /// unit slip vector of the hanging wall in (north, east, down)
    pub fn slip(&self) -> Vec3 {
        let (ss, cs) = self.strike.to_radians().sin_cos();
        let (sd, cd) = self.dip.to_radians().sin_cos();
        let (sr, cr) = self.rake.to_radians().sin_cos();
        Vec3::new(cr * cs + cd * sr * ss, cr * ss - cd * sr * cs, -sr * sd)
    }

    /// recover strike, dip and rake from a fault normal and slip vector in
    /// (north, east, down). both vectors are flipped together if the normal
    /// points down. a horizontal plane gets strike 0
    pub(crate) fn from_vectors(normal: &Vec3, slip: &Vec3) -> Self {
        let (n, u) = if normal.z > 0.0 {
            (-normal, -slip)
        } else {
            (*normal, *slip)
        };
        let n = n.normalize();
        let u = u.normalize();
        let dip = (-n.z).clamp(-1.0, 1.0).acos();
        let strike = if n.x.hypot(n.y) < DEGEN {
            0.0
        } else {
            (-n.x).atan2(n.y)
        };
        let (ss, cs) = strike.sin_cos();
        let (sd, cd) = dip.sin_cos();
        let along = Vec3::new(cs, ss, 0.0);
        let updip = Vec3::new(cd * ss, -cd * cs, -sd);
        let rake = u.dot(&updip).atan2(u.dot(&along));
        Self {
            strike: wrap_azimuth(strike.to_degrees()),
            dip: dip.to_degrees(),
            rake: rake.to_degrees(),
        }
    }
}

impl Display for NodalPlane {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let precision = f.precision().unwrap_or(0);
        write!(
            f,
            "Strike = {:.p$} Dip = {:.p$} Rake = {:.p$}",
            self.strike,
            self.dip,
            self.rake,
            p = precision
        )
    }
}

#[cfg(test)]
impl approx::AbsDiffEq for NodalPlane {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        1e-8
    }

    /// strikes are compared modulo 360
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        let ds = (self.strike - other.strike).rem_euclid(360.0);
        ds.min(360.0 - ds) <= epsilon
            && self.dip.abs_diff_eq(&other.dip, epsilon)
            && self.rake.abs_diff_eq(&other.rake, epsilon)
    }
}

/// Double-couple moment tensor for the fault with `strike`, `dip` and `rake`
/// in degrees, using the Aki & Richards expressions in (up, south, east) with
/// an overall factor of 1/sqrt(2). Angles are not range checked.
pub fn sdr_to_tensor(strike: f64, dip: f64, rake: f64) -> MomentTensor {
    let strike = strike.to_radians();
    let dip = dip.to_radians();
    let rake = rake.to_radians();
    let is2 = FRAC_1_SQRT_2;

    let (ss, cs) = strike.sin_cos();
    let (s2s, c2s) = (2.0 * strike).sin_cos();
    let (sd, cd) = dip.sin_cos();
    let (s2d, c2d) = (2.0 * dip).sin_cos();
    let (sr, cr) = rake.sin_cos();

    let mrr = is2 * (s2d * sr);
    let mtt = -is2 * (sd * cr * s2s + s2d * sr * ss * ss);
    let mpp = is2 * (sd * cr * s2s - s2d * sr * cs * cs);
    let mtp = -is2 * (sd * cr * c2s + 0.5 * s2d * sr * s2s);
    let mrp = is2 * (cd * cr * ss - c2d * sr * cs);
    let mrt = -is2 * (cd * cr * cs + c2d * sr * ss);

    MomentTensor::new(mrr, mtt, mpp, mrt, mrp, mtp)
}

/// The second nodal plane of the double couple with first plane `np`.
///
/// Fails for a horizontal input plane, where the hanging wall and the rake
/// are ambiguous, and for vertical slip, whose auxiliary plane is horizontal
/// with no defined strike.
pub fn auxiliary_plane(np: &NodalPlane) -> Result<NodalPlane, DomainError> {
    if np.dip.to_radians().sin().abs() < DEGEN {
        return Err(DomainError::HorizontalPlane {
            strike: np.strike,
            rake: np.rake,
        });
    }
    let normal = np.normal();
    let slip = np.slip();
    if slip.x.hypot(slip.y) < DEGEN {
        return Err(DomainError::VerticalSlip { strike: np.strike });
    }
    let aux = NodalPlane::from_vectors(&slip, &normal);
    log::debug!("auxiliary plane of {np:.2} is {aux:.2}");
    Ok(aux)
}

/// The two nodal planes of the best double couple of `tensor`, built from its
/// T and P axes.
pub fn nodal_planes(
    tensor: &MomentTensor,
) -> Result<(NodalPlane, NodalPlane), DomainError> {
    let axes = principal_axes(tensor)?;
    let t = axes.t.vector();
    let p = axes.p.vector();
    let n1 = (t + p) * FRAC_1_SQRT_2;
    let n2 = (t - p) * FRAC_1_SQRT_2;
    Ok((
        NodalPlane::from_vectors(&n1, &n2),
        NodalPlane::from_vectors(&n2, &n1),
    ))
}
