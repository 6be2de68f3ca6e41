use std::{cmp::Ordering, fmt::Display};

use nalgebra::SymmetricEigen;
use serde::{Deserialize, Serialize};

use crate::{DomainError, MomentTensor, Vec3, wrap_azimuth};

/// An eigenvector of a moment tensor as a downward pointing axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrincipalAxis {
    /// the eigenvalue
    pub value: f64,
    /// degrees clockwise from north, [0, 360)
    pub azimuth: f64,
    /// degrees below horizontal, [0, 90]
    pub plunge: f64,
}

impl PrincipalAxis {
    /// build an axis from an eigenvector in (up, south, east), flipping it to
    /// point into the lower hemisphere
    fn from_use(value: f64, v: &Vec3) -> Self {
        let ned = Vec3::new(-v.y, v.z, -v.x).normalize();
        let ned = if ned.z < 0.0 { -ned } else { ned };
        let plunge = ned.z.clamp(-1.0, 1.0).asin().to_degrees();
        let azimuth = ned.y.atan2(ned.x).to_degrees();
        Self {
            value,
            azimuth: wrap_azimuth(azimuth),
            plunge,
        }
    }

    /// unit vector along the axis in (north, east, down)
    pub fn vector(&self) -> Vec3 {
        let (sa, ca) = self.azimuth.to_radians().sin_cos();
        let (sp, cp) = self.plunge.to_radians().sin_cos();
        Vec3::new(cp * ca, cp * sa, sp)
    }
}

impl Display for PrincipalAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "VAL = {:10.3e} PLG = {:3.0} AZM = {:3.0}",
            self.value, self.plunge, self.azimuth
        )
    }
}

/// Tension, null and pressure axes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrincipalAxes {
    pub t: PrincipalAxis,
    pub n: PrincipalAxis,
    pub p: PrincipalAxis,
}

impl Display for PrincipalAxes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "T axis: {}", self.t)?;
        writeln!(f, "N axis: {}", self.n)?;
        writeln!(f, "P axis: {}", self.p)
    }
}

/// compute the T (largest eigenvalue), N and P (smallest eigenvalue) axes of
/// `tensor`. errors if the tensor has no deviatoric part, since every
/// direction is then an eigenvector
pub fn principal_axes(
    tensor: &MomentTensor,
) -> Result<PrincipalAxes, DomainError> {
    let SymmetricEigen {
        eigenvectors: vecs,
        eigenvalues: vals,
    } = SymmetricEigen::new(tensor.matrix());
    let scale = vals.amax();
    if scale == 0.0 {
        return Err(DomainError::ZeroTensor);
    }
    let mut order = [0, 1, 2];
    order.sort_by(|&a, &b| {
        vals[a].partial_cmp(&vals[b]).unwrap_or(Ordering::Equal)
    });
    let [ip, in_, it] = order;
    if (vals[it] - vals[ip]).abs() <= 1e-12 * scale {
        return Err(DomainError::Isotropic);
    }
    let axis = |i: usize| {
        PrincipalAxis::from_use(vals[i], &vecs.column(i).into_owned())
    };
    let axes = PrincipalAxes {
        t: axis(it),
        n: axis(in_),
        p: axis(ip),
    };
    log::debug!("principal axes:\n{axes}");
    Ok(axes)
}
