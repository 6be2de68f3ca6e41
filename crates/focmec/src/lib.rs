//! Seismic moment tensors and focal mechanisms: conversions between nodal
//! planes and tensors, ISO/DC/CLVD decomposition, principal axes, Frohlich
//! ternary classification and Global CMT record parsing.

use std::{error::Error, fmt::Display};

use nalgebra as na;
use serde::{Deserialize, Serialize};

pub mod axes;
pub mod beachball;
pub mod cmt;
pub mod decomp;
pub mod magnitude;
pub mod plane;
pub mod ternary;


pub use axes::{PrincipalAxes, PrincipalAxis, principal_axes};
pub use beachball::Beachball;
pub use cmt::{CmtError, CmtSolution, load_tensors, parse_tensors};
pub use decomp::{Decomposition, EigenDecomposition, decompose};
pub use plane::{NodalPlane, auxiliary_plane, nodal_planes, sdr_to_tensor};
pub use ternary::{Mechanism, TernaryPoint};

pub type Vec3 = na::Vector3<f64>;
pub type Mat3 = na::Matrix3<f64>;

/// Geometry for which a decomposition or plane relation is undefined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DomainError {
    /// every component of the tensor is zero
    ZeroTensor,
    /// the tensor has no deviatoric part, so no axes or planes exist
    Isotropic,
    /// sin(dip) vanishes on the input plane
    HorizontalPlane { strike: f64, rake: f64 },
    /// the slip vector is vertical, so the auxiliary plane is horizontal
    /// and its strike is undefined
    VerticalSlip { strike: f64 },
}

impl Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::ZeroTensor => write!(f, "moment tensor is zero"),
            DomainError::Isotropic => {
                write!(f, "moment tensor is purely isotropic")
            }
            DomainError::HorizontalPlane { strike, rake } => write!(
                f,
                "horizontal nodal plane (strike {strike}, rake {rake}) \
                 has no unique auxiliary plane"
            ),
            DomainError::VerticalSlip { strike } => write!(
                f,
                "vertical slip on plane with strike {strike} gives a \
                 horizontal auxiliary plane"
            ),
        }
    }
}

impl Error for DomainError {}

/// A symmetric seismic moment tensor in the (up, south, east) convention used
/// by the Global CMT catalog. Units are whatever the caller supplies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MomentTensor {
    pub mrr: f64,
    pub mtt: f64,
    pub mpp: f64,
    pub mrt: f64,
    pub mrp: f64,
    pub mtp: f64,
}

impl MomentTensor {
    pub fn new(
        mrr: f64,
        mtt: f64,
        mpp: f64,
        mrt: f64,
        mrp: f64,
        mtp: f64,
    ) -> Self {
        Self {
            mrr,
            mtt,
            mpp,
            mrt,
            mrp,
            mtp,
        }
    }

    /// build a tensor from six values in the order Mrr, Mtt, Mpp, Mrt, Mrp,
    /// Mtp. returns `None` if `v` does not hold exactly six values
    pub fn from_slice(v: &[f64]) -> Option<Self> {
        match *v {
            [mrr, mtt, mpp, mrt, mrp, mtp] => {
                Some(Self::new(mrr, mtt, mpp, mrt, mrp, mtp))
            }
            _ => None,
        }
    }

    /// build a tensor from a symmetric matrix with rows and columns ordered
    /// (r, t, p). only the upper triangle is read
    pub fn from_matrix(m: &Mat3) -> Self {
        Self::new(
            m[(0, 0)],
            m[(1, 1)],
            m[(2, 2)],
            m[(0, 1)],
            m[(0, 2)],
            m[(1, 2)],
        )
    }

    pub fn matrix(&self) -> Mat3 {
        na::matrix![
            self.mrr, self.mrt, self.mrp;
            self.mrt, self.mtt, self.mtp;
            self.mrp, self.mtp, self.mpp;
        ]
    }

    pub fn components(&self) -> [f64; 6] {
        [self.mrr, self.mtt, self.mpp, self.mrt, self.mrp, self.mtp]
    }

    pub fn trace(&self) -> f64 {
        self.mrr + self.mtt + self.mpp
    }

    pub fn scaled(&self, k: f64) -> Self {
        let [mrr, mtt, mpp, mrt, mrp, mtp] = self.components().map(|c| c * k);
        Self::new(mrr, mtt, mpp, mrt, mrp, mtp)
    }

    /// scalar moment from the Frobenius norm, sqrt(sum M_ij^2 / 2)
    pub fn scalar_moment(&self) -> f64 {
        (self.matrix().norm_squared() / 2.0).sqrt()
    }

    pub fn eigen(&self) -> EigenDecomposition {
        EigenDecomposition::new(self)
    }

    pub fn decompose(&self) -> Result<Decomposition, DomainError> {
        decompose(self)
    }
}

impl Display for MomentTensor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let precision = f.precision().unwrap_or(6);
        let width = f.width().unwrap_or(precision + 8);
        let m = self.matrix();
        for i in 0..3 {
            writeln!(
                f,
                "{:w$.p$e}{:w$.p$e}{:w$.p$e}",
                m[(i, 0)],
                m[(i, 1)],
                m[(i, 2)],
                w = width,
                p = precision,
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
impl approx::AbsDiffEq for MomentTensor {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        1e-12
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.components()
            .iter()
            .zip(other.components())
            .all(|(a, b)| a.abs_diff_eq(&b, epsilon))
    }
}

/// wrap an azimuth in degrees into [0, 360)
pub(crate) fn wrap_azimuth(deg: f64) -> f64 {
    let w = deg.rem_euclid(360.0);
    if w >= 360.0 { w - 360.0 } else { w }
}
