//! Decomposition of a moment tensor into isotropic (ISO), double-couple (DC)
//! and compensated linear vector dipole (CLVD) percentages

use std::{cmp::Ordering, fmt::Display};

use nalgebra::SymmetricEigen;
use serde::{Deserialize, Serialize};

use crate::{DomainError, MomentTensor};

/// relative size below which the largest deviatoric eigenvalue is treated as
/// zero
const ISO_THRESH: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EigenDecomposition {
    /// eigenvalues in the order returned by the solver
    pub eigenvalues: [f64; 3],
    pub trace: f64,
    /// the isotropic eigenvalue, trace / 3
    pub isotropic: f64,
    /// eigenvalues with the isotropic part removed
    pub deviatoric: [f64; 3],
}

impl EigenDecomposition {
    pub fn new(tensor: &MomentTensor) -> Self {
        let SymmetricEigen { eigenvalues, .. } =
            SymmetricEigen::new(tensor.matrix());
        let eigenvalues = [eigenvalues[0], eigenvalues[1], eigenvalues[2]];
        let trace: f64 = eigenvalues.iter().sum();
        let isotropic = trace / 3.0;
        let deviatoric = eigenvalues.map(|m| m - isotropic);
        log::debug!(
            "eigenvalues = {eigenvalues:?}, trace = {trace:e}, \
             deviatoric = {deviatoric:?}"
        );
        Self {
            eigenvalues,
            trace,
            isotropic,
            deviatoric,
        }
    }

    /// deviatoric eigenvalues sorted by increasing absolute value, signs
    /// preserved
    pub fn sorted_deviatoric(&self) -> [f64; 3] {
        let mut d = self.deviatoric;
        d.sort_by(|a, b| {
            a.abs().partial_cmp(&b.abs()).unwrap_or(Ordering::Equal)
        });
        d
    }

    fn max_abs_eigenvalue(&self) -> f64 {
        self.eigenvalues.iter().fold(0.0, |acc, m| acc.max(m.abs()))
    }
}

/// Percentages of the isotropic, CLVD and double-couple parts of a tensor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Decomposition {
    pub iso: f64,
    pub clvd: f64,
    pub dc: f64,
}

impl Decomposition {
    /// the sum of the absolute percentages, 100 for any non-degenerate
    /// tensor
    pub fn total(&self) -> f64 {
        self.iso.abs() + self.clvd.abs() + self.dc.abs()
    }
}

impl Display for Decomposition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "percentage of ISO  : {:.2} %", self.iso.abs())?;
        writeln!(f, "percentage of DC   : {:.2} %", self.dc)?;
        writeln!(f, "percentage of CLVD : {:.2} %", self.clvd.abs())
    }
}

#[cfg(test)]
impl approx::AbsDiffEq for Decomposition {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        1e-8
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.iso.abs_diff_eq(&other.iso, epsilon)
            && self.clvd.abs_diff_eq(&other.clvd, epsilon)
            && self.dc.abs_diff_eq(&other.dc, epsilon)
    }
}

/// Split `tensor` into ISO, CLVD and DC percentages.
///
/// The isotropic percentage is normalized by the largest deviatoric
/// eigenvalue rather than by the tensor norm, and
///
/// ```text
/// eps  = |d_min| / |d_max|
/// clvd = -2 eps (100 - iso)
/// dc   = 100 - |iso| - |clvd|
/// ```
///
/// where `d_min` and `d_max` are the deviatoric eigenvalues of smallest and
/// largest magnitude. `eps` lies in [0, 1/2], so `clvd` is never positive
/// for a tensor with `iso` below 100. A tensor without a deviatoric part is
/// reported as 100% isotropic. A zero tensor is an error.
pub fn decompose(tensor: &MomentTensor) -> Result<Decomposition, DomainError> {
    let eig = tensor.eigen();
    let scale = eig.max_abs_eigenvalue();
    if scale == 0.0 {
        return Err(DomainError::ZeroTensor);
    }
    let [d_min, _, d_max] = eig.sorted_deviatoric();
    if d_max.abs() <= ISO_THRESH * scale {
        log::debug!("no deviatoric part, treating tensor as isotropic");
        return Ok(Decomposition {
            iso: 100.0,
            clvd: 0.0,
            dc: 0.0,
        });
    }
    let eps = d_min.abs() / d_max.abs();
    let iso = 100.0 * eig.isotropic / d_max.abs();
    let clvd = -2.0 * eps * (100.0 - iso);
    let dc = 100.0 - iso.abs() - clvd.abs();
    if dc < 0.0 {
        log::warn!(
            "negative double-couple percentage {dc:.2}, isotropic part \
             dominates the deviatoric normalization"
        );
    }
    Ok(Decomposition { iso, clvd, dc })
}
