//! Classification of focal mechanisms on the ternary diagram of Frohlich and
//! Apperson (1992), "Earthquake focal mechanisms, moment tensors, and the
//! consistency of seismic activity near plate boundaries", Tectonics 11.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::PrincipalAxes;

/// minimum N axis plunge for a strike-slip mechanism
const STRIKE_SLIP_PLUNGE: f64 = 60.0;
/// minimum T axis plunge for a reverse mechanism
const REVERSE_PLUNGE: f64 = 50.0;
/// minimum P axis plunge for a normal mechanism
const NORMAL_PLUNGE: f64 = 60.0;

/// directions of the strike-slip, normal, and reverse vertices in degrees
const VERTICES: [f64; 3] = [90.0, 210.0, 330.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mechanism {
    StrikeSlip,
    Normal,
    Reverse,
    Odd,
}

impl Mechanism {
    pub fn classify(axes: &PrincipalAxes) -> Self {
        if axes.n.plunge > STRIKE_SLIP_PLUNGE {
            Mechanism::StrikeSlip
        } else if axes.t.plunge > REVERSE_PLUNGE {
            Mechanism::Reverse
        } else if axes.p.plunge > NORMAL_PLUNGE {
            Mechanism::Normal
        } else {
            Mechanism::Odd
        }
    }
}

impl Display for Mechanism {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Mechanism::StrikeSlip => "strike-slip",
            Mechanism::Normal => "normal",
            Mechanism::Reverse => "reverse",
            Mechanism::Odd => "odd",
        })
    }
}

/// Position of a mechanism in the ternary diagram
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TernaryPoint {
    /// sin of the N, P and T plunges, scaled to sum to 1
    pub fractions: [f64; 3],
    pub x: f64,
    pub y: f64,
}

impl TernaryPoint {
    pub fn new(axes: &PrincipalAxes) -> Self {
        let fractions = [axes.n.plunge, axes.p.plunge, axes.t.plunge]
            .map(|pl| pl.to_radians().sin());
        // at least one axis of an orthonormal triple plunges 35 degrees or
        // more, so the total is never zero
        let total: f64 = fractions.iter().sum();
        let fractions = fractions.map(|f| f / total);
        let (mut x, mut y) = (0.0, 0.0);
        for (f, deg) in fractions.iter().zip(VERTICES) {
            let (s, c) = deg.to_radians().sin_cos();
            x += f * c;
            y += f * s;
        }
        Self { fractions, x, y }
    }
}

impl Display for TernaryPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [ss, nf, rf] = self.fractions;
        write!(
            f,
            "strike-slip = {ss:.3} normal = {nf:.3} reverse = {rf:.3} \
             (x = {:.3}, y = {:.3})",
            self.x, self.y
        )
    }
}
