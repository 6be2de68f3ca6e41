//! Conversions between seismic moment, moment magnitude and radiated energy
//! after Hanks & Kanamori (1979) and Kanamori (1977).
//!
//! Both directions use the 10.7 constant of Hanks & Kanamori, so
//! [mw_to_moment] inverts [moment_to_mw] exactly. This is not the common
//! shortcut `M0 = 10^(1.5 (Mw + 6))` N·m, which gives 3.162e19 N·m for
//! Mw 7 where this module gives 3.548e19 N·m. [radiated_energy] takes M0 in
//! N·m and returns joules, so scripts that feed it dyne·cm report an energy
//! 1e7 times larger.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// dyne·cm in one N·m
pub const DYNE_CM_PER_NM: f64 = 1e7;

/// ratio of radiated energy to seismic moment
const ENERGY_RATIO: f64 = 1.6e-5;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Units {
    #[default]
    NewtonMeter,
    DyneCm,
}

impl Units {
    /// convert `m0` from `self` to dyne·cm
    pub fn to_dyne_cm(&self, m0: f64) -> f64 {
        match self {
            Units::NewtonMeter => m0 * DYNE_CM_PER_NM,
            Units::DyneCm => m0,
        }
    }

    /// convert `m0` from `self` to N·m
    pub fn to_newton_meter(&self, m0: f64) -> f64 {
        match self {
            Units::NewtonMeter => m0,
            Units::DyneCm => m0 / DYNE_CM_PER_NM,
        }
    }
}

impl Display for Units {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Units::NewtonMeter => "N.m",
                Units::DyneCm => "dyne.cm",
            }
        )
    }
}

/// moment magnitude of a seismic moment in dyne·cm
pub fn moment_to_mw(m0: f64) -> f64 {
    (2.0 / 3.0) * m0.log10() - 10.7
}

/// seismic moment in dyne·cm of moment magnitude `mw`, the inverse of
/// [moment_to_mw]
pub fn mw_to_moment(mw: f64) -> f64 {
    10f64.powf(1.5 * (mw + 10.7))
}

/// radiated energy in J of an event with seismic moment `m0` in N·m
pub fn radiated_energy(m0: f64) -> f64 {
    ENERGY_RATIO * m0
}
