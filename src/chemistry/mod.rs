//! Chemistry module: physical constants, ionic strength and salinity-derived totals.
//!
//! This module provides:
//! - Relative molar masses and the salinity/chlorinity ratio used by the estimators
//! - Ionic strength of seawater from practical salinity
//! - Total borate, fluoride and sulfate estimated from practical salinity
//! - Assembly of the fixed-order concentration set consumed by titration solvers
//!
//! Units conventions:
//! - Salinity is practical salinity (PSS-78), dimensionless
//! - All totals are mol/kg of seawater
//! - Ionic strength is mol/kg-H2O
//!
//! Design notes:
//! - Every estimate is linear in salinity and passes through the origin
//! - Nothing here validates its input: negative or huge salinities are
//!   evaluated as written
//!
//! # Examples
//! ```rust
//! use equilibria_rs::chemistry::{concentration_set, ionic_strength, total_borate};
//! use equilibria_rs::models::Totals;
//!
//! let set = concentration_set(35.0, &Totals { carbon: 0.002, ..Default::default() });
//! assert_eq!(set.carbon, 0.002);
//! assert_eq!(set.borate, total_borate(35.0));
//! assert!(ionic_strength(35.0) > 0.7);
//! ```
//!
//! # Panics
//! None of the functions panic.
use crate::models::{ConcentrationSet, Totals};

/// 0 °C in Kelvin.
pub const ZERO_CELSIUS_K: f64 = 273.15;

/// Relative molar masses (g/mol).
pub const RMM_B: f64 = 10.811;
pub const RMM_F: f64 = 18.998_403_163;
pub const RMM_SO4: f64 = 96.061;

/// Practical salinity per unit chlorinity (S = 1.80655 Cl).
pub const PSAL_TO_CL: f64 = 1.806_55;

/// Boron to salinity ratio, g/kg per unit S (Lee et al. 2010).
pub const B_PER_PSAL: f64 = 0.1336e-3;
/// Fluoride to chlorinity ratio, g/kg per unit Cl (Warner 1971).
pub const F_PER_CL: f64 = 6.75e-5;
/// Sulfate to chlorinity ratio, g/kg per unit Cl.
pub const SO4_PER_CL: f64 = 0.14;

/// Ionic strength (mol/kg-H2O) of seawater at practical salinity `psal`.
///
/// `I = 19.924 S / (1000 - 1.005 S)`. Singular at S ≈ 994.5, which is not a
/// seawater salinity.
pub fn ionic_strength(psal: f64) -> f64 {
    19.924 * psal / (1000.0 - 1.005 * psal)
}

/// Total borate (mol/kg-sw) estimated from practical salinity [Lee et al. 2010].
pub fn total_borate(psal: f64) -> f64 {
    psal * B_PER_PSAL / RMM_B
}

/// Total fluoride (mol/kg-sw) estimated from practical salinity [Warner 1971].
pub fn total_fluoride(psal: f64) -> f64 {
    psal * F_PER_CL / (RMM_F * PSAL_TO_CL)
}

/// Total sulfate (mol/kg-sw) estimated from practical salinity.
pub fn total_sulfate(psal: f64) -> f64 {
    (SO4_PER_CL / RMM_SO4) * (psal / PSAL_TO_CL)
}

/// Assemble the concentration set for a sample.
///
/// Borate, sulfate and fluoride are estimated from `psal`; carbon,
/// phosphate and silicate pass through from `totals` unchanged.
pub fn concentration_set(psal: f64, totals: &Totals) -> ConcentrationSet {
    ConcentrationSet {
        carbon: totals.carbon,
        borate: total_borate(psal),
        sulfate: total_sulfate(psal),
        fluoride: total_fluoride(psal),
        phosphate: totals.phosphate,
        silicate: totals.silicate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ionic_strength_at_reference_salinity() {
        assert_eq!(ionic_strength(0.0), 0.0);
        let i = ionic_strength(35.0);
        assert!((i - 0.722_763).abs() < 1e-5, "I(35) = {i}");
    }

    #[test]
    fn ionic_strength_increases_with_salinity() {
        let mut prev = ionic_strength(0.0);
        for step in 1..=400 {
            let i = ionic_strength(step as f64 * 0.1);
            assert!(i > prev);
            prev = i;
        }
    }

    #[test]
    fn totals_vanish_at_zero_salinity() {
        assert_eq!(total_borate(0.0), 0.0);
        assert_eq!(total_fluoride(0.0), 0.0);
        assert_eq!(total_sulfate(0.0), 0.0);
    }

    #[test]
    fn totals_at_reference_salinity() {
        assert!((total_borate(35.0) - 4.325_224e-4).abs() < 1e-9);
        assert!((total_fluoride(35.0) - 6.883_427e-5).abs() < 1e-10);
        assert!((total_sulfate(35.0) - 2.823_573e-2).abs() < 1e-7);
    }

    #[test]
    fn totals_are_linear_in_salinity() {
        for f in [total_borate, total_fluoride, total_sulfate] {
            let a = f(17.5);
            let b = f(35.0);
            assert!((2.0 * a - b).abs() <= 1e-15 * b.abs().max(1.0));
        }
    }

    #[test]
    fn concentration_set_keeps_slot_order() {
        let totals = Totals {
            carbon: 0.002,
            phosphate: 1e-6,
            silicate: 5e-6,
        };
        let arr = concentration_set(35.0, &totals).as_array();
        assert_eq!(arr[0], 0.0);
        assert_eq!(arr[1], 0.002);
        assert_eq!(arr[2], total_borate(35.0));
        assert_eq!(arr[3], total_sulfate(35.0));
        assert_eq!(arr[4], total_fluoride(35.0));
        assert_eq!(arr[5], 1e-6);
        assert_eq!(arr[6], 5e-6);
    }

    #[test]
    fn concentration_set_defaults_to_zero_totals() {
        let set = concentration_set(33.0, &Totals::default());
        assert_eq!(set.carbon, 0.0);
        assert_eq!(set.phosphate, 0.0);
        assert_eq!(set.silicate, 0.0);
    }
}
