//! Empirical dissociation constants for seawater acid-base pairs.
//!
//! Every function takes temperature in Kelvin and practical salinity and
//! evaluates one published fit exactly as the source writes it: either as
//! `ln K` (returned through `exp`) or as `pK` (returned through `10^-pK`).
//! Nothing is range-checked; outside a fit's calibration range the result is
//! an extrapolation.
//!
//! The native pH scale of each constant is given in its doc comment and in
//! [`crate::dissociation::catalog::FORMULAS`].
#![allow(clippy::excessive_precision)]

use crate::chemistry::{ZERO_CELSIUS_K, ionic_strength};
use serde::Serialize;

/// Carbonic acid K1 = [H+][HCO3-]/[CO2*] and K2 = [H+][CO3--]/[HCO3-].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CarbonicConstants {
    pub k1: f64,
    pub k2: f64,
}

/// Phosphoric acid stepwise constants.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PhosphoricConstants {
    /// [H+][H2PO4-]/[H3PO4]
    pub k1: f64,
    /// [H+][HPO4--]/[H2PO4-]
    pub k2: f64,
    /// [H+][PO4---]/[HPO4--]
    pub k3: f64,
}

fn from_pk(pk: f64) -> f64 {
    10f64.powf(-pk)
}

/// Water fraction correction, converts mol/kg-H2O to mol/kg-sw.
fn ln_water_fraction(psal: f64) -> f64 {
    (1.0 - 0.001_005 * psal).ln()
}

/// Carbonic acid, Total scale [Lueker, Dickson & Keeling 2000, Eqs. 16-17].
///
/// Calibrated for 2-35 °C and S 19-43.
pub fn carbonic_lueker2000(temp_k: f64, psal: f64) -> CarbonicConstants {
    let ln_t = temp_k.ln();
    let s2 = psal * psal;

    let pk1 = 3633.86 / temp_k - 61.2172 + 9.6777 * ln_t - 0.011555 * psal + 0.0001152 * s2;
    let pk2 = 471.78 / temp_k + 25.929 - 3.16967 * ln_t - 0.01781 * psal + 0.0001122 * s2;

    CarbonicConstants {
        k1: from_pk(pk1),
        k2: from_pk(pk2),
    }
}

/// Boric acid, Total scale [Dickson 1990a, Eq. 23].
///
/// Calibrated for 0-45 °C and S 5-45.
pub fn boric_dickson1990(temp_k: f64, psal: f64) -> f64 {
    let sqrt_s = psal.sqrt();
    let s15 = psal * sqrt_s;
    let s2 = psal * psal;

    let ln_kb = (-8966.90 - 2890.53 * sqrt_s - 77.942 * psal + 1.728 * s15 - 0.0996 * s2)
        / temp_k
        + 148.0248
        + 137.1942 * sqrt_s
        + 1.62142 * psal
        - (24.4344 + 25.085 * sqrt_s + 0.2474 * psal) * temp_k.ln()
        + 0.053105 * sqrt_s * temp_k;

    ln_kb.exp()
}

/// Ion product of water, Total scale [Dickson, Sabine & Christian 2007].
pub fn water_dickson2007(temp_k: f64, psal: f64) -> f64 {
    let ln_t = temp_k.ln();

    let ln_kw = 148.9652 - 13847.26 / temp_k - 23.6521 * ln_t
        + (118.67 / temp_k - 5.977 + 1.0495 * ln_t) * psal.sqrt()
        - 0.01615 * psal;

    ln_kw.exp()
}

/// Bisulfate, Free scale [Dickson 1990b, Eqs. 22-23].
///
/// Calibrated for 0-45 °C and S 5-45. This is the constant behind every
/// Total/Free conversion.
pub fn bisulfate_dickson1990(temp_k: f64, psal: f64) -> f64 {
    let ln_t = temp_k.ln();
    let i = ionic_strength(psal);
    let sqrt_i = i.sqrt();

    let ln_khso4 = -4276.1 / temp_k + 141.328 - 23.093 * ln_t
        + (-13856.0 / temp_k + 324.57 - 47.986 * ln_t) * sqrt_i
        + (35474.0 / temp_k - 771.54 + 114.723 * ln_t) * i
        - (2698.0 / temp_k) * i * sqrt_i
        + (1776.0 / temp_k) * i * i
        + ln_water_fraction(psal);

    ln_khso4.exp()
}

/// Hydrofluoric acid, Total scale [Perez & Fraga 1987].
///
/// Calibrated for 9-33 °C and S 10-40.
pub fn hydrofluoric_perez1987(temp_k: f64, psal: f64) -> f64 {
    let ln_khf = -(-874.0 / temp_k - 0.111 * psal.sqrt() + 9.68);
    ln_khf.exp()
}

/// Hydrofluoric acid, Free scale [Dickson & Riley 1979].
///
/// Calibrated for 5-35 °C and S 10-48.
pub fn hydrofluoric_dickson1979(temp_k: f64, psal: f64) -> f64 {
    let i = ionic_strength(psal);
    let ln_khf = 1590.2 / temp_k - 12.641 + 1.525 * i.sqrt() + ln_water_fraction(psal);
    ln_khf.exp()
}

/// Phosphoric acid, Total scale [Dickson, Sabine & Christian 2007].
pub fn phosphoric_dickson2007(temp_k: f64, psal: f64) -> PhosphoricConstants {
    let ln_t = temp_k.ln();
    let sqrt_s = psal.sqrt();

    let ln_kp1 = -4576.752 / temp_k + 115.525 - 18.453 * ln_t
        + (-106.736 / temp_k + 0.69171) * sqrt_s
        + (-0.65643 / temp_k - 0.01844) * psal;

    let ln_kp2 = -8814.715 / temp_k + 172.0883 - 27.927 * ln_t
        + (-160.34 / temp_k + 1.3566) * sqrt_s
        + (0.37335 / temp_k - 0.05778) * psal;

    let ln_kp3 = -3070.75 / temp_k - 18.141
        + (17.27039 / temp_k + 2.81197) * sqrt_s
        + (-44.99486 / temp_k - 0.09984) * psal;

    PhosphoricConstants {
        k1: ln_kp1.exp(),
        k2: ln_kp2.exp(),
        k3: ln_kp3.exp(),
    }
}

/// Silicic acid, Total scale [Millero 1995, as given by Dickson et al. 2007].
///
/// KSi = [SiO(OH)3-][H+]/[Si(OH)4]
pub fn silicic_millero1995(temp_k: f64, psal: f64) -> f64 {
    let i = ionic_strength(psal);

    let ln_ksi = -8904.2 / temp_k + 117.385 - 19.334 * temp_k.ln()
        + (-458.79 / temp_k + 3.5913) * i.sqrt()
        + (188.74 / temp_k - 1.5998) * i
        + (-12.1652 / temp_k + 0.07871) * i * i
        + ln_water_fraction(psal);

    ln_ksi.exp()
}

/// Ammonium [Bell, Johnson, Jickells & Liss 2008, Eq. 3]. pH scale not stated by the source.
///
/// The fit is written in °C; `temp_k` is converted before evaluation.
pub fn ammonium_bell2008(temp_k: f64, psal: f64) -> f64 {
    let temp_c = temp_k - ZERO_CELSIUS_K;
    let pk = 10.0423 - 0.0315536 * temp_c + 0.003071 * psal;
    from_pk(pk)
}

/// 2-aminopyridine, Seawater scale [Bates & Erickson 1986, Eq. 10].
///
/// Stoichiometric constant, calibrated for 5-40 °C and S 30-40.
pub fn aminopyridine_bates1986(temp_k: f64, psal: f64) -> f64 {
    let pk = 2498.31 / temp_k - 15.3274 + 2.4050 * temp_k.ln()
        + (0.012929 - 2.9417e-5 * temp_k) * psal;
    from_pk(pk)
}
