use serde::{Deserialize, Serialize};

/// Temperature and salinity at which every constant of one query is evaluated.
///
/// - `temp_k`: temperature in Kelvin (must be > 0; not checked)
/// - `psal`: practical salinity (PSS-78, dimensionless)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhysicalState {
    pub temp_k: f64,
    pub psal: f64,
}

impl PhysicalState {
    pub fn new(temp_k: f64, psal: f64) -> Self {
        Self { temp_k, psal }
    }

    /// Build a state from a Celsius temperature.
    pub fn from_celsius(temp_c: f64, psal: f64) -> Self {
        Self::new(temp_c + crate::chemistry::ZERO_CELSIUS_K, psal)
    }

    pub fn temp_c(&self) -> f64 {
        self.temp_k - crate::chemistry::ZERO_CELSIUS_K
    }
}

/// Caller-supplied totals in mol/kg-sw. Omitted values are zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Totals {
    pub carbon: f64,
    pub phosphate: f64,
    pub silicate: f64,
}

/// Total concentrations (mol/kg-sw) in the fixed order consumed by titration solvers.
///
/// Positional layout, see [`ConcentrationSet::as_array`]:
/// `[reserved, CT, BT, ST, FT, PT, SiT]`. Slot 0 is a placeholder for the
/// hydrogen-ion bookkeeping entry and is always `0.0`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConcentrationSet {
    pub carbon: f64,
    pub borate: f64,
    pub sulfate: f64,
    pub fluoride: f64,
    pub phosphate: f64,
    pub silicate: f64,
}

impl ConcentrationSet {
    pub const LEN: usize = 7;

    pub fn as_array(&self) -> [f64; Self::LEN] {
        [
            0.0,
            self.carbon,
            self.borate,
            self.sulfate,
            self.fluoride,
            self.phosphate,
            self.silicate,
        ]
    }
}

/// Convention used to express hydrogen-ion concentration, and hence any
/// dissociation constant, in seawater.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhScale {
    Total,
    Free,
    Seawater,
}

impl core::fmt::Display for PhScale {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            PhScale::Total => "Total",
            PhScale::Free => "Free",
            PhScale::Seawater => "Seawater",
        };
        f.write_str(name)
    }
}

/// Which published hydrofluoric acid formula the assembler uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HydrofluoricSource {
    /// Perez & Fraga (1987), Total scale. Converted with the Total->Free factor.
    #[default]
    PerezFraga1987,
    /// Dickson & Riley (1979), Free scale. Used as-is.
    DicksonRiley1979,
}

/// Knobs for [`crate::dissociation::assembler::free_scale_constants_with`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblyOptions {
    pub hydrofluoric: HydrofluoricSource,
}

/// The complete constant set for the carbonate/borate/water/sulfate/fluoride/
/// phosphate/silicate system, all on one pH scale.
///
/// Positional layout, see [`EquilibriumConstants::as_array`]:
/// `[K1, K2, KB, KW, KHSO4, KHF, KP1, KP2, KP3, KSi]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EquilibriumConstants {
    pub scale: PhScale,
    pub k_c1: f64,
    pub k_c2: f64,
    pub k_b: f64,
    pub k_w: f64,
    pub k_hso4: f64,
    pub k_hf: f64,
    pub k_p1: f64,
    pub k_p2: f64,
    pub k_p3: f64,
    pub k_si: f64,
}

impl EquilibriumConstants {
    pub const LEN: usize = 10;

    /// Slot names matching [`EquilibriumConstants::as_array`].
    pub const NAMES: [&'static str; Self::LEN] = [
        "K1", "K2", "KB", "KW", "KHSO4", "KHF", "KP1", "KP2", "KP3", "KSi",
    ];

    pub fn as_array(&self) -> [f64; Self::LEN] {
        [
            self.k_c1,
            self.k_c2,
            self.k_b,
            self.k_w,
            self.k_hso4,
            self.k_hf,
            self.k_p1,
            self.k_p2,
            self.k_p3,
            self.k_si,
        ]
    }

    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> {
        Self::NAMES.into_iter().zip(self.as_array())
    }
}
