//! Reference data for the formulas in [`crate::dissociation::library`].
//!
//! Calibration ranges are informational. No function in this crate rejects
//! inputs outside them.
use crate::models::PhScale;
use serde::Serialize;

/// Acid-base pair a formula belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AcidBasePair {
    Carbonic,
    Boric,
    Water,
    Bisulfate,
    Hydrofluoric,
    Phosphoric,
    Silicic,
    Ammonium,
    Aminopyridine,
}

/// How the published fit reports its result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Evaluation {
    /// `K = exp(ln K)`
    NaturalLog,
    /// `K = 10^-pK`
    NegativeLog10,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FormulaInfo {
    /// Function name in [`crate::dissociation::library`].
    pub function: &'static str,
    pub pair: AcidBasePair,
    pub source: &'static str,
    /// `None` when the source does not state a pH scale.
    pub scale: Option<PhScale>,
    pub evaluation: Evaluation,
    pub uses_ionic_strength: bool,
    /// Calibration range in °C.
    pub temp_c_range: Option<(f64, f64)>,
    pub psal_range: Option<(f64, f64)>,
}

pub static FORMULAS: [FormulaInfo; 10] = [
    FormulaInfo {
        function: "carbonic_lueker2000",
        pair: AcidBasePair::Carbonic,
        source: "Lueker, Dickson & Keeling (2000) Mar Chem 70, 105-119",
        scale: Some(PhScale::Total),
        evaluation: Evaluation::NegativeLog10,
        uses_ionic_strength: false,
        temp_c_range: Some((2.0, 35.0)),
        psal_range: Some((19.0, 43.0)),
    },
    FormulaInfo {
        function: "boric_dickson1990",
        pair: AcidBasePair::Boric,
        source: "Dickson (1990a) Deep-Sea Res 37, 755-766",
        scale: Some(PhScale::Total),
        evaluation: Evaluation::NaturalLog,
        uses_ionic_strength: false,
        temp_c_range: Some((0.0, 45.0)),
        psal_range: Some((5.0, 45.0)),
    },
    FormulaInfo {
        function: "water_dickson2007",
        pair: AcidBasePair::Water,
        source: "Dickson, Sabine & Christian (2007) PICES Spec Publ 3",
        scale: Some(PhScale::Total),
        evaluation: Evaluation::NaturalLog,
        uses_ionic_strength: false,
        temp_c_range: None,
        psal_range: None,
    },
    FormulaInfo {
        function: "bisulfate_dickson1990",
        pair: AcidBasePair::Bisulfate,
        source: "Dickson (1990b) J Chem Thermodyn 22, 113-127",
        scale: Some(PhScale::Free),
        evaluation: Evaluation::NaturalLog,
        uses_ionic_strength: true,
        temp_c_range: Some((0.0, 45.0)),
        psal_range: Some((5.0, 45.0)),
    },
    FormulaInfo {
        function: "hydrofluoric_perez1987",
        pair: AcidBasePair::Hydrofluoric,
        source: "Perez & Fraga (1987) Mar Chem 21, 161-168",
        scale: Some(PhScale::Total),
        evaluation: Evaluation::NaturalLog,
        uses_ionic_strength: false,
        temp_c_range: Some((9.0, 33.0)),
        psal_range: Some((10.0, 40.0)),
    },
    FormulaInfo {
        function: "hydrofluoric_dickson1979",
        pair: AcidBasePair::Hydrofluoric,
        source: "Dickson & Riley (1979) Mar Chem 7, 101-109",
        scale: Some(PhScale::Free),
        evaluation: Evaluation::NaturalLog,
        uses_ionic_strength: true,
        temp_c_range: Some((5.0, 35.0)),
        psal_range: Some((10.0, 48.0)),
    },
    FormulaInfo {
        function: "phosphoric_dickson2007",
        pair: AcidBasePair::Phosphoric,
        source: "Dickson, Sabine & Christian (2007) PICES Spec Publ 3",
        scale: Some(PhScale::Total),
        evaluation: Evaluation::NaturalLog,
        uses_ionic_strength: false,
        temp_c_range: None,
        psal_range: None,
    },
    FormulaInfo {
        function: "silicic_millero1995",
        pair: AcidBasePair::Silicic,
        source: "Millero (1995) Geochim Cosmochim Acta 59, 661-677",
        scale: Some(PhScale::Total),
        evaluation: Evaluation::NaturalLog,
        uses_ionic_strength: true,
        temp_c_range: None,
        psal_range: None,
    },
    FormulaInfo {
        function: "ammonium_bell2008",
        pair: AcidBasePair::Ammonium,
        source: "Bell, Johnson, Jickells & Liss (2008) Environ Chem 5, 258; fit in °C, evaluated at temp_k - 273.15",
        scale: None,
        evaluation: Evaluation::NegativeLog10,
        uses_ionic_strength: false,
        temp_c_range: None,
        psal_range: None,
    },
    FormulaInfo {
        function: "aminopyridine_bates1986",
        pair: AcidBasePair::Aminopyridine,
        source: "Bates & Erickson (1986) J Solution Chem 15, 891-901",
        scale: Some(PhScale::Seawater),
        evaluation: Evaluation::NegativeLog10,
        uses_ionic_strength: false,
        temp_c_range: Some((5.0, 40.0)),
        psal_range: Some((30.0, 40.0)),
    },
];

/// Look up a formula by its function name.
pub fn formula(function: &str) -> Option<&'static FormulaInfo> {
    FORMULAS.iter().find(|f| f.function == function)
}

/// All formulas published for `pair`.
pub fn formulas_for(pair: AcidBasePair) -> impl Iterator<Item = &'static FormulaInfo> {
    FORMULAS.iter().filter(move |f| f.pair == pair)
}

impl FormulaInfo {
    /// Whether `(temp_k, psal)` lies inside the published calibration range.
    /// Missing bounds count as satisfied.
    pub fn in_calibration_range(&self, temp_k: f64, psal: f64) -> bool {
        let temp_c = temp_k - crate::chemistry::ZERO_CELSIUS_K;
        let within = |r: Option<(f64, f64)>, v: f64| r.is_none_or(|(lo, hi)| v >= lo && v <= hi);
        within(self.temp_c_range, temp_c) && within(self.psal_range, psal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pair_is_catalogued() {
        for pair in [
            AcidBasePair::Carbonic,
            AcidBasePair::Boric,
            AcidBasePair::Water,
            AcidBasePair::Bisulfate,
            AcidBasePair::Hydrofluoric,
            AcidBasePair::Phosphoric,
            AcidBasePair::Silicic,
            AcidBasePair::Ammonium,
            AcidBasePair::Aminopyridine,
        ] {
            assert!(formulas_for(pair).count() >= 1, "{pair:?} missing");
        }
    }

    #[test]
    fn hydrofluoric_has_both_sources_on_different_scales() {
        let scales: Vec<_> = formulas_for(AcidBasePair::Hydrofluoric)
            .map(|f| f.scale)
            .collect();
        assert_eq!(scales, vec![Some(PhScale::Total), Some(PhScale::Free)]);
    }

    #[test]
    fn only_bisulfate_and_dickson_riley_are_free() {
        let free: Vec<_> = FORMULAS
            .iter()
            .filter(|f| f.scale == Some(PhScale::Free))
            .map(|f| f.function)
            .collect();
        assert_eq!(free, vec!["bisulfate_dickson1990", "hydrofluoric_dickson1979"]);
    }

    #[test]
    fn ammonium_scale_is_unspecified() {
        assert_eq!(formula("ammonium_bell2008").map(|f| f.scale), Some(None));
    }

    #[test]
    fn ammonium_source_states_celsius_fit() {
        let info = formula("ammonium_bell2008").unwrap();
        assert!(info.source.contains("°C"));
        assert!(info.source.contains("273.15"));
    }

    #[test]
    fn calibration_range_is_informational() {
        let lueker = formula("carbonic_lueker2000").unwrap();
        assert!(lueker.in_calibration_range(298.15, 35.0));
        assert!(!lueker.in_calibration_range(298.15, 5.0));
        let water = formula("water_dickson2007").unwrap();
        assert!(water.in_calibration_range(350.0, 60.0));
    }
}
