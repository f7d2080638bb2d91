//! Conversion of dissociation constants between pH scales.
//!
//! The only documented factor links the Total and Free scales through the
//! bisulfate equilibrium:
//!
//! `K_free = K_total / (1 + ST / KHSO4_free)`
//!
//! Constants on the Seawater scale (and those with no stated scale) cannot be
//! converted here; [`ScaleConverter::convert`] reports them as unsupported.
use crate::chemistry::total_sulfate;
use crate::dissociation::library::bisulfate_dickson1990;
use crate::error::AppError;
use crate::models::{PhScale, PhysicalState};

/// Total->Free factor from a sulfate total and a Free-scale bisulfate constant.
pub fn total_to_free_factor_from(sulfate_total: f64, k_hso4_free: f64) -> f64 {
    1.0 / (1.0 + sulfate_total / k_hso4_free)
}

/// Total->Free factor at `(temp_k, psal)`, with sulfate estimated from salinity.
///
/// Lies in (0, 1] for realistic seawater and equals 1 at zero salinity.
pub fn total_to_free_factor(temp_k: f64, psal: f64) -> f64 {
    total_to_free_factor_from(total_sulfate(psal), bisulfate_dickson1990(temp_k, psal))
}

/// Scale conversion bound to one physical state.
///
/// Every conversion made through one converter uses the same factor, which
/// keeps a constant set internally consistent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleConverter {
    total_to_free: f64,
}

impl ScaleConverter {
    pub fn new(state: &PhysicalState) -> Self {
        Self::from_factor(total_to_free_factor(state.temp_k, state.psal))
    }

    pub fn from_factor(total_to_free: f64) -> Self {
        Self { total_to_free }
    }

    pub fn factor(&self) -> f64 {
        self.total_to_free
    }

    pub fn total_to_free(&self, k_total: f64) -> f64 {
        k_total * self.total_to_free
    }

    pub fn free_to_total(&self, k_free: f64) -> f64 {
        k_free / self.total_to_free
    }

    /// Re-express `k` from scale `from` on scale `to`.
    ///
    /// # Errors
    /// `AppError::UnsupportedConversion` when either side is the Seawater
    /// scale and the scales differ.
    pub fn convert(&self, k: f64, from: PhScale, to: PhScale) -> Result<f64, AppError> {
        match (from, to) {
            _ if from == to => Ok(k),
            (PhScale::Total, PhScale::Free) => Ok(self.total_to_free(k)),
            (PhScale::Free, PhScale::Total) => Ok(self.free_to_total(k)),
            _ => Err(AppError::UnsupportedConversion { from, to }),
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn factor_in_unit_interval(t_c in 0.0_f64..45.0, psal in 0.0_f64..45.0) {
            let f = total_to_free_factor(t_c + 273.15, psal);
            prop_assert!(f > 0.0 && f <= 1.0);
        }

        #[test]
        fn total_free_round_trip(
            t_c in 0.0_f64..40.0,
            psal in 1.0_f64..42.0,
            pk in 0.5_f64..14.0,
        ) {
            let c = ScaleConverter::new(&PhysicalState::from_celsius(t_c, psal));
            let k = 10f64.powf(-pk);
            let free = c.convert(k, PhScale::Total, PhScale::Free).unwrap();
            let back = c.convert(free, PhScale::Free, PhScale::Total).unwrap();
            prop_assert!(((back - k) / k).abs() < 1e-12);
        }
    }
}
