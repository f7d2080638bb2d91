use crate::chemistry::total_sulfate;
use crate::dissociation::library::{
    bisulfate_dickson1990, boric_dickson1990, carbonic_lueker2000, hydrofluoric_dickson1979,
    hydrofluoric_perez1987, phosphoric_dickson2007, silicic_millero1995, water_dickson2007,
};
use crate::dissociation::scale::{ScaleConverter, total_to_free_factor_from};
use crate::models::{
    AssemblyOptions, EquilibriumConstants, HydrofluoricSource, PhScale, PhysicalState,
};
use tracing::debug;

/// Best-practice constant set on the Free pH scale.
///
/// Sulfate is estimated from salinity and hydrofluoric acid follows Perez &
/// Fraga (1987). See [`free_scale_constants_with`] for the full procedure.
pub fn free_scale_constants(state: &PhysicalState) -> EquilibriumConstants {
    free_scale_constants_with(
        state,
        total_sulfate(state.psal),
        &AssemblyOptions::default(),
    )
}

/// Evaluate every constant of the carbonate system at `state` and express
/// them all on the Free pH scale.
///
/// Procedure:
/// 1. Evaluate K1/K2 [Lueker et al. 2000], KB [Dickson 1990a], KW and KP1-3
///    [Dickson et al. 2007], KSi [Millero 1995] on the Total scale, and
///    KHSO4 [Dickson 1990b] on the Free scale.
/// 2. Build the Total->Free factor `1 / (1 + ST / KHSO4)` from the KHSO4
///    just evaluated and the caller's `sulfate_total` (mol/kg-sw).
/// 3. Multiply every Total-scale constant by that factor. KHSO4 is already
///    Free and is returned unchanged.
/// 4. KHF comes from `options.hydrofluoric`: Perez & Fraga (1987) is Total
///    and gets converted, Dickson & Riley (1979) is Free and does not.
///
/// Non-finite inputs yield non-finite constants; nothing is validated.
pub fn free_scale_constants_with(
    state: &PhysicalState,
    sulfate_total: f64,
    options: &AssemblyOptions,
) -> EquilibriumConstants {
    let PhysicalState { temp_k, psal } = *state;

    let carbonic = carbonic_lueker2000(temp_k, psal);
    let k_b = boric_dickson1990(temp_k, psal);
    let k_w = water_dickson2007(temp_k, psal);
    let k_hso4 = bisulfate_dickson1990(temp_k, psal);
    let phosphoric = phosphoric_dickson2007(temp_k, psal);
    let k_si = silicic_millero1995(temp_k, psal);

    let to_free = ScaleConverter::from_factor(total_to_free_factor_from(sulfate_total, k_hso4));

    let k_hf = match options.hydrofluoric {
        HydrofluoricSource::PerezFraga1987 => {
            to_free.total_to_free(hydrofluoric_perez1987(temp_k, psal))
        }
        HydrofluoricSource::DicksonRiley1979 => hydrofluoric_dickson1979(temp_k, psal),
    };

    debug!(
        temp_k,
        psal,
        sulfate_total,
        factor = to_free.factor(),
        hydrofluoric = ?options.hydrofluoric,
        "assembled Free-scale constants"
    );

    EquilibriumConstants {
        scale: PhScale::Free,
        k_c1: to_free.total_to_free(carbonic.k1),
        k_c2: to_free.total_to_free(carbonic.k2),
        k_b: to_free.total_to_free(k_b),
        k_w: to_free.total_to_free(k_w),
        k_hso4,
        k_hf,
        k_p1: to_free.total_to_free(phosphoric.k1),
        k_p2: to_free.total_to_free(phosphoric.k2),
        k_p3: to_free.total_to_free(phosphoric.k3),
        k_si: to_free.total_to_free(k_si),
    }
}
