use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{EmissionsStandard, IsvFuel, RegistrationDate, SpecialRate, VehicleType};

/// Input record for one ISV calculation.
///
/// Fields mirror the simulator form. String coercion and required-field
/// checks belong to the form layer; the simulator still validates that the
/// combination is computable (see [`crate::calculations::isv::IsvError`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsvInput {
    pub vehicle_type: VehicleType,

    /// Engine displacement in cm³. Must be positive.
    pub displacement_cc: u32,

    pub fuel: IsvFuel,

    /// Standard under which `co2_g_per_km` was measured.
    pub emissions_standard: EmissionsStandard,

    /// CO₂ emissions in g/km. Required for passenger vehicles; ignored for
    /// commercial vehicles, which have no environmental component.
    pub co2_g_per_km: Option<u32>,

    pub first_registration: RegistrationDate,

    /// Diesel vehicle emitting particulates (no particle filter).
    pub diesel_particulate_emitter: bool,

    /// Used vehicle imported from another member state; triggers the
    /// age-based reduction schedule.
    pub is_used: bool,

    /// Intermediate-rate category, if the vehicle qualifies for one.
    pub special_rate: Option<SpecialRate>,
}

/// Result of one ISV calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsvResult {
    /// Displacement component ("componente cilindrada"), clamped at zero.
    pub displacement_component: Decimal,

    /// Environmental component ("componente ambiental"), clamped at zero.
    /// Always zero for commercial vehicles.
    pub environmental_component: Decimal,

    /// Sum of the components plus the diesel particulate surcharge, before
    /// the used-vehicle reduction and any intermediate rate.
    pub gross_amount: Decimal,

    /// Tax due. Zero when `is_exempt` is set.
    pub final_amount: Decimal,

    /// Fixed single-plate legalization fee, reported alongside the tax but
    /// never included in `final_amount`.
    pub legalization_fee: Decimal,

    /// Set when the computed amount falls below the €10 collection floor.
    pub is_exempt: bool,

    /// User-facing notes describing reductions, surcharges and exemptions,
    /// in the order they were applied.
    pub notes: Vec<String>,
}
