//! ISV (Imposto Sobre Veículos) — one-time vehicle registration tax.
//!
//! Implements the registration-tax computation for passenger and light
//! commercial vehicles under the 2026 tables.
//!
//! # Computation steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Displacement component: `max(0, cc × rate − deduction)` from Tabela A (passenger) or Tabela B (commercial) |
//! | 2    | Environmental component (passenger only): same formula over CO₂ g/km, table keyed by fuel × standard |
//! | 3    | Gross amount: step 1 + step 2 |
//! | 4    | +€500 for passenger diesel vehicles emitting particulates |
//! | 5    | Used vehicles: age reduction (10% up to one year, 80% past ten) over the surcharge-inclusive gross |
//! | 6    | Intermediate rate, if any: multiply by the category's percentage |
//! | 7    | Below the €10 floor: reported exempt |
//!
//! The fixed €195 legalization fee is reported alongside the tax but never
//! added into it.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use vtax_core::calculations::IsvSimulator;
//! use vtax_core::models::{
//!     EmissionsStandard, IsvFuel, IsvInput, RegistrationDate, VehicleType,
//! };
//!
//! let input = IsvInput {
//!     vehicle_type: VehicleType::Passenger,
//!     displacement_cc: 1600,
//!     fuel: IsvFuel::Gasoline,
//!     emissions_standard: EmissionsStandard::Nedc,
//!     co2_g_per_km: Some(120),
//!     first_registration: RegistrationDate::new(2026, 1, 10),
//!     diesel_particulate_emitter: false,
//!     is_used: false,
//!     special_rate: None,
//! };
//!
//! let as_of = NaiveDate::from_ymd_opt(2026, 5, 15).unwrap();
//! let result = IsvSimulator::new().calculate(&input, as_of).unwrap();
//!
//! assert_eq!(result.displacement_component, dec!(2781.12));
//! assert_eq!(result.environmental_component, dec!(403.26));
//! assert_eq!(result.final_amount, dec!(3184.38));
//! ```

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use thiserror::Error;

use crate::calculations::common::{floor_at_zero, lookup, round_half_up};
use crate::models::{
    EmissionsStandard, IsvFuel, IsvInput, IsvResult, RateBracket, VehicleType,
};
use crate::tables::{EXEMPTION_FLOOR, is_below_floor};
use crate::tables::isv::{
    DESCONTO_USADOS, DIESEL_PARTICULATE_SURCHARGE, LEGALIZATION_FEE, TABELA_AMBIENTAL_GASOLEO_NEDC,
    TABELA_AMBIENTAL_GASOLEO_WLTP, TABELA_AMBIENTAL_GASOLINA_NEDC, TABELA_AMBIENTAL_GASOLINA_WLTP,
    TABELA_CILINDRADA_A, TABELA_CILINDRADA_B,
};

/// Errors that can occur during an ISV calculation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IsvError {
    /// Engine displacement must be a positive number of cm³.
    #[error("engine displacement must be positive")]
    InvalidDisplacement,

    /// Passenger vehicles require a CO₂ figure for the environmental
    /// component.
    #[error("CO₂ emissions are required for passenger vehicles")]
    MissingCo2,

    /// The day/month/year components do not form a real calendar date.
    #[error("invalid first registration date: {year:04}-{month:02}-{day:02}")]
    InvalidRegistrationDate { year: i32, month: u32, day: u32 },

    /// A used vehicle cannot have been first registered after the
    /// calculation date.
    #[error("first registration {registration} is after the calculation date {as_of}")]
    RegistrationInFuture {
        registration: NaiveDate,
        as_of: NaiveDate,
    },
}

/// Calculator for the vehicle registration tax.
///
/// Stateless: every call operates solely on its input and the statutory
/// `const` tables, so concurrent calls need no coordination.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsvSimulator;

impl IsvSimulator {
    pub fn new() -> Self {
        Self
    }

    /// Computes the ISV due for `input`, with `as_of` as the calculation
    /// date for the used-vehicle age rule.
    ///
    /// # Errors
    ///
    /// Returns [`IsvError`] when the input is not computable; see the
    /// variants for the exact conditions.
    pub fn calculate(&self, input: &IsvInput, as_of: NaiveDate) -> Result<IsvResult, IsvError> {
        if input.displacement_cc == 0 {
            return Err(IsvError::InvalidDisplacement);
        }

        let registration =
            input
                .first_registration
                .to_date()
                .ok_or(IsvError::InvalidRegistrationDate {
                    year: input.first_registration.year,
                    month: input.first_registration.month,
                    day: input.first_registration.day,
                })?;

        if input.is_used && registration > as_of {
            return Err(IsvError::RegistrationInFuture {
                registration,
                as_of,
            });
        }

        let mut notes = Vec::new();

        let displacement = Decimal::from(input.displacement_cc);
        let displacement_component = match input.vehicle_type {
            VehicleType::Passenger => self.component(&TABELA_CILINDRADA_A, displacement),
            VehicleType::Commercial => self.component(&TABELA_CILINDRADA_B, displacement),
        };

        let environmental_component = match input.vehicle_type {
            VehicleType::Passenger => {
                let co2 = input.co2_g_per_km.ok_or(IsvError::MissingCo2)?;
                let table = environmental_table(input.fuel, input.emissions_standard);
                self.component(table, Decimal::from(co2))
            }
            // Commercial vehicles are taxed on displacement alone.
            VehicleType::Commercial => Decimal::ZERO,
        };

        let mut gross_amount = displacement_component + environmental_component;

        if input.vehicle_type == VehicleType::Passenger
            && input.fuel.is_diesel()
            && input.diesel_particulate_emitter
        {
            gross_amount += DIESEL_PARTICULATE_SURCHARGE;
            notes.push(format!(
                "Agravamento de {DIESEL_PARTICULATE_SURCHARGE} € por emissão de partículas (gasóleo)"
            ));
        }

        let mut amount = gross_amount;

        if input.is_used {
            let reduction = self.age_reduction(registration, as_of);
            let age = self.completed_years(registration, as_of);
            amount = round_half_up(amount * (Decimal::ONE - reduction));
            notes.push(format!(
                "Redução de veículo usado: {}% ({} ano(s) desde a primeira matrícula)",
                (reduction * Decimal::ONE_HUNDRED).normalize(),
                age
            ));
        }

        if let Some(special_rate) = input.special_rate {
            amount = round_half_up(amount * special_rate.multiplier());
            notes.push(format!(
                "Taxa intermédia ({}): {}% do imposto",
                special_rate.label(),
                (special_rate.multiplier() * Decimal::ONE_HUNDRED).normalize()
            ));
        }

        let is_exempt = is_below_floor(amount);
        let final_amount = if is_exempt {
            notes.push(format!(
                "Montante apurado inferior a {EXEMPTION_FLOOR} €: isento de ISV"
            ));
            Decimal::ZERO
        } else {
            amount
        };

        Ok(IsvResult {
            displacement_component,
            environmental_component,
            gross_amount,
            final_amount,
            legalization_fee: LEGALIZATION_FEE,
            is_exempt,
            notes,
        })
    }

    /// Applies the bracket formula `max(0, value × rate − deduction)`.
    fn component(&self, table: &[RateBracket], value: Decimal) -> Decimal {
        let bracket = lookup(table, value);
        round_half_up(floor_at_zero(value * bracket.rate - bracket.deduction))
    }

    /// Resolves the used-vehicle reduction by comparing the calculation date
    /// against registration anniversaries: a row `n` matches while `as_of`
    /// is on or before the n-th anniversary, so one day past the tenth
    /// anniversary already lands in the 80% row.
    fn age_reduction(&self, registration: NaiveDate, as_of: NaiveDate) -> Decimal {
        DESCONTO_USADOS
            .iter()
            .find(|bracket| match bracket.max_years {
                Some(years) => as_of <= anniversary(registration, years),
                None => true,
            })
            .map(|bracket| bracket.reduction)
            .expect("reduction schedule ends with an unbounded row")
    }

    /// Whole years since first registration, counting a year only once its
    /// anniversary has been reached.
    fn completed_years(&self, registration: NaiveDate, as_of: NaiveDate) -> u32 {
        let diff = as_of.year() - registration.year();
        if diff <= 0 {
            return 0;
        }
        let mut years = diff as u32;
        if as_of < anniversary(registration, years) {
            years -= 1;
        }
        years
    }
}

/// Environmental table keyed by fuel and measurement standard. LPG and
/// natural gas are taxed under the gasoline tables.
fn environmental_table(fuel: IsvFuel, standard: EmissionsStandard) -> &'static [RateBracket] {
    match (fuel, standard) {
        (IsvFuel::Diesel, EmissionsStandard::Nedc) => &TABELA_AMBIENTAL_GASOLEO_NEDC,
        (IsvFuel::Diesel, EmissionsStandard::Wltp) => &TABELA_AMBIENTAL_GASOLEO_WLTP,
        (_, EmissionsStandard::Nedc) => &TABELA_AMBIENTAL_GASOLINA_NEDC,
        (_, EmissionsStandard::Wltp) => &TABELA_AMBIENTAL_GASOLINA_WLTP,
    }
}

/// The n-th anniversary of a date. 29 February registrations roll to
/// 1 March in non-leap years.
fn anniversary(date: NaiveDate, years: u32) -> NaiveDate {
    let year = date.year() + years as i32;
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
        .expect("anniversary date is always constructible")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::{RegistrationDate, SpecialRate};

    fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, 15).unwrap()
    }

    fn passenger_input() -> IsvInput {
        IsvInput {
            vehicle_type: VehicleType::Passenger,
            displacement_cc: 1600,
            fuel: IsvFuel::Gasoline,
            emissions_standard: EmissionsStandard::Nedc,
            co2_g_per_km: Some(120),
            first_registration: RegistrationDate::new(2026, 1, 10),
            diesel_particulate_emitter: false,
            is_used: false,
            special_rate: None,
        }
    }

    // =========================================================================
    // validation tests
    // =========================================================================

    #[test]
    fn rejects_zero_displacement() {
        let mut input = passenger_input();
        input.displacement_cc = 0;

        let result = IsvSimulator::new().calculate(&input, as_of());

        assert_eq!(result, Err(IsvError::InvalidDisplacement));
    }

    #[test]
    fn rejects_passenger_without_co2() {
        let mut input = passenger_input();
        input.co2_g_per_km = None;

        let result = IsvSimulator::new().calculate(&input, as_of());

        assert_eq!(result, Err(IsvError::MissingCo2));
    }

    #[test]
    fn rejects_impossible_registration_date() {
        let mut input = passenger_input();
        input.first_registration = RegistrationDate::new(2020, 2, 31);

        let result = IsvSimulator::new().calculate(&input, as_of());

        assert_eq!(
            result,
            Err(IsvError::InvalidRegistrationDate {
                year: 2020,
                month: 2,
                day: 31
            })
        );
    }

    #[test]
    fn rejects_used_vehicle_registered_in_the_future() {
        let mut input = passenger_input();
        input.is_used = true;
        input.first_registration = RegistrationDate::new(2027, 1, 1);

        let result = IsvSimulator::new().calculate(&input, as_of());

        assert!(matches!(
            result,
            Err(IsvError::RegistrationInFuture { .. })
        ));
    }

    #[test]
    fn commercial_without_co2_is_accepted() {
        let mut input = passenger_input();
        input.vehicle_type = VehicleType::Commercial;
        input.co2_g_per_km = None;

        let result = IsvSimulator::new().calculate(&input, as_of()).unwrap();

        assert_eq!(result.environmental_component, dec!(0));
    }

    // =========================================================================
    // new passenger vehicle tests
    // =========================================================================

    #[test]
    fn new_passenger_gasoline_nedc() {
        let input = passenger_input();

        let result = IsvSimulator::new().calculate(&input, as_of()).unwrap();

        // Displacement: 1600 × 5.61 − 6194.88 = 2781.12
        assert_eq!(result.displacement_component, dec!(2781.12));
        // Environmental: 120 × 52.56 − 5903.94 = 403.26
        assert_eq!(result.environmental_component, dec!(403.26));
        assert_eq!(result.gross_amount, dec!(3184.38));
        assert_eq!(result.final_amount, dec!(3184.38));
        assert_eq!(result.legalization_fee, dec!(195));
        assert!(!result.is_exempt);
        assert!(result.notes.is_empty());
    }

    #[test]
    fn lpg_uses_gasoline_environmental_table() {
        let mut input = passenger_input();
        input.fuel = IsvFuel::Lpg;

        let gasoline = IsvSimulator::new()
            .calculate(&passenger_input(), as_of())
            .unwrap();
        let lpg = IsvSimulator::new().calculate(&input, as_of()).unwrap();

        assert_eq!(lpg.environmental_component, gasoline.environmental_component);
    }

    #[test]
    fn small_displacement_component_clamps_at_zero() {
        let mut input = passenger_input();
        input.displacement_cc = 700;
        input.co2_g_per_km = Some(90);

        let result = IsvSimulator::new().calculate(&input, as_of()).unwrap();

        // 700 × 1.06 − 824.77 is negative
        assert_eq!(result.displacement_component, dec!(0));
    }

    #[test]
    fn commercial_uses_tabela_b_and_no_environmental_component() {
        let mut input = passenger_input();
        input.vehicle_type = VehicleType::Commercial;
        input.co2_g_per_km = None;

        let result = IsvSimulator::new().calculate(&input, as_of()).unwrap();

        // 1600 × 11.78 − 11631.82 = 7216.18
        assert_eq!(result.displacement_component, dec!(7216.18));
        assert_eq!(result.environmental_component, dec!(0));
        assert_eq!(result.final_amount, dec!(7216.18));
    }

    // =========================================================================
    // diesel particulate surcharge tests
    // =========================================================================

    fn diesel_input() -> IsvInput {
        IsvInput {
            vehicle_type: VehicleType::Passenger,
            displacement_cc: 2000,
            fuel: IsvFuel::Diesel,
            emissions_standard: EmissionsStandard::Nedc,
            co2_g_per_km: Some(140),
            first_registration: RegistrationDate::new(2021, 5, 15),
            diesel_particulate_emitter: true,
            is_used: false,
            special_rate: None,
        }
    }

    #[test]
    fn diesel_particulate_emitter_adds_flat_surcharge() {
        let with = IsvSimulator::new().calculate(&diesel_input(), as_of()).unwrap();
        let mut input = diesel_input();
        input.diesel_particulate_emitter = false;
        let without = IsvSimulator::new().calculate(&input, as_of()).unwrap();

        assert_eq!(with.gross_amount - without.gross_amount, dec!(500));
    }

    #[test]
    fn surcharge_is_applied_before_used_reduction() {
        let mut input = diesel_input();
        input.is_used = true; // registered 2021-05-15, exactly 5 years: 43%

        let result = IsvSimulator::new().calculate(&input, as_of()).unwrap();

        // Displacement: 2000 × 5.61 − 6194.88 = 5025.12
        // Environmental: 140 × 175.73 − 18924.92 = 5677.28
        // Gross: 5025.12 + 5677.28 + 500 = 11202.40
        assert_eq!(result.gross_amount, dec!(11202.40));
        // Reduced: 11202.40 × 0.57 = 6385.368 → 6385.37
        assert_eq!(result.final_amount, dec!(6385.37));
    }

    #[test]
    fn gasoline_particulate_flag_has_no_effect() {
        let mut input = passenger_input();
        input.diesel_particulate_emitter = true;

        let result = IsvSimulator::new().calculate(&input, as_of()).unwrap();

        assert_eq!(result.gross_amount, dec!(3184.38));
    }

    // =========================================================================
    // age reduction tests
    // =========================================================================

    #[test]
    fn exactly_five_years_old_gets_43_percent() {
        let simulator = IsvSimulator::new();
        let registration = NaiveDate::from_ymd_opt(2021, 5, 15).unwrap();

        assert_eq!(simulator.age_reduction(registration, as_of()), dec!(0.43));
    }

    #[test]
    fn one_day_past_fifth_anniversary_moves_to_52_percent() {
        let simulator = IsvSimulator::new();
        let registration = NaiveDate::from_ymd_opt(2021, 5, 14).unwrap();

        assert_eq!(simulator.age_reduction(registration, as_of()), dec!(0.52));
    }

    #[test]
    fn under_one_year_gets_10_percent() {
        let simulator = IsvSimulator::new();
        let registration = NaiveDate::from_ymd_opt(2025, 11, 3).unwrap();

        assert_eq!(simulator.age_reduction(registration, as_of()), dec!(0.10));
    }

    #[test]
    fn ten_years_and_one_day_gets_80_percent() {
        let simulator = IsvSimulator::new();
        let registration = NaiveDate::from_ymd_opt(2016, 5, 14).unwrap();

        assert_eq!(simulator.age_reduction(registration, as_of()), dec!(0.80));
    }

    #[test]
    fn exactly_ten_years_stays_at_75_percent() {
        let simulator = IsvSimulator::new();
        let registration = NaiveDate::from_ymd_opt(2016, 5, 15).unwrap();

        assert_eq!(simulator.age_reduction(registration, as_of()), dec!(0.75));
    }

    #[test]
    fn leap_day_registration_rolls_anniversary_to_march() {
        let simulator = IsvSimulator::new();
        let registration = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let on_march_first = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();

        assert_eq!(simulator.completed_years(registration, on_march_first), 1);
    }

    #[test]
    fn completed_years_counts_anniversaries() {
        let simulator = IsvSimulator::new();
        let registration = NaiveDate::from_ymd_opt(2021, 6, 1).unwrap();

        // Anniversary not yet reached in 2026
        assert_eq!(simulator.completed_years(registration, as_of()), 4);
    }

    #[test]
    fn used_vehicle_reduction_is_applied_to_gross() {
        let mut input = passenger_input();
        input.is_used = true;
        input.first_registration = RegistrationDate::new(2021, 5, 15);

        let result = IsvSimulator::new().calculate(&input, as_of()).unwrap();

        // 3184.38 × 0.57 = 1815.0966 → 1815.10
        assert_eq!(result.final_amount, dec!(1815.10));
        assert_eq!(result.notes.len(), 1);
    }

    // =========================================================================
    // intermediate rate tests
    // =========================================================================

    #[test]
    fn full_hybrid_pays_60_percent() {
        let mut input = passenger_input();
        input.special_rate = Some(SpecialRate::FullHybrid);

        let result = IsvSimulator::new().calculate(&input, as_of()).unwrap();

        // 3184.38 × 0.60 = 1910.628 → 1910.63
        assert_eq!(result.final_amount, dec!(1910.63));
    }

    #[test]
    fn intermediate_rate_applies_after_used_reduction() {
        let mut input = passenger_input();
        input.is_used = true;
        input.first_registration = RegistrationDate::new(2021, 5, 15);
        input.special_rate = Some(SpecialRate::PlugInHybrid);

        let result = IsvSimulator::new().calculate(&input, as_of()).unwrap();

        // 3184.38 × 0.57 = 1815.10, then × 0.25 = 453.775 → 453.78
        assert_eq!(result.final_amount, dec!(453.78));
        assert_eq!(result.notes.len(), 2);
    }

    #[test]
    fn notes_render_whole_percentages() {
        let mut input = passenger_input();
        input.is_used = true;
        input.first_registration = RegistrationDate::new(2021, 5, 15);
        input.special_rate = Some(SpecialRate::FullHybrid);

        let result = IsvSimulator::new().calculate(&input, as_of()).unwrap();

        assert!(
            result.notes[0].contains("43%"),
            "note was: {}",
            result.notes[0]
        );
        assert!(
            result.notes[1].contains("60%"),
            "note was: {}",
            result.notes[1]
        );
    }

    // =========================================================================
    // exemption floor tests
    // =========================================================================

    #[test]
    fn amount_below_floor_is_reported_exempt() {
        let mut input = passenger_input();
        input.displacement_cc = 900;
        input.emissions_standard = EmissionsStandard::Wltp;
        input.co2_g_per_km = Some(90);
        input.is_used = true;
        input.first_registration = RegistrationDate::new(2010, 1, 1);
        input.special_rate = Some(SpecialRate::PlugInHybrid);

        let result = IsvSimulator::new().calculate(&input, as_of()).unwrap();

        // 900 × 1.06 − 824.77 = 129.23, env clamps to 0,
        // × 0.20 = 25.85, × 0.25 = 6.46 — below the €10 floor
        assert!(result.is_exempt);
        assert_eq!(result.final_amount, dec!(0));
    }

    // =========================================================================
    // purity tests
    // =========================================================================

    #[test]
    fn identical_inputs_yield_identical_results() {
        let input = diesel_input();
        let simulator = IsvSimulator::new();

        let first = simulator.calculate(&input, as_of()).unwrap();
        let second = simulator.calculate(&input, as_of()).unwrap();

        assert_eq!(first, second);
    }
}
