//! IUC (Imposto Único de Circulação) — annual circulation tax.
//!
//! Vehicles split into two regimes at July 2007. Category A (older
//! registrations) pays a flat rate by displacement bracket and registration
//! period. Category B combines several components:
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Flat displacement rate (4 brackets) |
//! | 2    | CO₂ rate from the NEDC or WLTP table, when a CO₂ figure is supplied |
//! | 3    | Additional CO₂ rate, only for first registrations in 2017 or later |
//! | 4    | (1 + 2 + 3) × annual coefficient (1.00 / 1.05 / 1.10 / 1.15 by year) |
//! | 5    | Diesel surcharge by displacement, added after the multiplication |
//! | 6    | Below the €10 floor: reported exempt |
//!
//! Category B electric vehicles are exempt outright; Category A electrics
//! are not, and pay by total battery voltage instead of displacement.
//!
//! Every contributing step is appended to [`IucResult::breakdown`] in
//! computation order; the form layer renders per-step values, so the
//! granularity is contractual.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use vtax_core::calculations::IucSimulator;
//! use vtax_core::models::{EmissionsStandard, IucFuel, IucInput};
//!
//! let input = IucInput {
//!     fuel: IucFuel::Diesel,
//!     displacement_cc: Some(1600),
//!     battery_voltage: None,
//!     co2_g_per_km: Some(130),
//!     co2_standard: EmissionsStandard::Wltp,
//!     first_registration_year: 2018,
//!     first_registration_in_eu_eea: false,
//! };
//!
//! let result = IucSimulator::new().calculate(&input).unwrap();
//!
//! // (63.74 + 28.92 + 0) × 1.15 = 106.56, plus the 10.07 diesel surcharge
//! assert_eq!(result.final_amount, dec!(116.63));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

use crate::calculations::common::{lookup, round_half_up};
use crate::models::{
    BreakdownEntry, Co2Bracket, EmissionsStandard, IucCategory, IucFuel, IucInput, IucResult,
    PeriodBracket, RegistrationPeriod,
};
use crate::tables::{EXEMPTION_FLOOR, is_below_floor};
use crate::tables::iuc::{
    IUC_CAT_A_ELETRICO, IUC_CAT_A_GASOLEO, IUC_CAT_A_GASOLINA, IUC_CAT_B_CILINDRADA,
    IUC_CAT_B_CO2_NEDC, IUC_CAT_B_CO2_WLTP, IUC_CAT_B_DIESEL_ADICIONAL, annual_coefficient,
};

/// First year of the additional CO₂ rate in Category B.
const ADDITIONAL_CO2_FIRST_YEAR: i32 = 2017;

/// Errors that can occur during an IUC calculation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IucError {
    /// Combustion vehicles require an engine displacement.
    #[error("engine displacement is required for this vehicle")]
    MissingDisplacement,

    /// Engine displacement must be a positive number of cm³.
    #[error("engine displacement must be positive")]
    InvalidDisplacement,

    /// Category A electric vehicles are rated by total battery voltage.
    #[error("battery voltage is required for pre-2007 electric vehicles")]
    MissingVoltage,

    /// Battery voltage must be positive.
    #[error("battery voltage must be positive")]
    InvalidVoltage,
}

/// Calculator for the annual circulation tax.
///
/// Stateless: every call operates solely on its input and the statutory
/// `const` tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct IucSimulator;

impl IucSimulator {
    pub fn new() -> Self {
        Self
    }

    /// Computes the IUC due for `input`.
    ///
    /// # Errors
    ///
    /// Returns [`IucError`] when a required field for the dispatched
    /// category is missing or non-positive.
    pub fn calculate(&self, input: &IucInput) -> Result<IucResult, IucError> {
        if self.is_category_a(input) {
            self.calculate_category_a(input)
        } else {
            self.calculate_category_b(input)
        }
    }

    /// Category A: first registration before July 2007. The boundary year
    /// 2007 falls into Category A only when the vehicle was registered in
    /// the EU/EEA before July.
    fn is_category_a(&self, input: &IucInput) -> bool {
        input.first_registration_year < 2007
            || (input.first_registration_year == 2007 && input.first_registration_in_eu_eea)
    }

    fn calculate_category_a(&self, input: &IucInput) -> Result<IucResult, IucError> {
        // Outside both regimes: no period column exists before 1981.
        if input.first_registration_year < 1981 {
            return Ok(exempt_result(
                IucCategory::Exempt,
                Vec::new(),
                "Veículo matriculado antes de 1981: isento de IUC",
            ));
        }

        let period = registration_period(input.first_registration_year);

        let (bracket, label): (&PeriodBracket, String) = match input.fuel {
            IucFuel::Electric => {
                let voltage = input.battery_voltage.ok_or(IucError::MissingVoltage)?;
                if voltage == 0 {
                    return Err(IucError::InvalidVoltage);
                }
                (
                    lookup(&IUC_CAT_A_ELETRICO, Decimal::from(voltage)),
                    format!("Taxa fixa (voltagem) — período {}", period.label()),
                )
            }
            IucFuel::Gasoline | IucFuel::Diesel => {
                let displacement = self.required_displacement(input)?;
                let table: &[PeriodBracket] = match input.fuel {
                    IucFuel::Gasoline => &IUC_CAT_A_GASOLINA,
                    // Diesel rates already include the diesel surcharge.
                    _ => &IUC_CAT_A_GASOLEO,
                };
                (
                    lookup(table, displacement),
                    format!("Taxa fixa — período {}", period.label()),
                )
            }
        };

        let amount = bracket.rate_for(period);
        let breakdown = vec![BreakdownEntry::amount(label, amount)];

        if is_below_floor(amount) {
            return Ok(exempt_result(
                IucCategory::A,
                breakdown,
                format!("Montante apurado inferior a {EXEMPTION_FLOOR} €: isento de IUC"),
            ));
        }

        Ok(IucResult {
            final_amount: amount,
            category: IucCategory::A,
            breakdown,
            is_exempt: false,
            exempt_reason: None,
        })
    }

    fn calculate_category_b(&self, input: &IucInput) -> Result<IucResult, IucError> {
        if input.fuel == IucFuel::Electric {
            return Ok(exempt_result(
                IucCategory::B,
                Vec::new(),
                "Veículo 100% elétrico: isento de IUC",
            ));
        }

        let displacement = self.required_displacement(input)?;
        let mut breakdown = Vec::new();

        let displacement_rate = lookup(&IUC_CAT_B_CILINDRADA, displacement).amount;
        breakdown.push(BreakdownEntry::amount(
            "Taxa de cilindrada",
            displacement_rate,
        ));

        let (co2_rate, additional_rate) = match input.co2_g_per_km {
            Some(co2) => {
                let table: &[Co2Bracket] = match input.co2_standard {
                    EmissionsStandard::Nedc => &IUC_CAT_B_CO2_NEDC,
                    EmissionsStandard::Wltp => &IUC_CAT_B_CO2_WLTP,
                };
                let bracket = lookup(table, Decimal::from(co2));
                breakdown.push(BreakdownEntry::amount("Taxa de CO₂", bracket.rate));

                // Two independent gates: the additional rate is year-gated
                // at 2017, the coefficient below is banded at 2008/2009/2010.
                let additional = if input.first_registration_year >= ADDITIONAL_CO2_FIRST_YEAR {
                    breakdown.push(BreakdownEntry::amount(
                        "Adicional de CO₂",
                        bracket.additional,
                    ));
                    bracket.additional
                } else {
                    Decimal::ZERO
                };
                (bracket.rate, additional)
            }
            None => (Decimal::ZERO, Decimal::ZERO),
        };

        let coefficient = annual_coefficient(input.first_registration_year);
        let subtotal =
            round_half_up((displacement_rate + co2_rate + additional_rate) * coefficient);
        breakdown.push(BreakdownEntry::formula(
            "Coeficiente do ano",
            format!(
                "({displacement_rate} + {co2_rate} + {additional_rate}) × {coefficient} = {subtotal}"
            ),
        ));

        let mut amount = subtotal;
        if input.fuel == IucFuel::Diesel {
            let surcharge = lookup(&IUC_CAT_B_DIESEL_ADICIONAL, displacement).amount;
            amount = round_half_up(amount + surcharge);
            breakdown.push(BreakdownEntry::amount("Adicional de gasóleo", surcharge));
        }

        if is_below_floor(amount) {
            return Ok(exempt_result(
                IucCategory::B,
                breakdown,
                format!("Montante apurado inferior a {EXEMPTION_FLOOR} €: isento de IUC"),
            ));
        }

        Ok(IucResult {
            final_amount: amount,
            category: IucCategory::B,
            breakdown,
            is_exempt: false,
            exempt_reason: None,
        })
    }

    fn required_displacement(&self, input: &IucInput) -> Result<Decimal, IucError> {
        let displacement = input
            .displacement_cc
            .ok_or(IucError::MissingDisplacement)?;
        if displacement == 0 {
            return Err(IucError::InvalidDisplacement);
        }
        Ok(Decimal::from(displacement))
    }
}

/// Category A period column for a registration year in 1981..=2007.
fn registration_period(year: i32) -> RegistrationPeriod {
    match year {
        ..=1989 => RegistrationPeriod::From1981To1989,
        1990..=1995 => RegistrationPeriod::From1990To1995,
        _ => RegistrationPeriod::From1996ToJun2007,
    }
}

fn exempt_result(
    category: IucCategory,
    breakdown: Vec<BreakdownEntry>,
    reason: impl Into<String>,
) -> IucResult {
    IucResult {
        final_amount: Decimal::ZERO,
        category,
        breakdown,
        is_exempt: true,
        exempt_reason: Some(reason.into()),
    }
}
