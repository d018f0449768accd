use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{EmissionsStandard, IucFuel};

/// Input record for one IUC calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IucInput {
    pub fuel: IucFuel,

    /// Engine displacement in cm³. Required for combustion vehicles.
    pub displacement_cc: Option<u32>,

    /// Total battery voltage. Required for Category A electric vehicles,
    /// which are rated by voltage instead of displacement.
    pub battery_voltage: Option<u32>,

    /// CO₂ emissions in g/km, when known. Category B adds a CO₂ component
    /// only when this is present.
    pub co2_g_per_km: Option<u32>,

    /// Standard under which `co2_g_per_km` was measured.
    pub co2_standard: EmissionsStandard,

    pub first_registration_year: i32,

    /// Whether a 2007 registration happened in the EU/EEA before July.
    /// Disambiguates the Category A/B boundary year; ignored otherwise.
    pub first_registration_in_eu_eea: bool,
}

/// IUC regime the vehicle falls under.
///
/// `Exempt` is reserved for vehicles outside both regimes (first registered
/// before 1981); exemptions inside a regime, such as Category B electrics,
/// keep their category and set [`IucResult::is_exempt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IucCategory {
    A,
    B,
    Exempt,
}

/// Value of one breakdown step: either a euro amount or, for steps that
/// combine earlier values, the formula rendered as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BreakdownValue {
    Amount(Decimal),
    Formula(String),
}

/// One step of the itemized IUC computation, in application order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub label: String,
    pub value: BreakdownValue,
}

impl BreakdownEntry {
    pub fn amount(label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            label: label.into(),
            value: BreakdownValue::Amount(amount),
        }
    }

    pub fn formula(label: impl Into<String>, formula: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: BreakdownValue::Formula(formula.into()),
        }
    }
}

/// Result of one IUC calculation.
///
/// The breakdown granularity is part of the contract: the form layer renders
/// per-step amounts, not just the total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IucResult {
    /// Annual tax due. Zero when `is_exempt` is set.
    pub final_amount: Decimal,

    pub category: IucCategory,

    /// Ordered list of contributing steps.
    pub breakdown: Vec<BreakdownEntry>,

    pub is_exempt: bool,

    pub exempt_reason: Option<String>,
}
