use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A bracket record whose lookup key is bounded above.
///
/// All statutory tables are ordered ascending by upper bound, with the last
/// bracket unbounded (`None`). See [`crate::calculations::common::lookup`].
pub trait UpperBounded {
    /// Upper bound of the bracket's range, inclusive. `None` means unbounded.
    fn upper_bound(&self) -> Option<Decimal>;
}

/// A bracket applying a per-unit rate with a fixed deduction.
///
/// Used by the ISV displacement and environmental tables, where the
/// component formula is `max(0, value × rate − deduction)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateBracket {
    /// Upper bound of the range, inclusive. `None` for the open last bracket.
    pub max: Option<Decimal>,
    /// Rate applied per unit (cm³ or g/km).
    pub rate: Decimal,
    /// Fixed amount subtracted after the multiplication ("parcela a abater").
    pub deduction: Decimal,
}

impl UpperBounded for RateBracket {
    fn upper_bound(&self) -> Option<Decimal> {
        self.max
    }
}

/// A bracket carrying a flat euro amount rather than a per-unit rate.
///
/// Used by the IUC Category B displacement table and the Category B diesel
/// surcharge table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatBracket {
    pub max: Option<Decimal>,
    /// Flat tax amount in euros for the whole range.
    pub amount: Decimal,
}

impl UpperBounded for FlatBracket {
    fn upper_bound(&self) -> Option<Decimal> {
        self.max
    }
}

/// A CO₂ bracket for IUC Category B: a flat rate plus the additional rate
/// charged only to vehicles first registered in 2017 or later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Co2Bracket {
    pub max: Option<Decimal>,
    /// Flat CO₂ rate in euros.
    pub rate: Decimal,
    /// Additional CO₂ rate in euros, zero for brackets that do not carry one.
    pub additional: Decimal,
}

impl UpperBounded for Co2Bracket {
    fn upper_bound(&self) -> Option<Decimal> {
        self.max
    }
}

/// An IUC Category A bracket: one flat euro amount per registration period.
///
/// The lookup key is engine displacement in cm³ (total battery voltage for
/// the electric table); the column is selected by [`RegistrationPeriod`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodBracket {
    pub max: Option<Decimal>,
    /// Rate for registrations from 1996 up to June 2007.
    pub from_1996: Decimal,
    /// Rate for registrations from 1990 to 1995.
    pub from_1990: Decimal,
    /// Rate for registrations from 1981 to 1989.
    pub from_1981: Decimal,
}

impl PeriodBracket {
    pub fn rate_for(&self, period: RegistrationPeriod) -> Decimal {
        match period {
            RegistrationPeriod::From1996ToJun2007 => self.from_1996,
            RegistrationPeriod::From1990To1995 => self.from_1990,
            RegistrationPeriod::From1981To1989 => self.from_1981,
        }
    }
}

impl UpperBounded for PeriodBracket {
    fn upper_bound(&self) -> Option<Decimal> {
        self.max
    }
}

/// Registration-period column of the IUC Category A tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistrationPeriod {
    From1996ToJun2007,
    From1990To1995,
    From1981To1989,
}

impl RegistrationPeriod {
    /// Human-readable label used in breakdown entries.
    pub fn label(&self) -> &'static str {
        match self {
            Self::From1996ToJun2007 => "1996 a junho de 2007",
            Self::From1990To1995 => "1990 a 1995",
            Self::From1981To1989 => "1981 a 1989",
        }
    }
}

/// One row of the used-vehicle ISV reduction schedule.
///
/// A row `max_years: Some(n)` matches while the calculation date is on or
/// before the n-th anniversary of first registration; the unbounded last row
/// covers everything past the 10th anniversary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeBracket {
    pub max_years: Option<u32>,
    /// Fraction of the gross ISV forgiven, e.g. `0.43` for 43%.
    pub reduction: Decimal,
}
