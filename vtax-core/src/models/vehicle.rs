use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// ISV vehicle category: passenger cars use Tabela A plus the environmental
/// component; light commercial vehicles use Tabela B only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VehicleType {
    Passenger,
    Commercial,
}

/// Fuel types accepted by the ISV simulator.
///
/// LPG and natural gas share the gasoline environmental tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IsvFuel {
    Gasoline,
    Lpg,
    NaturalGas,
    Diesel,
}

impl IsvFuel {
    pub fn is_diesel(&self) -> bool {
        matches!(self, Self::Diesel)
    }
}

/// Fuel types accepted by the IUC simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IucFuel {
    Gasoline,
    Diesel,
    Electric,
}

/// CO₂ measurement standard. NEDC and WLTP figures are not comparable, so
/// each standard has its own bracket table in both simulators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmissionsStandard {
    Nedc,
    Wltp,
}

/// Intermediate-rate ISV categories ("taxas intermédias").
///
/// Each category pays the listed percentage of the tax that would otherwise
/// be due, applied after the used-vehicle reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecialRate {
    /// Full (non-plug-in) hybrids: pay 60%.
    FullHybrid,
    /// Mixed-use vehicles with more than seven seats: pay 40%.
    MixedUse7Seats,
    /// Vehicles running exclusively on natural gas: pay 40%.
    NaturalGasOnly,
    /// Plug-in hybrids with sufficient electric range: pay 25%.
    PlugInHybrid,
    /// Plug-in hybrids first registered between 2015 and 2020: pay 25%.
    PlugInHybrid2015To2020,
    /// Light commercial 4×4 with open cargo bed: pay 50%.
    Commercial4x4OpenBed,
}

impl SpecialRate {
    /// Fraction of the full tax payable under this category.
    pub fn multiplier(&self) -> Decimal {
        match self {
            Self::FullHybrid => dec!(0.60),
            Self::MixedUse7Seats => dec!(0.40),
            Self::NaturalGasOnly => dec!(0.40),
            Self::PlugInHybrid => dec!(0.25),
            Self::PlugInHybrid2015To2020 => dec!(0.25),
            Self::Commercial4x4OpenBed => dec!(0.50),
        }
    }

    /// Label used in result notes.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FullHybrid => "híbrido",
            Self::MixedUse7Seats => "uso misto com mais de 7 lugares",
            Self::NaturalGasOnly => "exclusivamente a gás natural",
            Self::PlugInHybrid => "híbrido plug-in",
            Self::PlugInHybrid2015To2020 => "híbrido plug-in (2015–2020)",
            Self::Commercial4x4OpenBed => "comercial 4x4 de caixa aberta",
        }
    }
}

/// A first-registration date as entered on the form, before calendar
/// validation. The simulator rejects components that do not form a real
/// date rather than trusting the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationDate {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

impl RegistrationDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { day, month, year }
    }

    /// Resolves to a calendar date, or `None` for impossible components
    /// (e.g. 31 February).
    pub fn to_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for RegistrationDate {
    fn from(date: NaiveDate) -> Self {
        use chrono::Datelike;
        Self {
            day: date.day(),
            month: date.month(),
            year: date.year(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn special_rate_multipliers_match_statute() {
        assert_eq!(SpecialRate::FullHybrid.multiplier(), dec!(0.60));
        assert_eq!(SpecialRate::MixedUse7Seats.multiplier(), dec!(0.40));
        assert_eq!(SpecialRate::NaturalGasOnly.multiplier(), dec!(0.40));
        assert_eq!(SpecialRate::PlugInHybrid.multiplier(), dec!(0.25));
        assert_eq!(SpecialRate::PlugInHybrid2015To2020.multiplier(), dec!(0.25));
        assert_eq!(SpecialRate::Commercial4x4OpenBed.multiplier(), dec!(0.50));
    }

    #[test]
    fn registration_date_rejects_impossible_components() {
        assert_eq!(RegistrationDate::new(2020, 2, 31).to_date(), None);
        assert_eq!(RegistrationDate::new(2020, 13, 1).to_date(), None);
    }

    #[test]
    fn registration_date_accepts_leap_day() {
        let date = RegistrationDate::new(2020, 2, 29).to_date().unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2020, 2, 29).unwrap());
    }
}
