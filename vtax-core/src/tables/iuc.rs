//! Statutory IUC bracket tables for the 2026 tax year.
//!
//! Category A covers vehicles first registered before July 2007 and carries
//! flat euro rates per displacement bracket and registration period; the
//! diesel table already bakes in the diesel surcharge. Category B covers
//! later registrations and combines a displacement rate, a CO₂ rate, the
//! post-2017 additional CO₂ rate, an annual coefficient and a separate
//! diesel surcharge.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{Co2Bracket, FlatBracket, PeriodBracket};

/// Category A, gasoline (and LPG), by displacement in cm³.
pub const IUC_CAT_A_GASOLINA: [PeriodBracket; 6] = [
    PeriodBracket {
        max: Some(dec!(1000)),
        from_1996: dec!(18.19),
        from_1990: dec!(11.48),
        from_1981: dec!(8.10),
    },
    PeriodBracket {
        max: Some(dec!(1300)),
        from_1996: dec!(36.51),
        from_1990: dec!(20.52),
        from_1981: dec!(11.48),
    },
    PeriodBracket {
        max: Some(dec!(1750)),
        from_1996: dec!(57.04),
        from_1990: dec!(31.92),
        from_1981: dec!(15.96),
    },
    PeriodBracket {
        max: Some(dec!(2600)),
        from_1996: dec!(144.84),
        from_1990: dec!(76.44),
        from_1981: dec!(33.06),
    },
    PeriodBracket {
        max: Some(dec!(3500)),
        from_1996: dec!(262.88),
        from_1990: dec!(143.09),
        from_1981: dec!(72.86),
    },
    PeriodBracket {
        max: None,
        from_1996: dec!(468.36),
        from_1990: dec!(240.62),
        from_1981: dec!(110.53),
    },
];

/// Category A, diesel, by displacement in cm³. Rates include the diesel
/// surcharge; no separate addition applies.
pub const IUC_CAT_A_GASOLEO: [PeriodBracket; 4] = [
    PeriodBracket {
        max: Some(dec!(1500)),
        from_1996: dec!(22.90),
        from_1990: dec!(14.45),
        from_1981: dec!(10.20),
    },
    PeriodBracket {
        max: Some(dec!(2000)),
        from_1996: dec!(46.56),
        from_1990: dec!(26.16),
        from_1981: dec!(14.64),
    },
    PeriodBracket {
        max: Some(dec!(3000)),
        from_1996: dec!(72.70),
        from_1990: dec!(40.70),
        from_1981: dec!(20.35),
    },
    PeriodBracket {
        max: None,
        from_1996: dec!(184.63),
        from_1990: dec!(97.45),
        from_1981: dec!(42.15),
    },
];

/// Category A, electric, by total battery voltage. Category A electrics are
/// not exempt; only Category B grants the electric exemption.
pub const IUC_CAT_A_ELETRICO: [PeriodBracket; 2] = [
    PeriodBracket {
        max: Some(dec!(100)),
        from_1996: dec!(18.19),
        from_1990: dec!(11.48),
        from_1981: dec!(8.10),
    },
    PeriodBracket {
        max: None,
        from_1996: dec!(36.51),
        from_1990: dec!(20.52),
        from_1981: dec!(11.48),
    },
];

/// Category B displacement component, flat euro rates by cm³.
pub const IUC_CAT_B_CILINDRADA: [FlatBracket; 4] = [
    FlatBracket {
        max: Some(dec!(1250)),
        amount: dec!(31.87),
    },
    FlatBracket {
        max: Some(dec!(1750)),
        amount: dec!(63.74),
    },
    FlatBracket {
        max: Some(dec!(2500)),
        amount: dec!(127.26),
    },
    FlatBracket {
        max: None,
        amount: dec!(435.56),
    },
];

/// Category B CO₂ component, NEDC g/km. `additional` applies only to
/// vehicles first registered in 2017 or later.
pub const IUC_CAT_B_CO2_NEDC: [Co2Bracket; 4] = [
    Co2Bracket {
        max: Some(dec!(120)),
        rate: dec!(28.92),
        additional: dec!(0),
    },
    Co2Bracket {
        max: Some(dec!(180)),
        rate: dec!(43.35),
        additional: dec!(28.92),
    },
    Co2Bracket {
        max: Some(dec!(250)),
        rate: dec!(94.12),
        additional: dec!(71.38),
    },
    Co2Bracket {
        max: None,
        rate: dec!(161.27),
        additional: dec!(108.60),
    },
];

/// Category B CO₂ component, WLTP g/km. Same rate columns as NEDC over
/// wider ranges, reflecting the higher WLTP readings.
pub const IUC_CAT_B_CO2_WLTP: [Co2Bracket; 4] = [
    Co2Bracket {
        max: Some(dec!(140)),
        rate: dec!(28.92),
        additional: dec!(0),
    },
    Co2Bracket {
        max: Some(dec!(205)),
        rate: dec!(43.35),
        additional: dec!(28.92),
    },
    Co2Bracket {
        max: Some(dec!(260)),
        rate: dec!(94.12),
        additional: dec!(71.38),
    },
    Co2Bracket {
        max: None,
        rate: dec!(161.27),
        additional: dec!(108.60),
    },
];

/// Category B diesel surcharge by displacement in cm³, added after the
/// annual-coefficient multiplication.
pub const IUC_CAT_B_DIESEL_ADICIONAL: [FlatBracket; 4] = [
    FlatBracket {
        max: Some(dec!(1250)),
        amount: dec!(5.02),
    },
    FlatBracket {
        max: Some(dec!(1750)),
        amount: dec!(10.07),
    },
    FlatBracket {
        max: Some(dec!(2500)),
        amount: dec!(20.12),
    },
    FlatBracket {
        max: None,
        amount: dec!(68.85),
    },
];

/// Annual coefficient applied to the Category B sum of displacement, CO₂
/// and additional-CO₂ rates. Banded by first-registration year.
pub fn annual_coefficient(first_registration_year: i32) -> Decimal {
    match first_registration_year {
        ..=2007 => dec!(1.00),
        2008 => dec!(1.05),
        2009 => dec!(1.10),
        _ => dec!(1.15),
    }
}
