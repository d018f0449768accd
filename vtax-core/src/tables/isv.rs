//! Statutory ISV bracket tables for the 2026 tax year.
//!
//! Source: Código do Imposto sobre Veículos, tables as updated by the state
//! budget. Displacement tables apply `max(0, cc × rate − deduction)`; the
//! environmental tables apply the same formula to CO₂ g/km. NEDC and WLTP
//! figures use separate tables and must never be mixed.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{AgeBracket, RateBracket};

/// Fixed single-plate legalization fee (€), reported alongside the tax.
pub const LEGALIZATION_FEE: Decimal = dec!(195);

/// Flat surcharge (€) for passenger diesel vehicles emitting particulates.
pub const DIESEL_PARTICULATE_SURCHARGE: Decimal = dec!(500);

/// Tabela A — displacement component for passenger vehicles (cm³).
pub const TABELA_CILINDRADA_A: [RateBracket; 3] = [
    RateBracket {
        max: Some(dec!(1000)),
        rate: dec!(1.06),
        deduction: dec!(824.77),
    },
    RateBracket {
        max: Some(dec!(1250)),
        rate: dec!(1.15),
        deduction: dec!(826.38),
    },
    RateBracket {
        max: None,
        rate: dec!(5.61),
        deduction: dec!(6194.88),
    },
];

/// Tabela B — displacement component for light commercial vehicles (cm³).
/// Commercial vehicles have no environmental component.
pub const TABELA_CILINDRADA_B: [RateBracket; 2] = [
    RateBracket {
        max: Some(dec!(1250)),
        rate: dec!(4.97),
        deduction: dec!(3121.36),
    },
    RateBracket {
        max: None,
        rate: dec!(11.78),
        deduction: dec!(11631.82),
    },
];

/// Environmental component, gasoline (and LPG/natural gas), NEDC g/km.
pub const TABELA_AMBIENTAL_GASOLINA_NEDC: [RateBracket; 6] = [
    RateBracket {
        max: Some(dec!(99)),
        rate: dec!(4.62),
        deduction: dec!(427.00),
    },
    RateBracket {
        max: Some(dec!(115)),
        rate: dec!(8.09),
        deduction: dec!(750.99),
    },
    RateBracket {
        max: Some(dec!(145)),
        rate: dec!(52.56),
        deduction: dec!(5903.94),
    },
    RateBracket {
        max: Some(dec!(175)),
        rate: dec!(61.24),
        deduction: dec!(7140.17),
    },
    RateBracket {
        max: Some(dec!(195)),
        rate: dec!(155.97),
        deduction: dec!(23627.27),
    },
    RateBracket {
        max: None,
        rate: dec!(205.65),
        deduction: dec!(33390.12),
    },
];

/// Environmental component, gasoline (and LPG/natural gas), WLTP g/km.
pub const TABELA_AMBIENTAL_GASOLINA_WLTP: [RateBracket; 9] = [
    RateBracket {
        max: Some(dec!(110)),
        rate: dec!(0.44),
        deduction: dec!(43.02),
    },
    RateBracket {
        max: Some(dec!(115)),
        rate: dec!(1.10),
        deduction: dec!(115.80),
    },
    RateBracket {
        max: Some(dec!(120)),
        rate: dec!(4.58),
        deduction: dec!(504.17),
    },
    RateBracket {
        max: Some(dec!(130)),
        rate: dec!(5.73),
        deduction: dec!(652.00),
    },
    RateBracket {
        max: Some(dec!(145)),
        rate: dec!(52.56),
        deduction: dec!(6107.35),
    },
    RateBracket {
        max: Some(dec!(175)),
        rate: dec!(59.38),
        deduction: dec!(7934.75),
    },
    RateBracket {
        max: Some(dec!(195)),
        rate: dec!(156.34),
        deduction: dec!(24708.39),
    },
    RateBracket {
        max: Some(dec!(235)),
        rate: dec!(204.68),
        deduction: dec!(33949.89),
    },
    RateBracket {
        max: None,
        rate: dec!(221.89),
        deduction: dec!(38056.35),
    },
];

/// Environmental component, diesel, NEDC g/km.
pub const TABELA_AMBIENTAL_GASOLEO_NEDC: [RateBracket; 6] = [
    RateBracket {
        max: Some(dec!(79)),
        rate: dec!(5.78),
        deduction: dec!(439.04),
    },
    RateBracket {
        max: Some(dec!(95)),
        rate: dec!(23.45),
        deduction: dec!(1848.58),
    },
    RateBracket {
        max: Some(dec!(120)),
        rate: dec!(79.22),
        deduction: dec!(7195.63),
    },
    RateBracket {
        max: Some(dec!(140)),
        rate: dec!(175.73),
        deduction: dec!(18924.92),
    },
    RateBracket {
        max: Some(dec!(160)),
        rate: dec!(195.43),
        deduction: dec!(21720.92),
    },
    RateBracket {
        max: None,
        rate: dec!(268.42),
        deduction: dec!(33447.90),
    },
];

/// Environmental component, diesel, WLTP g/km.
pub const TABELA_AMBIENTAL_GASOLEO_WLTP: [RateBracket; 8] = [
    RateBracket {
        max: Some(dec!(110)),
        rate: dec!(1.72),
        deduction: dec!(11.50),
    },
    RateBracket {
        max: Some(dec!(120)),
        rate: dec!(18.96),
        deduction: dec!(1906.19),
    },
    RateBracket {
        max: Some(dec!(140)),
        rate: dec!(65.04),
        deduction: dec!(7360.85),
    },
    RateBracket {
        max: Some(dec!(150)),
        rate: dec!(127.40),
        deduction: dec!(16080.57),
    },
    RateBracket {
        max: Some(dec!(160)),
        rate: dec!(160.81),
        deduction: dec!(21176.06),
    },
    RateBracket {
        max: Some(dec!(170)),
        rate: dec!(221.69),
        deduction: dec!(29227.38),
    },
    RateBracket {
        max: Some(dec!(190)),
        rate: dec!(274.08),
        deduction: dec!(36987.98),
    },
    RateBracket {
        max: None,
        rate: dec!(282.35),
        deduction: dec!(38271.32),
    },
];

/// Used-vehicle reduction schedule ("percentagens de redução").
///
/// A row `max_years: Some(n)` covers vehicles up to and including their n-th
/// registration anniversary; the open row covers everything older. The
/// reduction multiplies the gross ISV by `1 − reduction`.
pub const DESCONTO_USADOS: [AgeBracket; 11] = [
    AgeBracket {
        max_years: Some(1),
        reduction: dec!(0.10),
    },
    AgeBracket {
        max_years: Some(2),
        reduction: dec!(0.20),
    },
    AgeBracket {
        max_years: Some(3),
        reduction: dec!(0.28),
    },
    AgeBracket {
        max_years: Some(4),
        reduction: dec!(0.35),
    },
    AgeBracket {
        max_years: Some(5),
        reduction: dec!(0.43),
    },
    AgeBracket {
        max_years: Some(6),
        reduction: dec!(0.52),
    },
    AgeBracket {
        max_years: Some(7),
        reduction: dec!(0.60),
    },
    AgeBracket {
        max_years: Some(8),
        reduction: dec!(0.65),
    },
    AgeBracket {
        max_years: Some(9),
        reduction: dec!(0.70),
    },
    AgeBracket {
        max_years: Some(10),
        reduction: dec!(0.75),
    },
    AgeBracket {
        max_years: None,
        reduction: dec!(0.80),
    },
];
