mod bracket;
mod isv;
mod iuc;
mod vehicle;

pub use bracket::{
    AgeBracket, Co2Bracket, FlatBracket, PeriodBracket, RateBracket, RegistrationPeriod,
    UpperBounded,
};
pub use isv::{IsvInput, IsvResult};
pub use iuc::{BreakdownEntry, BreakdownValue, IucCategory, IucInput, IucResult};
pub use vehicle::{
    EmissionsStandard, IsvFuel, IucFuel, RegistrationDate, SpecialRate, VehicleType,
};
