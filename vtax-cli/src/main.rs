//! Command-line adapter for the ISV and IUC simulators.
//!
//! Plays the role of the website form layer: clap does the string-to-number
//! coercion and required-field validation, the core engines do the tax
//! computation, and the result is rendered as an itemized breakdown.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use vtax_core::calculations::{IsvSimulator, IucSimulator};
use vtax_core::models::{
    BreakdownValue, EmissionsStandard, IsvFuel, IsvInput, IsvResult, IucFuel, IucInput, IucResult,
    RegistrationDate, SpecialRate, VehicleType,
};

#[derive(Parser, Debug)]
#[command(name = "vtax")]
#[command(version, about = "Simuladores de ISV e IUC (tabelas de 2026)", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Simulate the one-time registration tax (ISV)
    Isv(IsvArgs),
    /// Simulate the annual circulation tax (IUC)
    Iuc(IucArgs),
}

#[derive(clap::Args, Debug)]
struct IsvArgs {
    /// Vehicle category
    #[arg(long, value_enum, default_value_t = VehicleTypeArg::Passenger)]
    vehicle_type: VehicleTypeArg,

    /// Engine displacement in cm³
    #[arg(long)]
    displacement: u32,

    /// Fuel type
    #[arg(long, value_enum)]
    fuel: IsvFuelArg,

    /// CO₂ emissions in g/km (required for passenger vehicles)
    #[arg(long)]
    co2: Option<u32>,

    /// CO₂ measurement standard
    #[arg(long, value_enum, default_value_t = StandardArg::Wltp)]
    standard: StandardArg,

    /// First registration date (YYYY-MM-DD)
    #[arg(long)]
    first_registration: NaiveDate,

    /// Used vehicle (applies the age-based reduction)
    #[arg(long, default_value_t = false)]
    used: bool,

    /// Diesel vehicle emitting particulates (adds the €500 surcharge)
    #[arg(long, default_value_t = false)]
    particulate_emitter: bool,

    /// Intermediate-rate category, if the vehicle qualifies
    #[arg(long, value_enum)]
    special_rate: Option<SpecialRateArg>,
}

#[derive(clap::Args, Debug)]
struct IucArgs {
    /// Fuel type
    #[arg(long, value_enum)]
    fuel: IucFuelArg,

    /// Engine displacement in cm³ (combustion vehicles)
    #[arg(long)]
    displacement: Option<u32>,

    /// Total battery voltage (pre-2007 electric vehicles)
    #[arg(long)]
    voltage: Option<u32>,

    /// CO₂ emissions in g/km, when known
    #[arg(long)]
    co2: Option<u32>,

    /// CO₂ measurement standard
    #[arg(long, value_enum, default_value_t = StandardArg::Wltp)]
    standard: StandardArg,

    /// Year of first registration
    #[arg(long)]
    year: i32,

    /// First registered in the EU/EEA before July 2007 (boundary year only)
    #[arg(long, default_value_t = false)]
    eu_registration: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum VehicleTypeArg {
    Passenger,
    Commercial,
}

impl From<VehicleTypeArg> for VehicleType {
    fn from(arg: VehicleTypeArg) -> Self {
        match arg {
            VehicleTypeArg::Passenger => Self::Passenger,
            VehicleTypeArg::Commercial => Self::Commercial,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum IsvFuelArg {
    Gasoline,
    Lpg,
    NaturalGas,
    Diesel,
}

impl From<IsvFuelArg> for IsvFuel {
    fn from(arg: IsvFuelArg) -> Self {
        match arg {
            IsvFuelArg::Gasoline => Self::Gasoline,
            IsvFuelArg::Lpg => Self::Lpg,
            IsvFuelArg::NaturalGas => Self::NaturalGas,
            IsvFuelArg::Diesel => Self::Diesel,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum IucFuelArg {
    Gasoline,
    Diesel,
    Electric,
}

impl From<IucFuelArg> for IucFuel {
    fn from(arg: IucFuelArg) -> Self {
        match arg {
            IucFuelArg::Gasoline => Self::Gasoline,
            IucFuelArg::Diesel => Self::Diesel,
            IucFuelArg::Electric => Self::Electric,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum StandardArg {
    Nedc,
    Wltp,
}

impl From<StandardArg> for EmissionsStandard {
    fn from(arg: StandardArg) -> Self {
        match arg {
            StandardArg::Nedc => Self::Nedc,
            StandardArg::Wltp => Self::Wltp,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SpecialRateArg {
    Hybrid,
    MixedUse7Seats,
    NaturalGasOnly,
    PlugIn,
    PlugIn2015To2020,
    Commercial4x4,
}

impl From<SpecialRateArg> for SpecialRate {
    fn from(arg: SpecialRateArg) -> Self {
        match arg {
            SpecialRateArg::Hybrid => Self::FullHybrid,
            SpecialRateArg::MixedUse7Seats => Self::MixedUse7Seats,
            SpecialRateArg::NaturalGasOnly => Self::NaturalGasOnly,
            SpecialRateArg::PlugIn => Self::PlugInHybrid,
            SpecialRateArg::PlugIn2015To2020 => Self::PlugInHybrid2015To2020,
            SpecialRateArg::Commercial4x4 => Self::Commercial4x4OpenBed,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Isv(args) => run_isv(args),
        Command::Iuc(args) => run_iuc(args),
    }
}

fn run_isv(args: IsvArgs) -> Result<()> {
    let input = IsvInput {
        vehicle_type: args.vehicle_type.into(),
        displacement_cc: args.displacement,
        fuel: args.fuel.into(),
        emissions_standard: args.standard.into(),
        co2_g_per_km: args.co2,
        first_registration: RegistrationDate::from(args.first_registration),
        diesel_particulate_emitter: args.particulate_emitter,
        is_used: args.used,
        special_rate: args.special_rate.map(Into::into),
    };

    let as_of = Local::now().date_naive();
    debug!(?input, %as_of, "running ISV simulation");
    let result = IsvSimulator::new()
        .calculate(&input, as_of)
        .context("ISV calculation failed")?;

    print_isv(&result);
    Ok(())
}

fn run_iuc(args: IucArgs) -> Result<()> {
    let input = IucInput {
        fuel: args.fuel.into(),
        displacement_cc: args.displacement,
        battery_voltage: args.voltage,
        co2_g_per_km: args.co2,
        co2_standard: args.standard.into(),
        first_registration_year: args.year,
        first_registration_in_eu_eea: args.eu_registration,
    };

    debug!(?input, "running IUC simulation");
    let result = IucSimulator::new()
        .calculate(&input)
        .context("IUC calculation failed")?;

    print_iuc(&result);
    Ok(())
}

fn print_isv(result: &IsvResult) {
    println!("Componente cilindrada:  {:>12} €", result.displacement_component);
    println!("Componente ambiental:   {:>12} €", result.environmental_component);
    println!("Montante bruto:         {:>12} €", result.gross_amount);
    for note in &result.notes {
        println!("  - {note}");
    }
    if result.is_exempt {
        println!("ISV a pagar:            {:>12} € (isento)", result.final_amount);
    } else {
        println!("ISV a pagar:            {:>12} €", result.final_amount);
    }
    println!("Taxa de legalização:    {:>12} € (não incluída no ISV)", result.legalization_fee);
}

fn print_iuc(result: &IucResult) {
    for entry in &result.breakdown {
        match &entry.value {
            BreakdownValue::Amount(amount) => {
                println!("{:<24}{:>12} €", entry.label, amount);
            }
            BreakdownValue::Formula(formula) => {
                println!("{:<24}{formula}", entry.label);
            }
        }
    }
    println!("Categoria: {:?}", result.category);
    if result.is_exempt {
        let reason = result.exempt_reason.as_deref().unwrap_or("isento");
        println!("IUC a pagar: 0 € ({reason})");
    } else {
        println!("IUC a pagar: {} €", result.final_amount);
    }
}
