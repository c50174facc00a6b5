// Built-in unit catalogs. Built once on first use and never mutated.

use crate::conv::system::System;
use crate::conv::types::{SystemId, Unit};
use lazy_static::lazy_static;

/// Inter-system (Metric:Imperial) conversion factor
pub const ONE_FOOT_IN_METERS: f64 = 0.3048;
/// Inter-system (CreationKit:Metric) conversion factor
pub const ONE_UNIT_IN_METERS: f64 = 0.0142875313;
/// Inter-system (CreationKit:Imperial) conversion factor
pub const ONE_UNIT_IN_FEET: f64 = 0.046875;

const fn metric(factor: f64, symbol: &'static str, name: &'static str) -> Unit {
    Unit::new(SystemId::Metric, factor, symbol, name)
}

const fn creation_kit(factor: f64, symbol: &'static str, name: &'static str) -> Unit {
    Unit::new(SystemId::CreationKit, factor, symbol, name)
}

const fn imperial(factor: f64, symbol: &'static str, name: &'static str) -> Unit {
    Unit::new(SystemId::Imperial, factor, symbol, name)
}

// SI prefixes, yocto (10^-24) through yotta (10^24)
const METRIC_UNITS: [Unit; 21] = [
    metric(1e-24, "ym", "Yoctometer"),
    metric(1e-21, "zm", "Zeptometer"),
    metric(1e-18, "am", "Attometer"),
    metric(1e-15, "fm", "Femtometer"),
    metric(1e-12, "pm", "Picometer"),
    metric(1e-9, "nm", "Nanometer"),
    metric(1e-6, "um", "Micrometer"),
    metric(1e-3, "mm", "Millimeter"),
    metric(1e-2, "cm", "Centimeter"),
    metric(1e-1, "dm", "Decimeter"),
    metric(1.0, "m", "Meter"),
    metric(1e1, "dam", "Decameter"),
    metric(1e2, "hm", "Hectometer"),
    metric(1e3, "km", "Kilometer"),
    metric(1e6, "Mm", "Megameter"),
    metric(1e9, "Gm", "Gigameter"),
    metric(1e12, "Tm", "Terameter"),
    metric(1e15, "Pm", "Petameter"),
    metric(1e18, "Em", "Exameter"),
    metric(1e21, "Zm", "Zettameter"),
    metric(1e24, "Ym", "Yottameter"),
];

const CREATION_KIT_UNITS: [Unit; 21] = [
    creation_kit(1e-24, "yu", "Yoctounit"),
    creation_kit(1e-21, "zu", "Zeptounit"),
    creation_kit(1e-18, "au", "Attounit"),
    creation_kit(1e-15, "fu", "Femtounit"),
    creation_kit(1e-12, "pu", "Picounit"),
    creation_kit(1e-9, "nu", "Nanounit"),
    creation_kit(1e-6, "uu", "Microunit"),
    creation_kit(1e-3, "mu", "Milliunit"),
    creation_kit(1e-2, "cu", "Centiunit"),
    creation_kit(1e-1, "du", "Deciunit"),
    creation_kit(1.0, "u", "Unit"),
    creation_kit(1e1, "dau", "Decaunit"),
    creation_kit(1e2, "hu", "Hectounit"),
    creation_kit(1e3, "ku", "Kilounit"),
    creation_kit(1e6, "Mu", "Megaunit"),
    creation_kit(1e9, "Gu", "Gigaunit"),
    creation_kit(1e12, "Tu", "Teraunit"),
    creation_kit(1e15, "Pu", "Petaunit"),
    creation_kit(1e18, "Eu", "Exaunit"),
    creation_kit(1e21, "Zu", "Zettaunit"),
    creation_kit(1e24, "Yu", "Yottaunit"),
];

// Factors relative to the foot
const IMPERIAL_UNITS: [Unit; 16] = [
    imperial(1.0 / 17280.0, "", "Twip"),
    imperial(1.0 / 12000.0, "th", "Thou"),
    imperial(1.0 / 36.0, "Bc", "Barleycorn"),
    imperial(1.0 / 12.0, "\"", "Inch")
        .with_plural_suffix("es")
        .with_aliases(&["in"]),
    imperial(1.0 / 3.0, "h", "Hand"),
    imperial(1.0, "'", "Foot")
        .with_irregular_plural("Feet")
        .with_aliases(&["ft"]),
    imperial(3.0, "yd", "Yard"),
    imperial(66.0, "ch", "Chain"),
    imperial(660.0, "fur", "Furlong"),
    imperial(5280.0, "mi", "Mile"),
    imperial(15840.0, "lea", "League"),
    // maritime
    imperial(6.0761, "ftm", "Fathom"),
    imperial(607.61, "", "Cable"),
    imperial(6076.1, "nmi", "Nautical Mile").with_aliases(&["NauticalMile", "nmile"]),
    // 17th century onwards
    imperial(66.0 / 100.0, "", "Link"),
    imperial(66.0 / 4.0, "rd", "Rod"),
];

lazy_static! {
    pub static ref METRIC: System =
        System::new(SystemId::Metric, "Metric", &METRIC_UNITS, "Meter")
            .expect("built-in Metric catalog is valid");
    pub static ref IMPERIAL: System =
        System::new(SystemId::Imperial, "Imperial", &IMPERIAL_UNITS, "Foot")
            .expect("built-in Imperial catalog is valid");
    pub static ref CREATION_KIT: System =
        System::new(SystemId::CreationKit, "Creation Kit", &CREATION_KIT_UNITS, "Unit")
            .expect("built-in Creation Kit catalog is valid");
}

/// Catalog for a concrete system; `None` for the `All` wildcard
pub fn system(id: SystemId) -> Option<&'static System> {
    match id {
        SystemId::Metric => Some(&*METRIC),
        SystemId::Imperial => Some(&*IMPERIAL),
        SystemId::CreationKit => Some(&*CREATION_KIT),
        SystemId::All => None,
    }
}

/// Units of one system in catalog order, or of every system for `All`
pub fn list_units(id: SystemId) -> Vec<&'static Unit> {
    match system(id) {
        Some(system) => system.units().iter().collect(),
        None => [&*METRIC, &*IMPERIAL, &*CREATION_KIT]
            .into_iter()
            .flat_map(|s| s.units().iter())
            .collect(),
    }
}

/// Recognize a measurement system by one of its names (case-insensitive)
pub fn system_from_name(name: &str) -> Option<SystemId> {
    const METRIC_NAMES: [&str; 4] = ["metric", "mt", "standard", "std"];
    const IMPERIAL_NAMES: [&str; 2] = ["imperial", "imp"];
    const CREATION_KIT_NAMES: [&str; 7] = [
        "creationkit",
        "ck",
        "creation-kit",
        "creation_kit",
        "gamebryo",
        "engine",
        "bethesda",
    ];

    let is_any = |names: &[&str]| names.iter().any(|n| n.eq_ignore_ascii_case(name));

    if name.is_empty() {
        Some(SystemId::All)
    } else if is_any(&METRIC_NAMES) {
        Some(SystemId::Metric)
    } else if is_any(&IMPERIAL_NAMES) {
        Some(SystemId::Imperial)
    } else if is_any(&CREATION_KIT_NAMES) {
        Some(SystemId::CreationKit)
    } else {
        None
    }
}
