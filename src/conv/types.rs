use serde::Serialize;
use std::fmt;

/// Measurement systems known to the converter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemId {
    Metric,
    Imperial,
    CreationKit,
    /// Wildcard used for listing and filtering, never owns a unit
    All,
}

impl SystemId {
    pub fn name(self) -> &'static str {
        match self {
            SystemId::Metric => "Metric",
            SystemId::Imperial => "Imperial",
            SystemId::CreationKit => "Creation Kit",
            SystemId::All => "All",
        }
    }
}

impl fmt::Display for SystemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How the plural of a unit's full name is formed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plural {
    /// Appended to the full name ("Yard" + "s")
    Suffix(&'static str),
    /// Replaces the full name entirely ("Foot" -> "Feet")
    Override(&'static str),
}

/// A length measurement unit. Does not carry a value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unit {
    system: SystemId,
    factor: f64,
    symbol: &'static str,
    full_name: &'static str,
    plural: Plural,
    aliases: &'static [&'static str],
}

impl Unit {
    pub const fn new(
        system: SystemId,
        factor: f64,
        symbol: &'static str,
        full_name: &'static str,
    ) -> Self {
        Self {
            system,
            factor,
            symbol,
            full_name,
            plural: Plural::Suffix("s"),
            aliases: &[],
        }
    }

    pub const fn with_plural_suffix(self, suffix: &'static str) -> Self {
        Self {
            plural: Plural::Suffix(suffix),
            ..self
        }
    }

    pub const fn with_irregular_plural(self, plural: &'static str) -> Self {
        Self {
            plural: Plural::Override(plural),
            ..self
        }
    }

    pub const fn with_aliases(self, aliases: &'static [&'static str]) -> Self {
        Self { aliases, ..self }
    }

    pub fn system(&self) -> SystemId {
        self.system
    }

    /// Multiplier converting a value in this unit to the system's base unit
    pub fn factor(&self) -> f64 {
        self.factor
    }

    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    pub fn has_symbol(&self) -> bool {
        !self.symbol.is_empty()
    }

    pub fn full_name(&self) -> &'static str {
        self.full_name
    }

    pub fn has_full_name(&self) -> bool {
        !self.full_name.is_empty()
    }

    pub fn plural(&self) -> Plural {
        self.plural
    }

    pub fn plural_name(&self) -> String {
        match self.plural {
            Plural::Suffix(suffix) => format!("{}{}", self.full_name, suffix),
            Plural::Override(plural) => plural.to_string(),
        }
    }

    pub fn aliases(&self) -> &'static [&'static str] {
        self.aliases
    }

    /// Name used for display; falls back to whichever of symbol/name exists
    pub fn display_name(&self, prefer_full_name: bool, plural: bool) -> String {
        let full = || {
            if plural {
                self.plural_name()
            } else {
                self.full_name.to_string()
            }
        };

        if prefer_full_name {
            if self.has_full_name() {
                full()
            } else {
                self.symbol.to_string()
            }
        } else if self.has_symbol() {
            self.symbol.to_string()
        } else {
            full()
        }
    }

    pub fn to_base(&self, value: f64) -> f64 {
        value * self.factor
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name(false, false))
    }
}
