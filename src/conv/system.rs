use crate::conv::error::ConvError;
use crate::conv::types::{Plural, SystemId, Unit};

/// An immutable catalog of units sharing one base unit
#[derive(Debug, Clone)]
pub struct System {
    id: SystemId,
    name: &'static str,
    units: Vec<Unit>,
    base: usize,
}

impl System {
    /// Build a catalog, checking that it is non-empty, that every unit belongs
    /// to `id` with a nonzero factor, and that `base_name` names a unit with factor 1
    pub fn new(
        id: SystemId,
        name: &'static str,
        units: &[Unit],
        base_name: &str,
    ) -> Result<Self, ConvError> {
        if id == SystemId::All {
            return Err(ConvError::InvalidCatalog(format!(
                "'{}' cannot use the wildcard system",
                name
            )));
        }
        if units.is_empty() {
            return Err(ConvError::InvalidCatalog(format!("'{}' has no units", name)));
        }

        for unit in units {
            if unit.system() != id {
                return Err(ConvError::InvalidCatalog(format!(
                    "'{}' belongs to the {} system, not {}",
                    unit, unit.system(), name
                )));
            }
            if unit.factor().abs() < f64::MIN_POSITIVE {
                return Err(ConvError::InvalidCatalog(format!(
                    "'{}' has a zero conversion factor",
                    unit
                )));
            }
        }

        let base = units
            .iter()
            .position(|u| u.full_name() == base_name)
            .ok_or_else(|| {
                ConvError::InvalidCatalog(format!(
                    "base unit '{}' is not part of '{}'",
                    base_name, name
                ))
            })?;

        if units[base].factor() != 1.0 {
            return Err(ConvError::InvalidCatalog(format!(
                "base unit '{}' must have a conversion factor of 1",
                base_name
            )));
        }

        Ok(Self {
            id,
            name,
            units: units.to_vec(),
            base,
        })
    }

    pub fn id(&self) -> SystemId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn base(&self) -> &Unit {
        &self.units[self.base]
    }

    /// Exact, case-insensitive lookup by singular full name
    #[cfg(test)]
    pub(crate) fn unit(&self, full_name: &str) -> Option<&Unit> {
        self.units
            .iter()
            .find(|u| u.full_name().eq_ignore_ascii_case(full_name))
    }

    /// First unit in catalog order that `token` refers to
    pub fn find(&self, token: &str) -> Option<&Unit> {
        self.units.iter().find(|u| unit_matches(u, token))
    }
}

/// Symbols compare exactly; names and aliases ignore case and tolerate a plural `s`
pub fn unit_matches(unit: &Unit, token: &str) -> bool {
    if let Plural::Override(plural) = unit.plural() {
        if unit.has_full_name()
            && (matches_name(token, unit.full_name()) || matches_name(token, plural))
        {
            return true;
        }
    }

    (unit.has_symbol() && token == unit.symbol())
        || (unit.has_full_name()
            && (matches_name(token, unit.full_name())
                || token.eq_ignore_ascii_case(&unit.plural_name())))
        || unit.aliases().iter().any(|alias| matches_name(token, alias))
}

pub fn matches_name(token: &str, name: &str) -> bool {
    if token.eq_ignore_ascii_case(name) {
        return true;
    }
    token
        .strip_suffix(|c: char| c == 's' || c == 'S')
        .map_or(false, |singular| singular.eq_ignore_ascii_case(name))
}
