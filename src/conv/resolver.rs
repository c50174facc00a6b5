use crate::conv::error::ConvError;
use crate::conv::registry::{CREATION_KIT, IMPERIAL, METRIC};
use crate::conv::types::Unit;
use std::borrow::Cow;

/// Resolve a user-supplied token to a unit.
///
/// Systems are searched Imperial, then Metric (with "metre" spelled "meter"),
/// then Creation Kit; the first match wins. `default` is returned when nothing
/// matches, otherwise the token is reported as an invalid unit.
pub fn resolve_unit(token: &str, default: Option<Unit>) -> Result<Unit, ConvError> {
    if let Some(unit) = IMPERIAL.find(token) {
        return Ok(*unit);
    }
    if let Some(unit) = METRIC.find(&metre_to_meter(token)) {
        return Ok(*unit);
    }
    if let Some(unit) = CREATION_KIT.find(token) {
        return Ok(*unit);
    }

    default.ok_or_else(|| ConvError::InvalidUnit(token.to_string()))
}

/// Rewrite the first case-insensitive occurrence of "metre" to "meter"
pub fn metre_to_meter(token: &str) -> Cow<'_, str> {
    const METRE: &str = "metre";

    // ASCII lowercasing keeps byte offsets aligned with the original
    match token.to_ascii_lowercase().find(METRE) {
        Some(start) => {
            let mut fixed = token.to_string();
            fixed.replace_range(start..start + METRE.len(), "meter");
            Cow::Owned(fixed)
        }
        None => Cow::Borrowed(token),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conv::types::SystemId;

    fn name_of(token: &str) -> String {
        resolve_unit(token, None)
            .map(|u| u.full_name().to_string())
            .unwrap_or_else(|e| panic!("'{}' did not resolve: {}", token, e))
    }

    #[test]
    fn test_resolve_symbols() {
        assert_eq!(name_of("m"), "Meter");
        assert_eq!(name_of("km"), "Kilometer");
        assert_eq!(name_of("ft"), "Foot");
        assert_eq!(name_of("u"), "Unit");
        assert_eq!(name_of("yd"), "Yard");
        assert_eq!(name_of("dau"), "Decaunit");
    }

    #[test]
    fn test_symbols_are_case_sensitive() {
        assert_eq!(name_of("Mm"), "Megameter");
        assert_eq!(name_of("mm"), "Millimeter");
        assert_eq!(name_of("Mu"), "Megaunit");
        assert_eq!(name_of("mu"), "Milliunit");
    }

    #[test]
    fn test_resolve_names_and_plurals() {
        assert_eq!(name_of("feet"), "Foot");
        assert_eq!(name_of("FOOT"), "Foot");
        assert_eq!(name_of("yards"), "Yard");
        assert_eq!(name_of("inches"), "Inch");
        assert_eq!(name_of("kilometers"), "Kilometer");
        assert_eq!(name_of("units"), "Unit");
        assert_eq!(name_of("Barleycorns"), "Barleycorn");
        assert_eq!(name_of("twip"), "Twip");
        assert_eq!(name_of("cables"), "Cable");
    }

    #[test]
    fn test_resolve_british_spelling() {
        assert_eq!(name_of("metre"), "Meter");
        assert_eq!(name_of("Kilometres"), "Kilometer");
        assert_eq!(name_of("centimetre"), "Centimeter");
    }

    #[test]
    fn test_nmi_is_nautical_mile() {
        let unit = resolve_unit("nmi", None).unwrap();
        assert_eq!(unit.full_name(), "Nautical Mile");
        assert_eq!(unit.factor(), 6076.1);
        assert_eq!(name_of("nmile"), "Nautical Mile");
        assert_eq!(name_of("nauticalmiles"), "Nautical Mile");
    }

    #[test]
    fn test_imperial_wins_over_other_systems() {
        // "h" is the Hand, not a metric or CK prefix
        assert_eq!(resolve_unit("h", None).unwrap().system(), SystemId::Imperial);
    }

    #[test]
    fn test_invalid_unit() {
        assert_eq!(
            resolve_unit("bogus", None),
            Err(ConvError::InvalidUnit("bogus".to_string()))
        );
        assert!(resolve_unit("", None).is_err());
    }

    #[test]
    fn test_default_unit() {
        let fallback = Unit::new(SystemId::All, 0.0, "(all)", "(all)");
        assert_eq!(resolve_unit("bogus", Some(fallback)), Ok(fallback));
        assert_eq!(
            resolve_unit("m", Some(fallback)).unwrap().full_name(),
            "Meter"
        );
    }

    #[test]
    fn test_metre_to_meter() {
        assert_eq!(metre_to_meter("metre"), "meter");
        assert_eq!(metre_to_meter("KiloMetres"), "Kilometers");
        assert_eq!(metre_to_meter("metremetre"), "metermetre");
        assert!(matches!(metre_to_meter("ft"), Cow::Borrowed("ft")));
    }
}
