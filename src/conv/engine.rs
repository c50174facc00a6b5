use crate::conv::error::ConvError;
use crate::conv::registry::{ONE_FOOT_IN_METERS, ONE_UNIT_IN_FEET, ONE_UNIT_IN_METERS};
use crate::conv::types::{SystemId, Unit};

/// Factors with a smaller magnitude are treated as zero. Yocto-scale factors
/// (1e-24) are far above this.
const ZERO_TOLERANCE: f64 = f64::MIN_POSITIVE;

fn is_zero(value: f64) -> bool {
    value.abs() < ZERO_TOLERANCE
}

/// Convert between two units of one measurement system
pub fn convert_within_system(in_factor: f64, value: f64, out_factor: f64) -> Result<f64, ConvError> {
    if is_zero(out_factor) {
        return Err(ConvError::DivideByZero);
    }
    Ok((value * in_factor) / out_factor)
}

/// Convert a value expressed in `input`'s base unit to `output`'s base unit
pub fn convert_across_systems(
    input: SystemId,
    value: f64,
    output: SystemId,
) -> Result<f64, ConvError> {
    use SystemId::*;

    match (input, output) {
        (Metric, Metric) | (Imperial, Imperial) | (CreationKit, CreationKit) => Ok(value),
        (Metric, Imperial) => Ok(value / ONE_FOOT_IN_METERS),
        (Metric, CreationKit) => Ok(value / ONE_UNIT_IN_METERS),
        (Imperial, Metric) => Ok(value * ONE_FOOT_IN_METERS),
        (Imperial, CreationKit) => Ok(value / ONE_UNIT_IN_FEET),
        (CreationKit, Metric) => Ok(value * ONE_UNIT_IN_METERS),
        (CreationKit, Imperial) => Ok(value * ONE_UNIT_IN_FEET),
        (All, _) | (_, All) => Err(ConvError::UnsupportedSystemPair(input, output)),
    }
}

/// Convert `value` from `input` units to `output` units, across systems if needed
pub fn convert(input: &Unit, value: f64, output: &Unit) -> Result<f64, ConvError> {
    if is_zero(input.factor()) {
        return Err(ConvError::ZeroConversionFactor(input.factor()));
    }
    if is_zero(output.factor()) {
        return Err(ConvError::ZeroConversionFactor(output.factor()));
    }

    if input == output {
        return Ok(value);
    }
    if input.system() == output.system() {
        return convert_within_system(input.factor(), value, output.factor());
    }

    let base = convert_across_systems(input.system(), input.to_base(value), output.system())?;
    Ok(base / output.factor())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conv::registry::{CREATION_KIT, IMPERIAL, METRIC};

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_convert_within_system() {
        assert_eq!(convert_within_system(1000.0, 2.5, 1.0), Ok(2500.0));
        assert_eq!(
            convert_within_system(1.0, 2.5, 0.0),
            Err(ConvError::DivideByZero)
        );
    }

    #[test]
    fn test_convert_across_systems() {
        assert_eq!(
            convert_across_systems(SystemId::Imperial, 10.0, SystemId::Imperial),
            Ok(10.0)
        );
        assert!(approx(
            convert_across_systems(SystemId::Imperial, 1.0, SystemId::Metric).unwrap(),
            0.3048
        ));
        assert!(approx(
            convert_across_systems(SystemId::Imperial, 0.046875, SystemId::CreationKit).unwrap(),
            1.0
        ));
        assert_eq!(
            convert_across_systems(SystemId::All, 1.0, SystemId::Metric),
            Err(ConvError::UnsupportedSystemPair(SystemId::All, SystemId::Metric))
        );
        assert!(convert_across_systems(SystemId::Metric, 1.0, SystemId::All).is_err());
    }

    #[test]
    fn test_convert_known_values() {
        let meter = METRIC.base();
        let foot = IMPERIAL.base();
        let unit = CREATION_KIT.base();
        let kilometer = METRIC.unit("Kilometer").unwrap();
        let mile = IMPERIAL.unit("Mile").unwrap();
        let inch = IMPERIAL.unit("Inch").unwrap();

        assert!(approx(convert(unit, 1.0, meter).unwrap(), 0.0142875313));
        assert!(approx(convert(meter, 1.0, foot).unwrap(), 1.0 / 0.3048));
        assert!(approx(convert(kilometer, 2.5, meter).unwrap(), 2500.0));
        assert!(approx(convert(mile, 1.0, inch).unwrap(), 63360.0));
        assert!(approx(convert(foot, 1.0, unit).unwrap(), 1.0 / 0.046875));
        assert!(approx(convert(mile, 1.0, kilometer).unwrap(), 1.609344));
    }

    #[test]
    fn test_convert_identity_is_exact() {
        let inch = IMPERIAL.unit("Inch").unwrap();
        assert_eq!(convert(inch, 0.1, inch), Ok(0.1));
    }

    #[test]
    fn test_convert_rejects_zero_factor() {
        let broken = Unit::new(SystemId::Metric, 0.0, "x", "Broken");
        assert_eq!(
            convert(&broken, 1.0, METRIC.base()),
            Err(ConvError::ZeroConversionFactor(0.0))
        );
        assert_eq!(
            convert(METRIC.base(), 1.0, &broken),
            Err(ConvError::ZeroConversionFactor(0.0))
        );
    }

    #[test]
    fn test_convert_rejects_wildcard_system() {
        let any = Unit::new(SystemId::All, 1.0, "(all)", "(all)");
        assert!(matches!(
            convert(&any, 1.0, METRIC.base()),
            Err(ConvError::UnsupportedSystemPair(SystemId::All, SystemId::Metric))
        ));
    }
}
