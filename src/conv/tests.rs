#[cfg(test)]
mod tests {
    use super::super::engine::convert;
    use super::super::registry::{list_units, CREATION_KIT, IMPERIAL, METRIC};
    use super::super::resolver::resolve_unit;
    use super::super::types::SystemId;

    const SAMPLES: [f64; 6] = [0.0, 1.0, -3.5, 0.125, 1234.5678, 1e-3];

    fn close(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() <= tolerance * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_round_trip_within_each_system() {
        for id in [SystemId::Metric, SystemId::Imperial, SystemId::CreationKit] {
            let units = list_units(id);
            for a in &units {
                for b in &units {
                    for x in SAMPLES {
                        let there = convert(a, x, b).unwrap();
                        let back = convert(b, there, a).unwrap();
                        assert!(
                            close(back, x, 1e-9),
                            "{} -> {} -> {} gave {} for {}",
                            a, b, a, back, x
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_identity_for_every_unit() {
        for unit in list_units(SystemId::All) {
            for x in SAMPLES {
                assert_eq!(convert(unit, x, unit).unwrap(), x);
            }
        }
    }

    #[test]
    fn test_round_trip_across_systems() {
        let bases = [METRIC.base(), IMPERIAL.base(), CREATION_KIT.base()];
        for a in bases {
            for b in bases {
                for x in SAMPLES {
                    let back = convert(b, convert(a, x, b).unwrap(), a).unwrap();
                    assert!(close(back, x, 1e-9), "{} -> {} gave {}", a, b, back);
                }
            }
        }
    }

    #[test]
    fn test_foot_meter_foot() {
        let foot = resolve_unit("ft", None).unwrap();
        let meter = resolve_unit("m", None).unwrap();
        for x in SAMPLES {
            let meters = convert(&foot, x, &meter).unwrap();
            assert!(close(convert(&meter, meters, &foot).unwrap(), x, 1e-12));
        }
    }

    #[test]
    fn test_resolved_units_convert_end_to_end() {
        let unit = resolve_unit("u", None).unwrap();
        let meter = resolve_unit("meters", None).unwrap();
        let feet = resolve_unit("feet", None).unwrap();
        let yards = resolve_unit("yards", None).unwrap();

        assert!(close(convert(&unit, 1.0, &meter).unwrap(), 0.0142875313, 1e-12));
        assert!(close(convert(&meter, 1.0, &feet).unwrap(), 3.280839895013123, 1e-12));
        assert!(close(convert(&yards, 2.0, &feet).unwrap(), 6.0, 1e-12));
    }

    #[test]
    fn test_every_symbol_resolves_to_its_unit() {
        for unit in list_units(SystemId::All).into_iter().filter(|u| u.has_symbol()) {
            let resolved = resolve_unit(unit.symbol(), None).unwrap();
            assert_eq!(&resolved, unit, "symbol '{}'", unit.symbol());
        }
    }

    #[test]
    fn test_every_name_resolves_to_its_unit() {
        for unit in list_units(SystemId::All) {
            let resolved = resolve_unit(unit.full_name(), None).unwrap();
            assert_eq!(&resolved, unit, "name '{}'", unit.full_name());
            let resolved = resolve_unit(&unit.plural_name(), None).unwrap();
            assert_eq!(&resolved, unit, "plural '{}'", unit.plural_name());
        }
    }
}
