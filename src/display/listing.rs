use crate::conv::registry::{system, system_from_name};
use crate::conv::resolver::resolve_unit;
use crate::conv::system::System;
use crate::conv::types::{SystemId, Unit};
use crate::display::formatter::NumberFormat;
use crate::display::palette::Palette;

/// Placeholder returned for names that are neither a system nor a unit
const ANY_UNIT: Unit = Unit::new(SystemId::All, 0.0, "(all)", "(all)");

const SYMBOL_WIDTH: usize = 8;
const NAME_WIDTH: usize = 16;

/// Order in which systems are printed when listing everything
const LISTING_ORDER: [SystemId; 3] = [SystemId::CreationKit, SystemId::Metric, SystemId::Imperial];

/// Pick the system to list from a system name or any unit token
pub fn system_for_query(query: &str) -> SystemId {
    system_from_name(query).unwrap_or_else(|| {
        resolve_unit(query, Some(ANY_UNIT))
            .map(|unit| unit.system())
            .unwrap_or(SystemId::All)
    })
}

/// Unit tables for one system, or all of them
pub fn render_units(id: SystemId, palette: &Palette) -> String {
    let tables: Vec<String> = match system(id) {
        Some(system) => vec![render_system(system, palette)],
        None => LISTING_ORDER
            .iter()
            .filter_map(|id| system(*id))
            .map(|system| render_system(system, palette))
            .collect(),
    };
    tables.join("\n")
}

fn render_system(system: &System, palette: &Palette) -> String {
    let number = NumberFormat::default();
    let base = system.base().symbol();

    let mut out = String::new();
    out.push_str(&palette.paint(palette.header, &format!("{} Units:", system.name())));
    out.push('\n');
    out.push_str("  Symbol  Name            1 in Base Unit\n");
    out.push_str("  --------------------------------------\n");

    for unit in system.units() {
        out.push_str(&format!(
            "  {:<sw$}{:<nw$}{} {}\n",
            unit.symbol(),
            unit.full_name(),
            palette.paint(palette.accent, &number.format(unit.factor())),
            base,
            sw = SYMBOL_WIDTH,
            nw = NAME_WIDTH,
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_for_query() {
        assert_eq!(system_for_query(""), SystemId::All);
        assert_eq!(system_for_query("ck"), SystemId::CreationKit);
        assert_eq!(system_for_query("Metric"), SystemId::Metric);
        assert_eq!(system_for_query("feet"), SystemId::Imperial);
        assert_eq!(system_for_query("km"), SystemId::Metric);
        assert_eq!(system_for_query("nonsense"), SystemId::All);
    }

    #[test]
    fn test_render_single_system() {
        let table = render_units(SystemId::Imperial, &Palette::plain());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "Imperial Units:");
        assert_eq!(lines[1], "  Symbol  Name            1 in Base Unit");
        assert_eq!(lines.len(), 3 + 16);
        assert!(lines.contains(&"  yd      Yard            3 '"));
        assert!(lines.contains(&"          Cable           607.61 '"));
    }

    #[test]
    fn test_render_all_systems() {
        let table = render_units(SystemId::All, &Palette::plain());
        let headers: Vec<&str> = table.lines().filter(|l| l.ends_with("Units:")).collect();
        assert_eq!(
            headers,
            vec!["Creation Kit Units:", "Metric Units:", "Imperial Units:"]
        );
        assert!(table.contains("  km      Kilometer       1000 m\n"));
        assert!(table.contains("  ym      Yoctometer      1e-24 m\n"));
    }
}
