use crate::conv::types::{SystemId, Unit};
use crate::display::formatter::NumberFormat;
use crate::display::palette::Palette;
use serde::Serialize;

/// Presentation settings, passed explicitly to everything that renders
#[derive(Debug, Clone, Default)]
pub struct DisplayOptions {
    pub quiet: bool,
    pub full_names: bool,
    pub align_to: Option<usize>,
    pub number: NumberFormat,
    pub palette: Palette,
}

impl DisplayOptions {
    /// Symbol or (pluralized) full name, depending on preferences
    pub fn unit_label(&self, unit: &Unit, value: f64) -> String {
        unit.display_name(self.full_names, value != 1.0)
    }
}

/// A finished conversion, ready to print
#[derive(Debug, Clone, PartialEq)]
pub struct Converted {
    pub input_unit: Unit,
    pub input_value: f64,
    pub output_unit: Unit,
    pub output_value: f64,
}

impl Converted {
    pub fn new(input_unit: Unit, input_value: f64, output_unit: Unit, output_value: f64) -> Self {
        Self {
            input_unit,
            input_value,
            output_unit,
            output_value,
        }
    }

    /// "<value> <unit> = <value> <unit>", or just the output value when quiet
    pub fn render(&self, options: &DisplayOptions) -> String {
        let palette = &options.palette;
        let output_value = palette.paint(
            palette.result,
            &options.number.format(self.output_value),
        );

        if options.quiet {
            return output_value;
        }

        let input_value = options.number.format(self.input_value);
        let input_unit = options.unit_label(&self.input_unit, self.input_value);
        let output_unit = options.unit_label(&self.output_unit, self.output_value);

        // pad so that " = " starts at the requested column
        let used = input_value.len() + 1 + input_unit.len();
        let margin = options.align_to.map_or(0, |col| col.saturating_sub(1));
        let padding = " ".repeat(margin.saturating_sub(used));

        format!(
            "{} {}{} = {} {}",
            palette.paint(palette.input, &input_value),
            palette.paint(palette.unit, &input_unit),
            padding,
            output_value,
            palette.paint(palette.unit, &output_unit),
        )
    }

    pub fn record(&self, options: &DisplayOptions) -> ConversionRecord {
        ConversionRecord {
            input_unit: options.unit_label(&self.input_unit, self.input_value),
            input_system: self.input_unit.system(),
            input_value: self.input_value,
            output_unit: options.unit_label(&self.output_unit, self.output_value),
            output_system: self.output_unit.system(),
            output_value: self.output_value,
        }
    }
}

/// Machine-readable form of a conversion
#[derive(Debug, Clone, Serialize)]
pub struct ConversionRecord {
    pub input_unit: String,
    pub input_system: SystemId,
    pub input_value: f64,
    pub output_unit: String,
    pub output_system: SystemId,
    pub output_value: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conv::registry::{IMPERIAL, METRIC};
    use crate::display::palette::Palette;

    fn sample() -> Converted {
        Converted::new(*METRIC.unit("Kilometer").unwrap(), 2.0, *IMPERIAL.base(), 6561.68)
    }

    fn plain() -> DisplayOptions {
        DisplayOptions {
            palette: Palette::plain(),
            ..DisplayOptions::default()
        }
    }

    #[test]
    fn test_render_symbols() {
        assert_eq!(sample().render(&plain()), "2 km = 6561.68 '");
    }

    #[test]
    fn test_render_full_names() {
        let options = DisplayOptions {
            full_names: true,
            ..plain()
        };
        assert_eq!(sample().render(&options), "2 Kilometers = 6561.68 Feet");

        let one = Converted::new(*IMPERIAL.base(), 1.0, *IMPERIAL.unit("Inch").unwrap(), 12.0);
        assert_eq!(one.render(&options), "1 Foot = 12 Inches");
    }

    #[test]
    fn test_render_quiet() {
        let options = DisplayOptions {
            quiet: true,
            ..plain()
        };
        assert_eq!(sample().render(&options), "6561.68");
    }

    #[test]
    fn test_render_aligned() {
        let options = DisplayOptions {
            align_to: Some(10),
            ..plain()
        };
        assert_eq!(sample().render(&options), "2 km      = 6561.68 '");
        // already past the column
        let options = DisplayOptions {
            align_to: Some(2),
            ..plain()
        };
        assert_eq!(sample().render(&options), "2 km = 6561.68 '");
    }

    #[test]
    fn test_render_colored() {
        let rendered = sample().render(&DisplayOptions::default());
        assert!(rendered.contains("\x1b[36m2\x1b[0m"));
        assert!(rendered.contains("\x1b[32m6561.68\x1b[0m"));
    }

    #[test]
    fn test_record_json() {
        let json = serde_json::to_value(sample().record(&plain())).unwrap();
        assert_eq!(json["input_unit"], "km");
        assert_eq!(json["input_system"], "metric");
        assert_eq!(json["output_value"], 6561.68);
    }
}
