// Presentation of conversion results and unit tables

pub mod formatter;
pub mod listing;
pub mod output;
pub mod palette;

pub use formatter::{Notation, NumberFormat};
pub use listing::{render_units, system_for_query};
pub use output::{ConversionRecord, Converted, DisplayOptions};
pub use palette::{Color, Palette};
