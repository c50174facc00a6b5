// Length unit catalogs, unit resolution and conversion.
// Everything here is pure: no I/O, no logging, no mutable state.

pub mod engine;
pub mod error;
pub mod registry;
pub mod resolver;
pub mod system;
pub mod types;

#[cfg(test)]
mod tests;

pub use engine::{convert, convert_across_systems, convert_within_system};
pub use error::ConvError;
pub use registry::{list_units, system, system_from_name, CREATION_KIT, IMPERIAL, METRIC};
pub use resolver::resolve_unit;
pub use system::System;
pub use types::{Plural, SystemId, Unit};
