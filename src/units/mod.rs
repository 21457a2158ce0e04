pub mod kind;
pub mod registry;

pub use kind::{Family, QuantityKind};
pub use registry::{
    base_unit, find_unit, lookup_unit, require_unit, unit_factor, units_for, Unit,
};
