//! Domain models for the matrix engine.
//!
//! Source tables (people, slots, requirements, allocations) parse into
//! typed records; artifacts are built as [`Grid`]s of tagged [`Cell`]s
//! and handed to the table store in one bulk write.

mod allocation;
mod grid;
mod person;
mod requirement;
mod slot;

pub use allocation::{AllocationColumns, AllocationRecord};
pub use grid::{Cell, Grid};
pub use person::{Person, Role};
pub use requirement::RequirementRecord;
pub use slot::Slot;
