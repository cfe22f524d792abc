//! Tabular join and pivot-matrix engine for lesson-slot allocation.
//!
//! Coordinates scheduling data held as independent tables (people,
//! slots, reference descriptors, allocation records) and derives two
//! artifacts: editable *selection matrices* capturing candidate
//! person×slot pairs as checkboxes, and read-only *visualization
//! matrices* rendering an externally computed allocation. The allocation
//! decision itself is out of scope — this crate prepares the optimizer's
//! inputs and renders its outputs.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Person`, `Slot`, `RequirementRecord`,
//!   `AllocationRecord`, the tagged `Cell`, and `Grid`
//! - **`store`**: Injected host boundary — `TableStore`, `Confirmer`,
//!   plus an in-memory implementation for tests and demos
//! - **`reference`**: Id→label resolution with explicit fallbacks, and
//!   requirement aggregation into per-person annotations
//! - **`matrix`**: The layout contract, position index, layout-width
//!   preservation, and the build/extract/join operations
//! - **`reset`**: Output artifact reset lifecycle
//! - **`engine`**: `MatrixEngine`, the per-operation orchestrator
//!
//! # Execution model
//!
//! Single-threaded and non-reentrant: one operation runs to completion
//! at a time. Reads are batched per source table at operation start and
//! writes per artifact at operation end; confirmation prompts are the
//! only blocking points and always precede the first mutation.

pub mod engine;
pub mod error;
pub mod matrix;
pub mod models;
pub mod reference;
pub mod reset;
pub mod store;
pub mod tables;

pub use engine::{
    BuildReport, EngineOptions, ExtractReport, MatrixEngine, ResetReport, VisualizeReport,
};
pub use error::{OperationError, OperationResult};
pub use models::{AllocationRecord, Cell, Grid, Person, Role, Slot};
