//! Record normalization pipeline.
//!
//! Stages, in order:
//! - **standardizer**: noise stripping, tokenizing, fused-name splitting
//! - **order**: (last, first) detection and swap
//! - **classifier**: phone / zip / color assignment by pattern priority
//! - **assembler**: record construction and phone formatting
//! - **driver**: runs the stages per line and isolates failures

pub mod assembler;
pub mod classifier;
pub mod driver;
pub mod order;
pub mod standardizer;

pub use classifier::{ClassifiedFields, FieldKind};
pub use driver::Normalizer;
pub use order::OrderRule;
pub use standardizer::EXPECTED_FIELDS;
