//! Built-in audits, grouped by category.

pub mod legal;
