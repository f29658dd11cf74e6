//! Built-in lint rules, grouped by category.

pub mod compound;
