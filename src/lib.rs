//! Pizza Dough Calculator (doughcalc) Library
//!
//! Dough formulation, recipe scaling, unit conversion and production
//! scheduling, plus the MCP tools that expose them.

pub mod build_info;
pub mod dough;
pub mod mcp;
pub mod models;
pub mod store;
pub mod tools;
