//! Tools module
//!
//! MCP tool implementations for the Pizza Dough Calculator.

pub mod calculator;
pub mod catalog;
pub mod recipes;
pub mod status;
pub mod widgets;
