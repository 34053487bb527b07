//! Integration test modules.

mod flow;
mod render;
