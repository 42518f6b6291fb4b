//! Page components.

pub mod array_visualizer;
pub mod chrome;
pub mod code_panel;
pub mod starfield;
pub mod theme;
