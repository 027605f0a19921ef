//! UI layer for the console: text and JSON rendering of views and notifications.

pub mod render;

pub use render::{OutputFormat, Renderer};
