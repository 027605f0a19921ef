//! Bridge between terminal input and the controller: command parsing and line intake.

pub mod commands;
pub mod runtime;
