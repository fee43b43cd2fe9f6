//! `plz extension install|uninstall|list` and dispatch of `plz <name> [args...]`.

pub mod dispatch;
pub mod install;
pub mod list;
pub mod uninstall;
