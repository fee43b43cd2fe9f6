#![cfg(unix)]

mod list_extensions;
mod uninstall_extension;
