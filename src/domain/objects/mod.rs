pub mod argument_list;
pub mod divergence;
pub mod extension_name;
pub mod installed_extension;
pub mod status_report;

/// Matches any path separator; extension names must be a single path component.
pub const PATH_SEPARATOR_REGEX: &str = r"[/\\]";
