pub mod extensions;
pub mod git;
pub mod host;
