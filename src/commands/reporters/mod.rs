pub mod environment;
pub mod status;
