pub mod commands;
pub mod email;
pub mod environment;
pub mod logging;
