pub mod command;
pub mod dto;
pub mod messages;
pub mod session;
