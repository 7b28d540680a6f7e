pub mod config;
pub mod logging;

pub mod command;
pub mod console;
pub mod link;
pub mod person;
pub mod repository;
pub mod resource;
pub mod transport;
