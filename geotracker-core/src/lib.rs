pub mod config;
pub mod controller;
pub mod gateways;

pub use self::{config::Config, controller::*, gateways::map::*};
