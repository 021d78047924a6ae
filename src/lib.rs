pub mod backend;
pub mod bin_constants;
pub mod cli;
pub mod config;
pub mod controller;
pub mod data;
pub mod identity;
mod lib_constants;
pub mod logging;
pub mod repository;
pub mod rng;
pub mod user_id;
pub mod util;
