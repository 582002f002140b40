pub mod controller;
pub mod index;
pub mod memory;
pub mod model;
pub mod service;
pub mod store;
