pub mod comment;
pub mod database;
pub mod middleware;
pub mod router;
pub mod user;
pub mod utils;
pub mod video;
