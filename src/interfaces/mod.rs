pub mod forms;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
