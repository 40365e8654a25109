pub mod config;
pub mod pages;
pub mod routes;
pub mod shell;
