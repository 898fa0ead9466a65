pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod view;
pub mod web;
