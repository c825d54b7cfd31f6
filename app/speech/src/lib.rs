pub mod config;
pub mod event;
pub mod handler;
pub mod web;
