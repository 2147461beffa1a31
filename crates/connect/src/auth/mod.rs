//! Login and registration view flows.

mod auth_controller;


pub use auth_controller::AuthController;
