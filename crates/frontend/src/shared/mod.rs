pub mod api_utils;
pub mod components;
pub mod config;
pub mod dom;
pub mod form_validator;
pub mod fragment;
pub mod request_generation;
