//! Data models for quotation extraction.

pub mod config;
pub mod quotation;
pub mod template;
