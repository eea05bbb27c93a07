//! Concrete provider clients.

pub mod groq_service;
