//! Messages and generation options exchanged with completion backends.

pub mod entities;
