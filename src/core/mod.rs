// Domain types shared by every layer

pub mod errors;
pub mod models;
pub mod validation;
