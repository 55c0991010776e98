pub mod basics;
pub mod classify;
pub mod closure;
pub mod layout;
pub mod modular;
pub mod properties;
pub mod relation;
