pub mod membership;
pub mod principal;
pub mod roles;
