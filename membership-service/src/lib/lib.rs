pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::membership;
pub use domain::roles;
pub use outbound::repositories;
