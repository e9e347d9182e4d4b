//! Artist resource: domain types, the store abstraction and the service on top.

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use domain::{ArtistFields, ArtistRecord};
pub use repository::ArtistRepository;
pub use service::ArtistService;
