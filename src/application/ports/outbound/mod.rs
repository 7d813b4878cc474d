//! Outbound ports - Interfaces that the application requires from external systems

mod repository_port;

pub use repository_port::{CharacterRepositoryPort, SkillRepositoryPort};
