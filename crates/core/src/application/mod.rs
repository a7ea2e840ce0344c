// Application Layer - Use Cases and Business Logic

pub mod job_dao;
pub mod job_service;
pub mod shutdown;

// Re-exports
pub use job_dao::JobDao;
pub use job_service::{JobService, UpdateJobRequest};
pub use shutdown::{shutdown_channel, ShutdownSender, ShutdownToken};
