//! Scan cycle orchestration and scheduling.

pub mod orchestrator;
pub mod scheduler;

pub use orchestrator::ScanOrchestrator;
pub use scheduler::ScanScheduler;
