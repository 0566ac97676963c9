pub mod service_manager;

pub use crate::domain::model::ServiceState;
pub use crate::domain::ports::StatusSink;
pub use service_manager::ServiceManager;
