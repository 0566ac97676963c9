use crate::adapters::ConsoleSink;
use crate::config::Config;
use crate::domain::model::ServiceState;
use crate::domain::ports::StatusSink;
use crate::utils::error::{MiddlewareError, Result};

/// Owns a service's config and drives it through initialize, run and stop.
///
/// Dropping a manager that has not been stopped since its last `run` stops it,
/// so the running state is released on every exit path.
pub struct ServiceManager<S: StatusSink = ConsoleSink> {
    config: Config,
    state: ServiceState,
    sink: S,
    // true once stop() has run; cleared again by run()
    released: bool,
}

impl ServiceManager<ConsoleSink> {
    pub fn new(config: Config) -> Self {
        Self::with_sink(config, ConsoleSink)
    }
}

impl<S: StatusSink> ServiceManager<S> {
    pub fn with_sink(config: Config, sink: S) -> Self {
        Self {
            config,
            state: ServiceState::Stopped,
            sink,
            released: false,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn state(&self) -> ServiceState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == ServiceState::Running
    }

    /// Reports the configured name and port. Does not change state.
    pub fn initialize(&mut self) -> Result<bool> {
        tracing::debug!(
            service = %self.config.service_name,
            port = self.config.port,
            state = %self.state,
            "Initializing service"
        );

        let line = format!(
            "Initializing {} on port {}",
            self.config.service_name, self.config.port
        );
        self.sink
            .emit(&line)
            .map_err(|e| MiddlewareError::InitializationFailed {
                message: format!("cannot report initialization: {}", e),
            })?;

        Ok(true)
    }

    /// Enters `Running`, makes a single pass of the main loop and returns in
    /// `Stopped`.
    #[allow(clippy::never_loop)]
    pub fn run(&mut self) -> Result<()> {
        self.state = ServiceState::Running;
        self.released = false;
        tracing::info!(service = %self.config.service_name, "Service running");

        if let Err(e) = self.sink.emit("Service started.") {
            self.state = ServiceState::Stopped;
            return Err(e.into());
        }

        while self.is_running() {
            // Main loop
            break;
        }

        self.state = ServiceState::Stopped;
        tracing::debug!(service = %self.config.service_name, "Main loop exited");
        Ok(())
    }

    /// Idempotent: always ends in `Stopped` and always reports it.
    pub fn stop(&mut self) {
        self.state = ServiceState::Stopped;
        self.released = true;
        tracing::info!(service = %self.config.service_name, "Service stopped");

        if let Err(e) = self.sink.emit("Service stopped.") {
            tracing::warn!("⚠️ Failed to report service stop: {}", e);
        }
    }
}

impl<S: StatusSink> Drop for ServiceManager<S> {
    fn drop(&mut self) {
        if !self.released {
            tracing::debug!(service = %self.config.service_name, "Stopping service on teardown");
            self.stop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemorySink;
    use std::io;

    struct BrokenSink;

    impl StatusSink for BrokenSink {
        fn emit(&mut self, _line: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    fn manager(sink: &MemorySink) -> ServiceManager<MemorySink> {
        ServiceManager::with_sink(Config::new("Auth", 8080, true), sink.clone())
    }

    #[test]
    fn test_new_manager_is_stopped() {
        let sink = MemorySink::new();
        let service = manager(&sink);
        assert_eq!(service.state(), ServiceState::Stopped);
        assert!(!service.is_running());
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_initialize_keeps_state() {
        let sink = MemorySink::new();
        let mut service = manager(&sink);

        assert!(service.initialize().unwrap());
        assert!(service.initialize().unwrap());
        assert_eq!(service.state(), ServiceState::Stopped);
        assert_eq!(sink.count("Initializing Auth on port 8080"), 2);
    }

    #[test]
    fn test_run_ends_stopped_without_stop_line() {
        let sink = MemorySink::new();
        let mut service = manager(&sink);

        service.run().unwrap();
        assert_eq!(service.state(), ServiceState::Stopped);
        assert_eq!(sink.lines(), vec!["Service started.".to_string()]);
    }

    #[test]
    fn test_run_rearms_teardown_stop() {
        let sink = MemorySink::new();
        {
            let mut service = manager(&sink);
            service.run().unwrap();
            service.stop();
            service.run().unwrap();
        }
        assert_eq!(sink.count("Service started."), 2);
        assert_eq!(sink.count("Service stopped."), 2);
    }

    #[test]
    fn test_initialize_reports_sink_failure() {
        let mut service = ServiceManager::with_sink(Config::default(), BrokenSink);
        let err = service.initialize().unwrap_err();
        assert!(matches!(err, MiddlewareError::InitializationFailed { .. }));
    }

    #[test]
    fn test_run_with_broken_sink_returns_to_stopped() {
        let mut service = ServiceManager::with_sink(Config::default(), BrokenSink);
        assert!(matches!(service.run(), Err(MiddlewareError::IoError(_))));
        assert_eq!(service.state(), ServiceState::Stopped);
        // stop swallows the write error
        service.stop();
        assert_eq!(service.state(), ServiceState::Stopped);
    }
}
