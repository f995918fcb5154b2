//! Progress logger
//!
//! The logger is built once at startup and handed by reference to every
//! component that reports progress. Its on/off state never changes after
//! construction.

/// Progress reporting context
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    active: bool,
}

impl Logger {
    /// Creates a logger that emits only when `active` is true
    pub fn new(active: bool) -> Self {
        Self { active }
    }

    /// Creates a logger that never emits
    pub fn disabled() -> Self {
        Self::new(false)
    }

    /// Returns true if progress lines are emitted
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Emits `[LOG] <message>` when active
    pub fn log(&self, message: impl AsRef<str>) {
        if let Some(line) = self.render(message.as_ref()) {
            tracing::info!("{}", line);
        }
    }

    fn render(&self, message: &str) -> Option<String> {
        self.active.then(|| format!("[LOG] {}", message))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_logger_renders_prefix() {
        let logger = Logger::new(true);
        assert!(logger.is_active());
        assert_eq!(
            logger.render("Writing projects"),
            Some("[LOG] Writing projects".to_string())
        );
    }

    #[test]
    fn test_inactive_logger_is_silent() {
        let logger = Logger::disabled();
        assert!(!logger.is_active());
        assert_eq!(logger.render("Writing projects"), None);
        logger.log("nothing happens");
    }
}
