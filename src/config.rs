//! Construction settings for a grid.

use crate::error::GridError;

/// Settings used to build a [`crate::Grid`].
///
/// The defaults describe a 500x500 canvas drawn with 10 px cells, 16 trace
/// levels, and both wrapping and trace enabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
    pub live_state: u8,
    pub wrap: bool,
    pub trace: bool,
    /// Worker threads for `step()`. 0 uses the global rayon pool.
    pub threads: usize,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            rows: 50,
            cols: 50,
            live_state: 16,
            wrap: true,
            trace: true,
            threads: 0,
        }
    }
}

impl GridConfig {
    /// Default settings with the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        GridConfig {
            rows,
            cols,
            ..Default::default()
        }
    }

    pub fn with_live_state(mut self, live_state: u8) -> Self {
        self.live_state = live_state;
        self
    }

    pub fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Number of cells a grid with these dimensions holds.
    pub fn cell_count(&self) -> Result<usize, GridError> {
        self.rows
            .checked_mul(self.cols)
            .ok_or(GridError::TooManyCells {
                rows: self.rows,
                cols: self.cols,
            })
    }

    /// Reject settings the engine cannot run with.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.live_state <= 1 {
            return Err(GridError::InvalidLiveState(self.live_state));
        }
        self.cell_count()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GridConfig::default();
        assert_eq!(config.rows, 50);
        assert_eq!(config.cols, 50);
        assert_eq!(config.live_state, 16);
        assert!(config.wrap);
        assert!(config.trace);
        assert_eq!(config.threads, 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_setters() {
        let config = GridConfig::new(8, 12)
            .with_live_state(4)
            .with_wrap(false)
            .with_trace(false)
            .with_threads(2);

        assert_eq!(config.rows, 8);
        assert_eq!(config.cols, 12);
        assert_eq!(config.live_state, 4);
        assert!(!config.wrap);
        assert!(!config.trace);
        assert_eq!(config.threads, 2);
    }

    #[test]
    fn test_validate_rejects_small_live_state() {
        for live_state in [0, 1] {
            let config = GridConfig::new(4, 4).with_live_state(live_state);
            assert!(matches!(
                config.validate(),
                Err(GridError::InvalidLiveState(v)) if v == live_state
            ));
        }

        assert!(GridConfig::new(4, 4).with_live_state(2).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unaddressable_size() {
        let config = GridConfig::new(usize::MAX, 2);
        assert!(matches!(
            config.validate(),
            Err(GridError::TooManyCells { rows: usize::MAX, cols: 2 })
        ));

        // Zero on either side never overflows.
        assert_eq!(GridConfig::new(usize::MAX, 0).cell_count().unwrap(), 0);
        assert_eq!(GridConfig::new(3, 7).cell_count().unwrap(), 21);
    }
}
