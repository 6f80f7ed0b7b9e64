/// Configuration subsystem - Host defaults and modeline preferences
///
/// This module handles loading .modelinerc files, which provide the settings a
/// document starts with before its own modeline is applied.

pub mod rc;

// Re-export public interface
pub use rc::{RcConfig, RcLoader};
