// Test modules for kv-logger crate
//
// Each source file has a corresponding test file focused on the behavior
// callers rely on.

// Capture sinks and writers shared by the unit tests
pub mod helpers;

pub mod level;
