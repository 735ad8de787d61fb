/// End-to-end tests: files on disk and full shell sessions
mod basic_integration;
mod session_integration;
#[cfg(unix)]
mod signal_integration;
