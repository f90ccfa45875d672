//! Sink implementation tests.

mod memory_tests;
