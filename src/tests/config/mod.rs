//! Config tests.

mod app_config_tests;
