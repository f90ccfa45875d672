//! Registry and builder tests.
