//! Integration test harness
