//! API integration tests

mod planning_test;
