//! Unit and service tests for project membership and visibility.

mod domain_tests;
