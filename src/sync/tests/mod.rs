//! Unit tests for the sync context.


mod domain_tests;
