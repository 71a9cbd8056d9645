//! Consolidated test utilities for git-status-of-many
//!
//! This module provides unified testing utilities for integration tests,
//! built on real git repositories inside a temporary scan root.

pub mod assertions;
pub mod fixtures;
pub mod repository;
