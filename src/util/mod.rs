//! Shared math utilities for the trackball engines.

pub mod vector;
