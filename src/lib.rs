//! Criteria Compass - Decision Criteria Engine
//!
//! This crate implements the classical decision-theory criteria for choosing
//! among alternatives whose outcomes depend on an uncertain state of nature.

pub mod application;
pub mod domain;
