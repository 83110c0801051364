//! Exact route solver for Nightwalk.
//!
//! This crate provides [`ExhaustiveSolver`], the default implementation of the
//! [`Solver`](nightwalk_core::Solver) trait. It evaluates every ordering of the
//! requested stops and keeps the one with the smallest great-circle length, so
//! the returned tour is provably optimal.
//!
//! The search costs `O(n! · n)` and is only meant for the handful of stops a
//! visitor picks for one night. [`ExhaustiveSolverConfig::max_stops`] rejects
//! larger requests up front, and the search polls a
//! [`CancellationToken`](nightwalk_core::CancellationToken) after every
//! candidate so abandoned requests stop consuming CPU.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod permutation;
mod solver;

pub use solver::{ExhaustiveSolver, ExhaustiveSolverConfig};
