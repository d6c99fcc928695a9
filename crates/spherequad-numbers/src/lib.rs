//! # spherequad-numbers
//!
//! Exact arithmetic for the sphere measure recurrences.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision rationals (`Rational`)
//! - Exact rational multiples of powers of π (`PiRational`)
//!
//! Every closed-form quantity produced by the recurrences (surface measures of
//! unit spheres, monomial integrals over them) has the form `c·π^k` with `c`
//! rational, so `PiRational` is closed under everything the engine needs.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod pi;
pub mod rational;

#[cfg(test)]
mod proptests;

pub use pi::PiRational;
pub use rational::Rational;
