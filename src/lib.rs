//! My personal toolbox of small building blocks that keep turning up across projects.
//!
//! # Purpose
//! Nothing in here is a system on its own. Each module is a leaf: a container, a handful of
//! numeric helpers, a few signal processing windows, some physics integrators and thin wrappers
//! around OS error codes and file I/O. None of them share state and none of them spawn threads.
//!
//! The largest piece is [`BoundedVector`](collections::bounded::BoundedVector), a vector whose
//! capacity is fixed at the type level and whose elements live inline, so it never touches the
//! heap.
//!
//! # Error Handling
//! When something can fail because of the caller's input (a full container, a degenerate fit, a
//! missing file) this crate returns strongly typed errors: small structs that implement
//! [`Error`](std::error::Error), grouped into enums for static dispatch. Container methods come in
//! pairs, where the plain version panics with the error's message and the `try_` version returns
//! it. Broken preconditions that can only come from a programming mistake are caught with
//! `debug_assert!` and are not checked in release builds.
//!
//! # Features
//! - `bounded`: [`BoundedVector`](collections::bounded::BoundedVector).
//! - `ring`: [`SaturatingRing`](collections::ring::SaturatingRing), built on `bounded`.
//! - `fs`: file helpers and errno names, which pull in `libc` and the `log` facade.
//!
//! All of them are enabled by default. The numeric, signal processing, physics, music, hashing
//! and evariant modules are always available.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;
pub mod dsp;
pub mod evariant;
#[cfg(all(feature = "fs", unix))]
pub mod fs;
pub mod hash;
pub mod music;
pub mod num;
pub mod physics;
#[cfg(all(feature = "fs", unix))]
pub mod sys;

pub(crate) mod util;
