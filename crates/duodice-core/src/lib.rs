//! Core data types for Duodice.
//!
//! This crate provides the value types shared by the game logic and the
//! presentation layer:
//!
//! - [`DieFace`]: a type-safe die value in the range 1-6.
//! - [`Pip`] and [`PipSet`]: the canonical dot layout of each face.
//! - [`DicePair`]: two faces ordered so the larger one comes first.
//!
//! No randomness or UI code lives here.

pub use self::{dice_pair::*, die_face::*, pip::*};

mod dice_pair;
mod die_face;
mod pip;
