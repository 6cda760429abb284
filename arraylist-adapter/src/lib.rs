//! Surface binding for the `arraylist` crate.
//!
//! The `arraylist` crate is UI-agnostic and owns the list state and algorithms. This crate
//! connects it to a display:
//!
//! - [`Surface`] / [`Host`]: what a rendering backend implements
//! - [`Widget`]: drives the engine from host frames and applies every change to the surface
//! - [`Slide`]: eased enter/exit progress for hosts that animate item slides
//!
//! This crate is framework-agnostic (no DOM/egui/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod surface;
mod tween;
mod widget;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use surface::{Host, Surface};
pub use tween::{Easing, Slide, SlideDirection};
pub use widget::Widget;
