// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Trackball controller for interactive 3D scenes.
//!
//! Translates pointer and touch input into rotation, zoom, and pan of either
//! an orbiting camera or a single scene object. The controller never renders:
//! it consumes [`input::InputEvent`]s, and on every frame tick moves the
//! host-owned [`camera::Camera`] and [`scene::SceneObject`].
//!
//! # Key entry points
//!
//! - [`controls::TrackballController`] - the controller itself
//! - [`input::InputEvent`] - platform-agnostic input vocabulary
//! - [`options::Options`] - runtime configuration with TOML presets
//! - [`controls::ControlEvent`] - `start` / `change` / `end` notifications
//!
//! # Frame loop
//!
//! ```
//! use glam::Vec3;
//! use trackball::camera::Camera;
//! use trackball::controls::TrackballController;
//! use trackball::input::{InputEvent, MouseButton};
//! use trackball::scene::SceneObject;
//!
//! let mut camera = Camera::new(Vec3::new(0.0, 0.0, 600.0), Vec3::Y);
//! let mut object = SceneObject::default();
//! let mut controls =
//!     TrackballController::new(&mut camera, &object, Vec3::ZERO);
//! controls.handle_resize(800.0, 600.0);
//!
//! let _ = controls.handle_event(
//!     &InputEvent::Press { button: MouseButton::Left, x: 400.0, y: 300.0 },
//!     &camera,
//! );
//! let _ = controls.handle_event(&InputEvent::Move { x: 450.0, y: 300.0 }, &camera);
//! let changed = controls.update(&mut camera, &mut object);
//! assert!(changed);
//! ```
//!
//! With the `viewer` feature, [`input::winit::WinitInput`] translates
//! `winit` window events into [`input::InputEvent`]s.

pub mod camera;
pub mod controls;
pub mod error;
pub mod input;
pub mod options;
pub mod scene;
pub mod util;
