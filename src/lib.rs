// SPDX-License-Identifier: MPL-2.0
//! `iced_panzoom` adds mouse, wheel and touch pan-and-zoom to a video surface
//! rendered with the Iced GUI framework.
//!
//! The core engine lives in [`pan_zoom`] and does not depend on a running
//! iced application; [`input`] bridges iced events and the frame clock to it.
//! Behaviour is tuned through a TOML-backed [`config::PanZoomConfig`].

#![doc(html_root_url = "https://docs.rs/iced_panzoom/0.1.0")]

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod input;
pub mod pan_zoom;

#[cfg(test)]
pub(crate) mod test_utils;
