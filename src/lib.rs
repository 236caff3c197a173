//! # portfolio
//!
//! Leptos + WASM single-page portfolio site: static introduction, skills,
//! work history, project showcase, and contact sections with
//! scroll-triggered reveals, scroll-spy side navigation, and a dark/light
//! theme toggle.
//!
//! This crate contains the page, components, application state, literal
//! site content, and the browser glue (intersection observer, smooth
//! scrolling, document-root theme attribute). Everything renders
//! client-side; there is no server and no persistence.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;
