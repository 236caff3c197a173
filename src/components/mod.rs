//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page chrome and content sections while reading
//! shared state from the Leptos context provided at the root. Section
//! components derive their reveal class from state, never from DOM side
//! effects.

pub mod connect;
pub mod footer;
pub mod icons;
pub mod intro;
pub mod projects;
pub mod side_nav;
pub mod skills;
pub mod theme_toggle;
pub mod work;
