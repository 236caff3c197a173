//! Client-side state models.
//!
//! DESIGN
//! ======
//! State is plain data, separate from rendering: components read and write
//! it through a single `RwSignal<UiState>` context, and the browser glue in
//! `util` only ever mutates it through the methods here. That keeps the
//! reveal and scroll-spy rules natively testable without a DOM.

pub mod sections;
pub mod ui;
