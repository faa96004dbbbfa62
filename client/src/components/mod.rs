//! Reusable UI component modules.
//!
//! Feature components own their view-local state (tabs, filters, expanded
//! panels); the canvas hosts bridge Leptos to the imperative `motion`
//! simulations.

pub mod awards_publications;
pub mod contact_form;
pub mod education_panel;
pub mod experience_panel;
pub mod flow_canvas;
pub mod header;
pub mod hero;
pub mod orbit_canvas;
pub mod particle_canvas;
pub mod projects_grid;
pub mod skills_panel;
