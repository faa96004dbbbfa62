//! Portfolio content: immutable datasets and the pure transforms over them.
//!
//! Everything in this crate is hard-coded literal data plus deterministic
//! list operations. Nothing here touches the network, the DOM, or any
//! clock; the client and server crates both depend on it, so it must stay
//! target-agnostic.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`profile`] | Site identity, hero rotation list, social links |
//! | [`awards`] | Academic awards and honors |
//! | [`publications`] | Publication records and the filter/sort transform |
//! | [`projects`] | Project showcase records and tab/category filtering |
//! | [`education`] | Degrees, coursework, certifications |
//! | [`skills`] | Skill categories and technical achievements |
//! | [`experience`] | Research and professional experience |
//! | [`contact`] | Contact message type and validation |

pub mod awards;
pub mod contact;
pub mod education;
pub mod experience;
pub mod profile;
pub mod projects;
pub mod publications;
pub mod skills;
