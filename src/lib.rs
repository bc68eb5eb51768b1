//! Renders a "thank-you" card for a donation event: a tier-colored background
//! template, a down-scaled avatar icon and three text fields, written out as
//! a single PNG.

pub mod assets;
pub mod format;
pub mod generator;
pub mod tier;
