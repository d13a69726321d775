// Derived views over a normalized `Profile`: timeline order and tech mix.

pub mod tech_mix;
pub mod timeline;

pub use tech_mix::{tech_color_hex, tech_shares, TechShare};
pub use timeline::sorted_experience;
