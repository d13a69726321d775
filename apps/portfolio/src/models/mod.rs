// Canonical in-memory types. Everything here is produced by `crate::normalize`
// and never deserialized directly from untrusted payloads.

pub mod article;
pub mod profile;

pub use article::{Article, ArticleListItem};
pub use profile::{ExperienceItem, ExperienceProject, Profile, SkillLevel, Skills, TechWeight};
