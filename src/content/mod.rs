//! Portfolio content: profile, skills, projects, experience and the contact
//! call to action.

pub mod icons;
pub mod loader;
pub mod plain;
pub mod types;

pub use loader::ContentError;
pub use types::{
    Content, ContactCta, ExperienceItem, Profile, ProfileLinks, Project, ProjectLinks,
    SkillCategory, TimelineEntry,
};
