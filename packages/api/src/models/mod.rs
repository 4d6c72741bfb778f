//! Data models for the application.

mod activity_log;
mod section;
mod settings;
mod user;

#[cfg(feature = "server")]
pub use activity_log::ActivityLog;
pub use activity_log::{LEGACY_VIEW_PAGE, VIEW_PAGE};
pub use section::{PageContent, Section, SectionBlock};
pub use settings::SiteSettings;
#[cfg(feature = "server")]
pub use user::User;
pub use user::Role;
