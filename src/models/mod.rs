pub mod config;
pub mod profile;
pub mod record;

pub use profile::UserProfile;
pub use record::DailyRecord;
