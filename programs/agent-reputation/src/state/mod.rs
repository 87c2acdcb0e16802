pub mod agent_profile;
pub mod config;
pub mod reputation_level;
pub mod task_record;
pub mod vouch_record;

pub use agent_profile::*;
pub use config::*;
pub use reputation_level::*;
pub use task_record::*;
pub use vouch_record::*;
