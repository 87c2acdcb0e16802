pub mod complete_task;
pub mod decay;
pub mod initialize;
pub mod query_reputation;
pub mod register_agent;
pub mod update_config;
pub mod vouch;

pub use complete_task::*;
pub use decay::*;
pub use initialize::*;
pub use query_reputation::*;
pub use register_agent::*;
pub use update_config::*;
pub use vouch::*;
