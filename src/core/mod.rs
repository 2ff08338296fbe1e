//! 核心模块
//!
//! 配置、服务器状态与 HTTP 服务器。

pub mod config;
pub mod server;
pub mod state;

pub use config::{Config, setup_environment};
pub use server::Server;
pub use state::ServerState;
