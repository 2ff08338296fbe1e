//! 认证模块
//!
//! JWT 令牌、密码哈希与 Axum 中间件。

pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::{require_auth, require_role};
pub use password::{hash_password, verify_password};
