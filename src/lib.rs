//! Cake store backend
//!
//! 蛋糕店电商后端: 菜单、购物车、订单、支付、顾客、收藏、预约、库存。
//!
//! # 模块
//!
//! | 模块 | 说明 |
//! |------|------|
//! | [`api`] | HTTP 路由与处理函数 |
//! | [`auth`] | JWT、密码哈希与中间件 |
//! | [`core`] | 配置、状态与服务器 |
//! | [`db`] | 嵌入式 SurrealDB、模型与仓储 |
//! | [`orders`] | 订单服务、金额计算与状态机 |
//! | [`payment`] | 支付网关与支付服务 |
//! | [`utils`] | 错误、日志、时间、校验 |

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod orders;
pub mod payment;
pub mod utils;

pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};
