use std::path::PathBuf;

use crate::auth::JwtConfig;

/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | /var/lib/cakestore | 工作目录 (数据库、日志) |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | PAYMENT_ENDPOINT | https://app.sandbox.midtrans.com | 支付网关地址 |
/// | PAYMENT_SERVER_KEY | (空) | 支付网关密钥 |
/// | PAYMENT_SYNC_ORDER_STATUS | true | 支付结果是否同步订单状态 |
/// | JWT_SECRET | (开发环境自动生成) | JWT 密钥 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/cakestore HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储数据库和日志文件
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 日志级别
    pub log_level: String,
    /// JWT 认证配置
    pub jwt: JwtConfig,

    // === 支付网关 ===
    /// 网关基础地址
    pub payment_endpoint: String,
    /// 网关服务端密钥 (Basic auth 用户名)
    pub payment_server_key: String,
    /// 支付结果是否反映到订单状态
    pub payment_sync_order_status: bool,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/cakestore".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            jwt: JwtConfig::default(),
            payment_endpoint: std::env::var("PAYMENT_ENDPOINT")
                .unwrap_or_else(|_| "https://app.sandbox.midtrans.com".into()),
            payment_server_key: std::env::var("PAYMENT_SERVER_KEY").unwrap_or_default(),
            payment_sync_order_status: std::env::var("PAYMENT_SYNC_ORDER_STATUS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// 数据库目录: {work_dir}/database
    pub fn db_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// 日志目录: {work_dir}/logs
    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    /// 确保工作目录结构存在
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.db_dir())?;
        std::fs::create_dir_all(self.log_dir())?;
        Ok(())
    }
}

/// 加载 .env 并返回配置
pub fn setup_environment() -> Config {
    dotenv::dotenv().ok();
    Config::from_env()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_paths() {
        let mut config = Config::from_env();
        config.work_dir = "/tmp/cakestore-test".to_string();
        assert_eq!(config.db_dir(), PathBuf::from("/tmp/cakestore-test/database"));
        assert_eq!(config.log_dir(), PathBuf::from("/tmp/cakestore-test/logs"));
    }
}
