use std::sync::Arc;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::orders::OrderService;
use crate::payment::{PaymentProvider, PaymentService, SnapClient};
use crate::utils::AppResult;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝；作为 axum `State` 注入所有处理函数。
///
/// | 字段 | 说明 |
/// |------|------|
/// | config | 配置项 (不可变) |
/// | db | 嵌入式数据库 |
/// | jwt_service | JWT 认证服务 |
/// | orders | 订单服务 (购物车结算、状态机) |
/// | payments | 支付服务 (网关交互、回调处理) |
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub db: DbService,
    pub jwt_service: Arc<JwtService>,
    pub orders: OrderService,
    pub payments: PaymentService,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 1. 工作目录结构
    /// 2. 数据库 (work_dir/database)
    /// 3. JWT、订单、支付服务
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        config
            .ensure_work_dir_structure()
            .map_err(|e| crate::utils::AppError::internal(format!("Work dir setup failed: {e}")))?;

        let db = DbService::new(&config.db_dir()).await?;
        let provider: Arc<dyn PaymentProvider> = Arc::new(SnapClient::new(
            config.payment_endpoint.clone(),
            &config.payment_server_key,
        ));

        Ok(Self::with_provider(config.clone(), db, provider))
    }

    /// 用给定数据库和支付网关构造状态 (测试注入点)
    pub fn with_provider(
        config: Config,
        db: DbService,
        provider: Arc<dyn PaymentProvider>,
    ) -> Self {
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        let orders = OrderService::new(&db);
        let payments = PaymentService::new(
            &db,
            orders.clone(),
            provider,
            config.payment_sync_order_status,
            config.is_development(),
        );

        Self {
            config,
            db,
            jwt_service,
            orders,
            payments,
        }
    }

    pub fn jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }
}
