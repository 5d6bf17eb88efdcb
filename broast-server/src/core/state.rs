use std::sync::Arc;
use std::time::Duration;

use crate::catalog::Catalog;
use crate::checkout::SessionManager;
use crate::core::Config;
use crate::delivery::{DistanceMatrixClient, DistanceService};

/// 服务器状态 - 持有所有服务的单例引用
///
/// ServerState 是点餐服务的核心数据结构，持有所有服务的共享引用。
/// 使用 Arc 实现浅拷贝，所有权成本极低。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | catalog | Arc<Catalog> | 只读菜单目录 |
/// | sessions | SessionManager | 会话管理 (购物车 + 结账向导) |
/// | delivery | DistanceService | 距离解析与配送费 |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 只读菜单目录
    pub catalog: Arc<Catalog>,
    /// 会话管理器
    pub sessions: SessionManager,
    /// 距离解析服务
    pub delivery: DistanceService,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 菜单目录 (内置种子数据)
    /// 2. 会话管理器
    /// 3. 距离解析服务 (外部路线服务客户端)
    pub fn initialize(config: &Config) -> Self {
        let catalog = Arc::new(Catalog::seed());

        let provider = DistanceMatrixClient::new(
            config.routing_base_url.clone(),
            config.maps_api_key.clone(),
            Duration::from_millis(config.request_timeout_ms),
        );
        let delivery = DistanceService::new(
            Arc::new(provider),
            config.shop_position,
            config.fee_policy.clone(),
        );

        tracing::info!(
            items = catalog.items().len(),
            categories = catalog.categories().len() - 1,
            "Catalog loaded"
        );

        Self {
            config: config.clone(),
            catalog,
            sessions: SessionManager::new(),
            delivery,
        }
    }

    /// 获取菜单目录
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// 获取会话管理器
    pub fn sessions(&self) -> &SessionManager {
        &self.sessions
    }
}
