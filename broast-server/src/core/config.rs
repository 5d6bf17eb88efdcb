use std::path::PathBuf;

use rust_decimal::Decimal;
use shared::types::LatLng;

use crate::delivery::FeePolicy;

/// 服务器配置 - 点餐服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | /var/lib/broast | 工作目录 |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | MAPS_API_KEY | (空) | 路线服务 API Key |
/// | ROUTING_BASE_URL | https://maps.googleapis.com | 路线服务地址 |
/// | WHATSAPP_NUMBER | 910000000000 | 订单接收号码 |
/// | SHOP_LAT / SHOP_LNG | 17.335109 / 78.0 | 店铺坐标 |
/// | DELIVERY_FEE_POLICY | per-km | 配送费策略: per-km 或 flat |
/// | DELIVERY_RATE_PER_KM | 20 | 每公里费率 |
/// | DELIVERY_FLAT_FEE | 50 | 固定配送费 |
/// | REQUEST_TIMEOUT_MS | 30000 | 外部请求超时(毫秒) |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/broast HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储日志、支付凭证等文件
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,

    // === 外部服务配置 ===
    /// 路线服务 API Key
    pub maps_api_key: String,
    /// 路线服务基础 URL
    pub routing_base_url: String,
    /// 接收订单消息的号码 (wa.me 深链)
    pub whatsapp_number: String,
    /// 外部请求超时时间 (毫秒)
    pub request_timeout_ms: u64,

    // === 配送配置 ===
    /// 店铺坐标 (距离计算起点)
    pub shop_position: LatLng,
    /// 配送费策略
    pub fee_policy: FeePolicy,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        let rate_per_km = std::env::var("DELIVERY_RATE_PER_KM")
            .ok()
            .and_then(|v| v.parse::<Decimal>().ok())
            .unwrap_or(Decimal::from(20));
        let flat_fee = std::env::var("DELIVERY_FLAT_FEE")
            .ok()
            .and_then(|v| v.parse::<Decimal>().ok())
            .unwrap_or(Decimal::from(50));
        let fee_policy = match std::env::var("DELIVERY_FEE_POLICY").as_deref() {
            Ok("flat") => FeePolicy::Flat { amount: flat_fee },
            _ => FeePolicy::PerKm { rate: rate_per_km },
        };

        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/broast".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),

            maps_api_key: std::env::var("MAPS_API_KEY").unwrap_or_default(),
            routing_base_url: std::env::var("ROUTING_BASE_URL")
                .unwrap_or_else(|_| "https://maps.googleapis.com".into()),
            whatsapp_number: std::env::var("WHATSAPP_NUMBER")
                .unwrap_or_else(|_| "910000000000".into()),
            request_timeout_ms: std::env::var("REQUEST_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),

            shop_position: LatLng::new(
                std::env::var("SHOP_LAT")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(17.335109),
                std::env::var("SHOP_LNG")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(78.0),
            ),
            fee_policy,
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// 日志目录
    pub fn logs_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    /// 支付凭证存储目录
    pub fn proofs_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("uploads/proofs")
    }

    /// 确保工作目录结构存在
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.work_dir)?;
        std::fs::create_dir_all(self.logs_dir())?;
        std::fs::create_dir_all(self.proofs_dir())?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
