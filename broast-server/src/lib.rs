//! Broast Storefront Server - 餐厅在线点餐服务
//!
//! # 架构概述
//!
//! 本模块是点餐服务的主入口，提供以下核心功能：
//!
//! - **菜单目录** (`catalog`): 启动时加载的只读菜单
//! - **购物车** (`cart`): 会话内存中的商品数量映射
//! - **结账向导** (`checkout`): Details → Location → Payment 三步状态机
//! - **配送距离** (`delivery`): 外部路线服务的距离/费用解析
//! - **订单组装** (`orders`): 订单摘要文本与消息深链
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! broast-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── catalog/       # 菜单目录
//! ├── cart/          # 购物车
//! ├── checkout/      # 结账会话与向导
//! ├── delivery/      # 距离解析与配送费
//! ├── orders/        # 订单组装
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 错误、日志、金额工具
//! ```

pub mod api;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod core;
pub mod delivery;
pub mod orders;
pub mod utils;

// Re-export 公共类型
pub use cart::CartStore;
pub use catalog::Catalog;
pub use checkout::{CheckoutSession, CheckoutStep, SessionManager};
pub use core::{Config, Server, ServerState};
pub use delivery::{DistanceService, FeePolicy};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger, init_logger_with_file};

/// 设置运行环境 (dotenv, 工作目录, 日志)
pub fn setup_environment() -> anyhow::Result<()> {
    // Load .env if present; a missing file is not an error
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    config.ensure_work_dir_structure()?;

    let log_dir = config.logs_dir();
    let level = if config.is_production() { "info" } else { "debug" };
    init_logger_with_file(level, config.is_production(), log_dir.to_str())?;

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ____                       __
   / __ )_________  ____ _____/ /_
  / __  / ___/ __ \/ __ `/ ___/ __/
 / /_/ / /  / /_/ / /_/ (__  ) /_
/_____/_/   \____/\__,_/____/\__/
    "#
    );
}
