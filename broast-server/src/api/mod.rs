//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`menu`] - 菜单浏览接口
//! - [`sessions`] - 会话生命周期接口
//! - [`cart`] - 购物车接口
//! - [`checkout`] - 结账向导接口
//! - [`upload`] - 支付凭证上传接口

pub mod cart;
pub mod checkout;
pub mod health;
pub mod menu;
pub mod sessions;
pub mod upload;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};
