//! Menu API Handlers
//!
//! The catalog is read-only; every handler here is a pure view over it.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::models::MenuItem;

use crate::catalog::SortBy;
use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

#[derive(Debug, Default, Deserialize)]
pub struct MenuQuery {
    #[serde(default)]
    pub sort: Option<SortBy>,
}

/// GET /api/menu - 获取全部菜单
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<MenuQuery>,
) -> Json<Vec<MenuItem>> {
    let items = state
        .catalog
        .items_in_category(shared::models::Category::ALL, query.sort.unwrap_or_default())
        .into_iter()
        .cloned()
        .collect();
    Json(items)
}

/// GET /api/menu/categories - 获取分类列表 (含 "All")
pub async fn categories(State(state): State<ServerState>) -> Json<Vec<String>> {
    Json(state.catalog.categories().to_vec())
}

/// GET /api/menu/by-category/:category - 按分类获取菜单
pub async fn list_by_category(
    State(state): State<ServerState>,
    Path(category): Path<String>,
    Query(query): Query<MenuQuery>,
) -> AppResult<Json<Vec<MenuItem>>> {
    if !state.catalog.categories().contains(&category) {
        return Err(AppError::not_found(format!("Category {}", category)));
    }

    let items = state
        .catalog
        .items_in_category(&category, query.sort.unwrap_or_default())
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(items))
}

/// GET /api/menu/:id - 获取单个菜单项
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MenuItem>> {
    let item = state
        .catalog
        .get(&id)
        .cloned()
        .ok_or_else(|| AppError::not_found(format!("Menu item {}", id)))?;
    Ok(Json(item))
}
