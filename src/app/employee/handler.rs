//! 员工管理处理器
//!
//! 浏览器通过普通表单提交驱动页面状态，所有 POST 处理完毕后重定向回 `/`。

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::{Html, Json, Redirect},
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::model::{EmployeeDraft, Field};
use super::service::{EmployeeManager, ManagerState};
use super::view::PageRenderer;
use crate::core::{error::CoreError, response::ApiResponse};

/// 同一时刻只处理一个用户操作，操作按到达顺序生效
#[derive(Clone)]
pub struct AppState {
    pub manager: Arc<Mutex<EmployeeManager>>,
    pub renderer: Arc<PageRenderer>,
}

impl AppState {
    pub fn new(manager: EmployeeManager, renderer: PageRenderer) -> Self {
        Self {
            manager: Arc::new(Mutex::new(manager)),
            renderer: Arc::new(renderer),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LookupForm {
    #[serde(default)]
    pub id: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/employees/submit", post(submit))
        .route("/employees/cancel", post(cancel))
        .route("/employees/:id/edit", post(edit))
        .route("/employees/:id/delete", post(delete))
        .route("/lookup", post(lookup))
        .route("/refresh", post(refresh))
        .route("/api/state", get(api_state))
        .route("/health", get(health_check))
}

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, CoreError> {
    let manager = state.manager.lock().await;
    Ok(Html(state.renderer.render_page(manager.state())?))
}

pub async fn submit(State(state): State<AppState>, Form(draft): Form<EmployeeDraft>) -> Redirect {
    let mut manager = state.manager.lock().await;
    for field in Field::ALL {
        manager.handle_change(field, draft.get(field));
    }
    manager.submit().await;
    Redirect::to("/")
}

pub async fn cancel(State(state): State<AppState>) -> Redirect {
    state.manager.lock().await.reset_form();
    Redirect::to("/")
}

pub async fn edit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, CoreError> {
    if !state.manager.lock().await.handle_edit_by_id(id) {
        return Err(CoreError::NotFound(format!(
            "Employee {} is not in the current list",
            id
        )));
    }
    Ok(Redirect::to("/"))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> Redirect {
    state.manager.lock().await.delete_employee(id).await;
    Redirect::to("/")
}

pub async fn lookup(State(state): State<AppState>, Form(form): Form<LookupForm>) -> Redirect {
    let mut manager = state.manager.lock().await;
    manager.set_id_to_fetch(form.id);
    manager.get_employee_by_id().await;
    Redirect::to("/")
}

pub async fn refresh(State(state): State<AppState>) -> Redirect {
    state.manager.lock().await.fetch_all_employees().await;
    Redirect::to("/")
}

pub async fn api_state(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<ApiResponse<ManagerState>> {
    let snapshot = state.manager.lock().await.state().clone();
    Json(ApiResponse::for_request(snapshot, &headers))
}

pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
