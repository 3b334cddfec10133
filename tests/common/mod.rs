//! 测试用的员工 REST 后端，监听随机端口

#![allow(dead_code)]

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{delete, get, post, put},
    Router,
};
use employee_manager::{Department, Employee, Gender};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub type Db = Arc<Mutex<BTreeMap<i64, Employee>>>;

pub const DELETED: &str = "Employee Deleted Successfully";

pub struct FakeBackend {
    pub url: String,
    pub db: Db,
    /// 为 `false` 时列表接口返回 503
    pub available: Arc<AtomicBool>,
}

#[derive(Clone)]
struct Shared {
    db: Db,
    available: Arc<AtomicBool>,
}

impl FakeBackend {
    pub async fn spawn(seed: Vec<Employee>) -> Self {
        let db: Db = Arc::new(Mutex::new(seed.into_iter().map(|e| (e.id, e)).collect()));
        let available = Arc::new(AtomicBool::new(true));
        let app = Router::new()
            .route("/employeeapi/all", get(all))
            .route("/employeeapi/get/:id", get(get_one))
            .route("/employeeapi/add", post(add))
            .route("/employeeapi/update", put(update))
            .route("/employeeapi/delete/:id", delete(remove))
            .with_state(Shared {
                db: db.clone(),
                available: available.clone(),
            });

        Self {
            url: serve(app).await,
            db,
            available,
        }
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    pub fn ids(&self) -> Vec<i64> {
        self.db.lock().unwrap().keys().copied().collect()
    }

    pub fn record(&self, id: i64) -> Option<Employee> {
        self.db.lock().unwrap().get(&id).cloned()
    }
}

/// 在随机端口上启动路由，返回根地址
pub async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// 一个无人监听的地址
pub async fn closed_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn employee(id: i64, name: &str) -> Employee {
    Employee {
        id,
        name: name.to_string(),
        gender: Gender::Female,
        department: Department::Hr,
        designation: "Recruiter".to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        password: "hunter2".to_string(),
        contact: "555-0199".to_string(),
        salary: 48000.0,
    }
}

async fn all(State(shared): State<Shared>) -> Result<Json<Vec<Employee>>, StatusCode> {
    if !shared.available.load(Ordering::SeqCst) {
        return Err(StatusCode::SERVICE_UNAVAILABLE);
    }
    let employees = shared.db.lock().unwrap().values().cloned().collect();
    Ok(Json(employees))
}

// 不存在时返回 200 空响应体
async fn get_one(State(Shared { db, .. }): State<Shared>, Path(id): Path<i64>) -> Response {
    let found = db.lock().unwrap().get(&id).cloned();
    match found {
        Some(e) => Json(e).into_response(),
        None => StatusCode::OK.into_response(),
    }
}

async fn add(
    State(Shared { db, .. }): State<Shared>,
    Json(e): Json<Employee>,
) -> Json<Employee> {
    db.lock().unwrap().insert(e.id, e.clone());
    Json(e)
}

async fn update(
    State(Shared { db, .. }): State<Shared>,
    Json(e): Json<Employee>,
) -> Result<Json<Employee>, StatusCode> {
    let mut db = db.lock().unwrap();
    if !db.contains_key(&e.id) {
        return Err(StatusCode::NOT_FOUND);
    }
    db.insert(e.id, e.clone());
    Ok(Json(e))
}

async fn remove(
    State(Shared { db, .. }): State<Shared>,
    Path(id): Path<i64>,
) -> Result<&'static str, StatusCode> {
    let removed = db.lock().unwrap().remove(&id);
    removed.map(|_| DELETED).ok_or(StatusCode::NOT_FOUND)
}
