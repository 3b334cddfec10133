//! # 员工管理系统
//!
//! 单页员工管理界面：表单新增/编辑、按 ID 查询、列表展示与删除，
//! 所有数据读写都通过外部员工 REST 服务完成。
//!
//! - `app`：页面状态、渲染与 HTTP 路由
//! - `core`：错误、响应与中间件
//! - `infrastructure`：日志与 REST 后端客户端
//! - `config`：配置加载

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use app::employee::model::{Department, Employee, EmployeeDraft, Field, Gender};
pub use app::employee::service::{EmployeeManager, ManagerState, MessageKind};
pub use infrastructure::employee_api::{EmployeeApi, RestEmployeeApi};
