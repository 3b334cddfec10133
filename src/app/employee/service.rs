//! 员工管理业务服务
//!
//! 持有整个页面的状态：表单草稿、员工列表、按 ID 查询结果与提示消息。
//! 列表只镜像最近一次成功的 `list_all` 响应，任何增删改之后都重新加载，
//! 从不在本地修补。

use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

use super::model::{Employee, EmployeeDraft, Field};
use crate::core::error::{ClientError, ClientResult};
use crate::infrastructure::employee_api::EmployeeApi;

pub const MSG_FETCH_FAILED: &str = "Failed to fetch employees.";
pub const MSG_ADDED: &str = "Employee added successfully.";
pub const MSG_ADD_FAILED: &str = "Error adding employee.";
pub const MSG_UPDATED: &str = "Employee updated successfully.";
pub const MSG_UPDATE_FAILED: &str = "Error updating employee.";
pub const MSG_DELETE_FAILED: &str = "Error deleting employee.";
pub const MSG_NOT_FOUND: &str = "Employee not found.";

/// 提示消息类别，决定横幅样式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Error,
    Success,
}

impl MessageKind {
    /// 含有 "error"（不区分大小写）即为错误
    pub fn classify(message: &str) -> Self {
        if message.to_lowercase().contains("error") {
            MessageKind::Error
        } else {
            MessageKind::Success
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Error => "error",
            MessageKind::Success => "success",
        }
    }
}

/// 页面状态快照
#[derive(Debug, Clone, Default, Serialize)]
pub struct ManagerState {
    pub employees: Vec<Employee>,
    pub employee: EmployeeDraft,
    pub id_to_fetch: String,
    pub fetched_employee: Option<Employee>,
    pub message: Option<String>,
    pub edit_mode: bool,
}

impl ManagerState {
    pub fn message_kind(&self) -> Option<MessageKind> {
        self.message.as_deref().map(MessageKind::classify)
    }
}

/// 把 `list_all` 的响应解释为员工列表：数组原样采用，单个对象包装为
/// 一个元素，其余（含空响应）视为空列表
fn normalize_list(value: Value) -> ClientResult<Vec<Employee>> {
    match value {
        Value::Array(_) => Ok(serde_json::from_value(value)?),
        Value::Object(_) => Ok(vec![serde_json::from_value(value)?]),
        _ => Ok(Vec::new()),
    }
}

pub struct EmployeeManager {
    api: Arc<dyn EmployeeApi>,
    state: ManagerState,
}

impl EmployeeManager {
    pub fn new(api: Arc<dyn EmployeeApi>) -> Self {
        Self {
            api,
            state: ManagerState::default(),
        }
    }

    pub fn state(&self) -> &ManagerState {
        &self.state
    }

    pub fn message_kind(&self) -> Option<MessageKind> {
        self.state.message_kind()
    }

    /// 首次展示页面时加载列表
    pub async fn mount(&mut self) {
        self.fetch_all_employees().await;
    }

    pub async fn fetch_all_employees(&mut self) {
        match self.api.list_all().await.and_then(normalize_list) {
            Ok(employees) => {
                info!(count = employees.len(), "employee list loaded");
                self.state.employees = employees;
            }
            Err(err) => {
                warn!(error = %err, "failed to fetch employees");
                self.state.employees.clear();
                self.state.message = Some(MSG_FETCH_FAILED.to_string());
            }
        }
    }

    pub fn handle_change(&mut self, field: Field, value: impl Into<String>) {
        self.state.employee.set(field, value);
    }

    pub fn set_id_to_fetch(&mut self, value: impl Into<String>) {
        self.state.id_to_fetch = value.into();
    }

    /// 校验草稿；失败时设置提示消息并返回 `None`
    pub fn validate_form(&mut self) -> Option<Employee> {
        match self.state.employee.validate() {
            Ok(employee) => Some(employee),
            Err(err) => {
                self.state.message = Some(err.to_string());
                None
            }
        }
    }

    /// 表单主按钮：编辑模式下更新，否则新增
    pub async fn submit(&mut self) {
        if self.state.edit_mode {
            self.update_employee().await;
        } else {
            self.add_employee().await;
        }
    }

    pub async fn add_employee(&mut self) {
        let Some(employee) = self.validate_form() else {
            return;
        };

        match self.api.add(&employee).await {
            Ok(()) => {
                info!(id = employee.id, "employee added");
                self.after_mutation(MSG_ADDED).await;
            }
            Err(err) => self.report(MSG_ADD_FAILED, &err),
        }
    }

    pub async fn update_employee(&mut self) {
        let Some(employee) = self.validate_form() else {
            return;
        };

        match self.api.update(&employee).await {
            Ok(()) => {
                info!(id = employee.id, "employee updated");
                self.after_mutation(MSG_UPDATED).await;
            }
            Err(err) => self.report(MSG_UPDATE_FAILED, &err),
        }
    }

    pub async fn delete_employee(&mut self, id: i64) {
        match self.api.delete(id).await {
            Ok(body) => {
                info!(id, "employee deleted");
                self.state.message = Some(body);
                self.fetch_all_employees().await;
            }
            Err(err) => self.report(MSG_DELETE_FAILED, &err),
        }
    }

    /// 按 ID 查询，只影响 `fetched_employee` 与消息
    pub async fn get_employee_by_id(&mut self) {
        let found = match self.state.id_to_fetch.trim().parse::<i64>() {
            Ok(id) => match self.api.get(id).await {
                Ok(value @ Value::Object(_)) => serde_json::from_value::<Employee>(value).ok(),
                Ok(_) => None,
                Err(err) => {
                    warn!(id, error = %err, "employee lookup failed");
                    None
                }
            },
            Err(_) => None,
        };

        match found {
            Some(employee) => {
                self.state.fetched_employee = Some(employee);
                self.state.message = None;
            }
            None => {
                self.state.fetched_employee = None;
                self.state.message = Some(MSG_NOT_FOUND.to_string());
            }
        }
    }

    pub fn handle_edit(&mut self, record: &Employee) {
        self.state.employee = EmployeeDraft::from(record);
        self.state.edit_mode = true;
        self.state.message = Some(format!("Editing employee with ID {}", record.id));
    }

    /// 从当前列表中选中一行进入编辑；列表中不存在时返回 `false`
    pub fn handle_edit_by_id(&mut self, id: i64) -> bool {
        match self.state.employees.iter().find(|e| e.id == id).cloned() {
            Some(record) => {
                self.handle_edit(&record);
                true
            }
            None => false,
        }
    }

    pub fn reset_form(&mut self) {
        self.state.employee = EmployeeDraft::blank();
        self.state.edit_mode = false;
    }

    /// 表单先复位再重新加载，重新加载被中断时草稿也不会被再次提交
    async fn after_mutation(&mut self, message: &str) {
        self.state.message = Some(message.to_string());
        self.reset_form();
        self.fetch_all_employees().await;
    }

    fn report(&mut self, message: &str, err: &ClientError) {
        warn!(error = %err, "{}", message);
        self.state.message = Some(message.to_string());
    }
}
