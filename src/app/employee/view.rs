//! 员工管理页面渲染

use minijinja::Environment;
use serde::Serialize;

use super::model::{Department, EmployeeDraft, Field, Gender};
use super::service::ManagerState;

const PAGE_TEMPLATE: &str = include_str!("templates/page.html");
const PAGE: &str = "page.html";

#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
    #[error("failed to serialize employee: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct Input {
    name: &'static str,
    kind: &'static str,
    placeholder: &'static str,
    value: String,
    options: Vec<&'static str>,
    step: Option<&'static str>,
}

#[derive(Serialize)]
struct Row {
    id: i64,
    cells: Vec<String>,
}

#[derive(Serialize)]
struct PageContext {
    message: Option<String>,
    message_kind: Option<&'static str>,
    edit_mode: bool,
    inputs: Vec<Input>,
    id_to_fetch: String,
    fetched_employee: Option<String>,
    columns: Vec<&'static str>,
    rows: Vec<Row>,
}

fn input(field: Field, draft: &EmployeeDraft) -> Input {
    let (kind, placeholder, options) = match field {
        Field::Id => ("number", "ID", Vec::new()),
        Field::Name => ("text", "Name", Vec::new()),
        Field::Gender => (
            "select",
            "Select Gender",
            Gender::ALL.iter().map(Gender::as_str).collect(),
        ),
        Field::Department => (
            "select",
            "Select Department",
            Department::ALL.iter().map(Department::as_str).collect(),
        ),
        Field::Designation => ("text", "Designation", Vec::new()),
        Field::Email => ("email", "Email", Vec::new()),
        Field::Password => ("password", "Password", Vec::new()),
        Field::Contact => ("text", "Contact", Vec::new()),
        Field::Salary => ("number", "Salary", Vec::new()),
    };

    Input {
        name: field.as_str(),
        kind,
        placeholder,
        value: draft.get(field).to_string(),
        options,
        // 薪资允许小数
        step: (field == Field::Salary).then_some("any"),
    }
}

/// 页面渲染器，模板在创建时编译一次
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, ViewError> {
        let mut env = Environment::new();
        env.add_template(PAGE, PAGE_TEMPLATE)?;
        Ok(Self { env })
    }

    pub fn render_page(&self, state: &ManagerState) -> Result<String, ViewError> {
        let fetched_employee = state
            .fetched_employee
            .as_ref()
            .map(serde_json::to_string_pretty)
            .transpose()?;

        let rows = state
            .employees
            .iter()
            .map(|e| {
                let draft = EmployeeDraft::from(e);
                Row {
                    id: e.id,
                    cells: Field::ALL.iter().map(|f| draft.get(*f).to_string()).collect(),
                }
            })
            .collect();

        let context = PageContext {
            message: state.message.clone(),
            message_kind: state.message_kind().map(|k| k.as_str()),
            edit_mode: state.edit_mode,
            inputs: Field::ALL.iter().map(|f| input(*f, &state.employee)).collect(),
            id_to_fetch: state.id_to_fetch.clone(),
            fetched_employee,
            columns: Field::ALL.iter().map(Field::as_str).collect(),
            rows,
        };

        Ok(self.env.get_template(PAGE)?.render(&context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::employee::model::Employee;

    fn sample() -> Employee {
        Employee {
            id: 7,
            name: "<b>Mallory</b>".to_string(),
            gender: Gender::Female,
            department: Department::Sales,
            designation: "Rep".to_string(),
            email: "m@example.com".to_string(),
            password: "pw".to_string(),
            contact: "123".to_string(),
            salary: 30000.0,
        }
    }

    #[test]
    fn test_empty_state_renders_add_form() {
        let html = PageRenderer::new()
            .unwrap()
            .render_page(&ManagerState::default())
            .unwrap();

        assert!(html.contains("<h3>Add Employee</h3>"));
        assert!(html.contains("No employees found."));
        assert!(!html.contains("class=\"message-banner"));
        assert!(!html.contains("Update Employee"));
    }

    #[test]
    fn test_edit_mode_with_error_banner() {
        let state = ManagerState {
            employee: EmployeeDraft::from(&sample()),
            edit_mode: true,
            message: Some("Error updating employee.".to_string()),
            ..Default::default()
        };
        let html = PageRenderer::new().unwrap().render_page(&state).unwrap();

        assert!(html.contains("<h3>Edit Employee</h3>"));
        assert!(html.contains("Update Employee"));
        assert!(html.contains("formaction=\"/employees/cancel\" formnovalidate>"));
        assert!(html.contains("class=\"message-banner error\""));
        assert!(html.contains("<option value=\"SALES\" selected>"));
    }

    #[test]
    fn test_fractional_salary_input_accepts_decimals() {
        let mut record = sample();
        record.salary = 42000.5;
        let state = ManagerState {
            employee: EmployeeDraft::from(&record),
            edit_mode: true,
            ..Default::default()
        };
        let html = PageRenderer::new().unwrap().render_page(&state).unwrap();

        assert!(html.contains(
            "<input type=\"number\" name=\"salary\" placeholder=\"Salary\" value=\"42000.5\" step=\"any\">"
        ));
        assert!(html.contains("<input type=\"number\" name=\"id\" placeholder=\"ID\" value=\"7\">"));
    }

    #[test]
    fn test_list_section_offers_refresh() {
        let html = PageRenderer::new()
            .unwrap()
            .render_page(&ManagerState::default())
            .unwrap();

        assert!(html.contains("<form method=\"post\" action=\"/refresh\">"));
    }

    #[test]
    fn test_table_rows_are_escaped() {
        let state = ManagerState {
            employees: vec![sample()],
            fetched_employee: Some(sample()),
            message: Some("Editing employee with ID 7".to_string()),
            ..Default::default()
        };
        let html = PageRenderer::new().unwrap().render_page(&state).unwrap();

        assert!(html.contains("class=\"message-banner success\""));
        assert!(html.contains("&lt;b&gt;Mallory"));
        assert!(!html.contains("<b>Mallory</b>"));
        assert!(html.contains("action=\"/employees/7/delete\""));
        assert!(html.contains("Employee Found:"));
        assert!(!html.contains("No employees found."));
    }
}
