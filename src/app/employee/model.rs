//! 员工数据模型
//!
//! `Employee` 是后端 REST 服务使用的强类型记录，`EmployeeDraft` 是表单中
//! 正在编辑的草稿（所有字段均为字符串，提交时才转换类型）。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 性别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
        }
    }
}

impl FromStr for Gender {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::ALL
            .into_iter()
            .find(|g| g.as_str() == s.trim())
            .ok_or(())
    }
}

/// 部门
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Department {
    Hr,
    It,
    Finance,
    Sales,
}

impl Department {
    pub const ALL: [Department; 4] = [
        Department::Hr,
        Department::It,
        Department::Finance,
        Department::Sales,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Hr => "HR",
            Department::It => "IT",
            Department::Finance => "FINANCE",
            Department::Sales => "SALES",
        }
    }
}

impl FromStr for Department {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Department::ALL
            .into_iter()
            .find(|d| d.as_str() == s.trim())
            .ok_or(())
    }
}

/// 员工记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub gender: Gender,
    pub department: Department,
    pub designation: String,
    pub email: String,
    pub password: String,
    pub contact: String,
    pub salary: f64,
}

/// 表单字段，`ALL` 的顺序即声明顺序，决定校验时报告哪个字段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Name,
    Gender,
    Department,
    Designation,
    Email,
    Password,
    Contact,
    Salary,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::Id,
        Field::Name,
        Field::Gender,
        Field::Department,
        Field::Designation,
        Field::Email,
        Field::Password,
        Field::Contact,
        Field::Salary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Name => "name",
            Field::Gender => "gender",
            Field::Department => "department",
            Field::Designation => "designation",
            Field::Email => "email",
            Field::Password => "password",
            Field::Contact => "contact",
            Field::Salary => "salary",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown employee field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// 草稿校验错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill out the {0} field.")]
    Missing(Field),
    #[error("Please enter a valid {0}.")]
    Invalid(Field),
}

/// 表单草稿，表单中缺失的字段按空字符串处理
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeDraft {
    pub id: String,
    pub name: String,
    pub gender: String,
    pub department: String,
    pub designation: String,
    pub email: String,
    pub password: String,
    pub contact: String,
    pub salary: String,
}

impl EmployeeDraft {
    /// 空白模板（新建模式）
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Id => &self.id,
            Field::Name => &self.name,
            Field::Gender => &self.gender,
            Field::Department => &self.department,
            Field::Designation => &self.designation,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::Contact => &self.contact,
            Field::Salary => &self.salary,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Id => &mut self.id,
            Field::Name => &mut self.name,
            Field::Gender => &mut self.gender,
            Field::Department => &mut self.department,
            Field::Designation => &mut self.designation,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::Contact => &mut self.contact,
            Field::Salary => &mut self.salary,
        };
        *slot = value.into();
    }

    /// 按声明顺序检查字段，返回可提交的员工记录
    pub fn validate(&self) -> Result<Employee, ValidationError> {
        if let Some(field) = Field::ALL
            .into_iter()
            .find(|f| self.get(*f).trim().is_empty())
        {
            return Err(ValidationError::Missing(field));
        }

        let id = self
            .id
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::Invalid(Field::Id))?;
        let gender = self
            .gender
            .parse::<Gender>()
            .map_err(|_| ValidationError::Invalid(Field::Gender))?;
        let department = self
            .department
            .parse::<Department>()
            .map_err(|_| ValidationError::Invalid(Field::Department))?;
        let salary = self
            .salary
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|s| s.is_finite())
            .ok_or(ValidationError::Invalid(Field::Salary))?;

        Ok(Employee {
            id,
            name: self.name.clone(),
            gender,
            department,
            designation: self.designation.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            contact: self.contact.clone(),
            salary,
        })
    }
}

impl From<&Employee> for EmployeeDraft {
    fn from(e: &Employee) -> Self {
        Self {
            id: e.id.to_string(),
            name: e.name.clone(),
            gender: e.gender.as_str().to_string(),
            department: e.department.as_str().to_string(),
            designation: e.designation.clone(),
            email: e.email.clone(),
            password: e.password.clone(),
            contact: e.contact.clone(),
            salary: e.salary.to_string(),
        }
    }
}
