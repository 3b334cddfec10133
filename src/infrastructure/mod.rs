//! 基础设施层

pub mod employee_api;
pub mod logger;
