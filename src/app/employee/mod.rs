//! 员工管理页面

pub mod handler;
pub mod model;
pub mod service;
pub mod view;
