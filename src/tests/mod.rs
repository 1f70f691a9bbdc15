//! 单元测试模块
//! 覆盖组件、地址、渲染、绑定、样式表、宿主、子进程等功能

pub mod component_tests;
pub mod stylesheet_tests;
pub mod task_tests;
pub mod widget_tests;
