//! 样式表解析

pub mod stylesheet;

pub use stylesheet::{decorate, Decoration, Merge};
