//! QuickJS 引擎绑定

mod runtime;
pub mod bridge;

pub use runtime::JsRuntime;
pub use bridge::{PendingCall, QuickJsHost};
