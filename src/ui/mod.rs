//! UI 组件系统

mod component;
mod container;
mod button;
mod text;
mod image;
mod input;
mod root;

pub use component::{Component, Node, Serial, SerialHandle, Styled};
pub use container::{Container, FlexLayout, StackKind};
pub use button::Button;
pub use text::Text;
pub use image::Image;
pub use input::Input;
pub use root::Root;

/// 把若干组件装箱成子组件列表
#[macro_export]
macro_rules! children {
    ($($child:expr),* $(,)?) => {
        vec![$(Box::new($child) as Box<dyn $crate::ui::Component>),*]
    };
}
