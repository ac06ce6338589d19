pub mod app;
pub mod command;
pub mod element;
pub mod renderer;
pub mod runtime;
pub mod snapshot;
pub mod subscription;
pub mod theme;

pub use app::App;
pub use command::Command;
pub use element::{Element, LayoutConstraint};
pub use renderer::{InteractionRegistry, Renderer};
pub use runtime::Runtime;
pub use subscription::Subscription;
pub use theme::{Theme, ThemeVariant};
