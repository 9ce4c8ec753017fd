pub mod build;
pub mod list;
pub mod render;
pub mod route;

pub use build::build_command;
pub use list::list_command;
pub use render::render_command;
pub use route::{describe_page, route_command};
