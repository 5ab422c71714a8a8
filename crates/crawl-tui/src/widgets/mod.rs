//! UI widgets

mod command_line;
mod map;
mod sidebar;

pub use command_line::CommandLineWidget;
pub use map::MapWidget;
pub use sidebar::SidebarWidget;
