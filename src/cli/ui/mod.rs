pub mod banner;
pub mod menu_renderer;
