pub mod controls;
pub mod hud;
pub mod layout;
pub mod menu;
