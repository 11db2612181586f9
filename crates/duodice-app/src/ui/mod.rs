pub mod background;
pub mod controls;
pub mod die;
pub mod game_screen;
pub mod input;
pub mod settings;
pub mod theme;
