pub mod player;
pub mod popups;
pub mod sidebar;
pub mod song_list;
pub mod views;
