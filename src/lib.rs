pub mod allocation;
pub mod armour;
pub mod output;
pub mod settings;
pub mod theme;
