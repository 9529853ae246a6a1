pub mod ids;
pub mod navigation;
