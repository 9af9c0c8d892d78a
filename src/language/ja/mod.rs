pub mod ja_transforms;
pub mod japanese;
pub mod wanakana;
