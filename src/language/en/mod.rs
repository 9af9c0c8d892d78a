pub mod en_transforms;
