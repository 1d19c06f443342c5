//! Diesel table models and their conversions to and from domain entities.

pub mod category;
pub mod config;
pub mod deep_link;
pub mod product;
pub mod product_image;
pub mod product_video;
