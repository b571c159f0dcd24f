pub mod category;
pub mod item;

pub use category::{display_label, UnknownCategory};
pub use item::{
    product_code, CreateItemCommand, ImageReference, Item, ItemCategory, ItemId, ProductInfo,
};
