pub mod collection_item;

pub use collection_item::CollectionItem;
