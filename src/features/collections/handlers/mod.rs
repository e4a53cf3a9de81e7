pub mod collection_handler;

pub use collection_handler::{
    __path_list_collections, __path_list_pending, __path_validate_collection,
    list_collections, list_pending, validate_collection,
};
