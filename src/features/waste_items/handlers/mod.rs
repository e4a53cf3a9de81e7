pub mod waste_item_handler;

pub use waste_item_handler::{
    __path_create_waste_item, __path_delete_waste_item, __path_get_waste_item,
    __path_list_waste_items, __path_update_waste_item, create_waste_item, delete_waste_item,
    get_waste_item, list_waste_items, update_waste_item,
};
