pub mod user_handler;

pub use user_handler::{
    __path_change_password, __path_create_user, __path_delete_user, __path_get_me,
    __path_get_user, __path_list_users, __path_update_user, change_password, create_user,
    delete_user, get_me, get_user, list_users, update_user,
};
