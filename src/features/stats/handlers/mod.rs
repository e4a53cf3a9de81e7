pub mod stats_handler;

pub use stats_handler::{
    __path_get_dashboard, __path_get_report_stats, __path_get_waste_item_stats, get_dashboard,
    get_report_stats, get_waste_item_stats,
};
