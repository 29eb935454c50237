pub mod activity;
pub mod entry;
pub mod feed;
pub mod region;
pub mod travel_table;
