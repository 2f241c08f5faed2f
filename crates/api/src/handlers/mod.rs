pub mod activity_model;
pub mod info;
pub mod off_target_search;
pub mod script_utilities;
