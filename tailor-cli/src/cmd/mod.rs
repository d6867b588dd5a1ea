pub mod resolve;
pub mod view_name;
