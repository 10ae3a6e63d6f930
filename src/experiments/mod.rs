pub mod equipment_links;
pub mod models;
pub mod researcher_links;
pub mod sample_links;
pub mod services;
