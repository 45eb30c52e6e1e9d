pub mod page_config;
pub mod region_ids;
pub mod tab_token;

pub use page_config::PageConfig;
pub use region_ids::RegionIds;
pub use tab_token::TabToken;
