pub mod analysis;
pub mod site;
