//! Host-side services for the launcher and the window: environment
//! provisioning and directory listings.

pub mod file_listing;
pub mod provisioner;
