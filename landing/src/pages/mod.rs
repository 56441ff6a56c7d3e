// Landing page routes

mod landing;
mod portal;

pub use landing::LandingPage;
pub use portal::{NotFound, PortalPlaceholder};
