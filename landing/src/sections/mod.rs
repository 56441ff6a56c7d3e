// Landing page sections

mod about;
mod appointment;
mod contact;
mod footer;
mod header;
mod hero;
mod services;
mod stats;

pub use about::About;
pub use appointment::AppointmentSection;
pub use contact::Contact;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use services::Services;
pub use stats::Stats;
