pub mod events;
pub mod host;
pub mod layout;
pub mod library;
pub mod settings;
pub mod slideshow;
pub mod surface;
