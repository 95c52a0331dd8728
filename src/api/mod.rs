mod client;
mod params;
mod pin;
mod resources;

pub use client::PinterestClient;
pub use params::Page;
pub use pin::{ImageSource, NewPin};
