//! Domain records shared by the repository, use-cases and routes

pub mod channel;
pub mod country;

pub use channel::{Channel, ChannelSelectedEvent, ChannelWithStream, Logo, Stream};
pub use country::{is_popular_country, Country, COUNTRY_NAMES, POPULAR_COUNTRY_CODES};
