//! Read-only catalog use-cases over a [`ChannelRepository`]
//!
//! [`ChannelRepository`]: crate::services::iptv_org::ChannelRepository

pub mod categories;
pub mod channels;
pub mod countries;

#[cfg(test)]
pub mod test_support;

pub use categories::GetAvailableCategoriesUseCase;
pub use channels::{ChannelFilters, ChannelPage, GetChannelsWithStreamsUseCase, DEFAULT_CHANNEL_LIMIT};
pub use countries::{CountryListing, GetAvailableCountriesUseCase};
