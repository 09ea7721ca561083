pub mod calendar;
pub mod detail;
pub mod explore;
pub mod feed;
pub mod profile;
pub mod subscriptions;
