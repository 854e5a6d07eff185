pub mod account_card;
pub mod catalog;
pub mod footer;
pub mod header;
pub mod hero;
pub mod listing_form;
pub mod listings_table;
pub mod notice;
pub mod reviews_panel;
pub mod stats_panel;
