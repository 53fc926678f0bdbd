pub mod autocomplete_search;
pub mod doctor_card;
pub mod doctor_list;
pub mod doctor_modal;
pub mod filter_panel;
pub mod header;
