pub mod coin_button;
pub mod language_switch;
pub mod modal;
pub mod nav_bar;
pub mod profile_card;
pub mod referral_bar;
pub mod report_dialog;
pub mod toast;
