pub mod draw_page;
pub mod fan_pile;
pub mod flying_overlay;
pub mod footer;
pub mod result_card;
pub mod status_line;
pub mod vip_toggle;
