pub mod gift_card;
pub mod price_tabs;
pub mod tab_bar;
pub mod win_overlay;

pub use gift_card::{GiftCard, StarBadge};
pub use price_tabs::PriceTabs;
pub use tab_bar::TabBar;
pub use win_overlay::WinOverlay;
