pub mod bar_list;
pub mod card_animated;
pub mod event_pager;
pub mod filter_sidebar;
pub mod kpi_cards;
pub mod page_header;
pub mod slice_status;
pub mod table;
pub mod ui;

pub use bar_list::{BarItem, BarList};
pub use card_animated::CardAnimated;
pub use event_pager::EventPager;
pub use filter_sidebar::FilterSidebar;
pub use kpi_cards::{KpiCard, KpiCards};
pub use page_header::{PageHeader, TabItem};
pub use slice_status::SliceStatus;
