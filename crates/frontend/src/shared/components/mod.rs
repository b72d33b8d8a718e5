pub mod alert_card;
pub mod animated_counter;
pub mod card_animated;
pub mod charts;
pub mod filter_panel;
pub mod kpi_card;
pub mod page_header;
pub mod pagination_controls;
pub mod period_selector;
pub mod query_error;
pub mod skeleton;
pub mod spotlight_card;
pub mod stat_card;

pub use alert_card::{AlertCard, AlertsList};
pub use animated_counter::{AnimatedCounter, CounterFormat};
pub use card_animated::CardAnimated;
pub use kpi_card::KpiCard;
pub use page_header::PageHeader;
pub use period_selector::{GroupBySelector, PeriodSelector};
pub use query_error::{query_view, QueryErrorView};
pub use skeleton::{Skeleton, SkeletonCard};
pub use spotlight_card::SpotlightCard;
pub use stat_card::{StatCard, StatTone};
