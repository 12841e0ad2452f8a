pub mod month_year_filter;
pub mod pagination_controls;
pub mod search_input;
pub mod stat_card;

pub use month_year_filter::MonthYearFilter;
pub use pagination_controls::PaginationControls;
pub use search_input::SearchInput;
pub use stat_card::StatCard;
