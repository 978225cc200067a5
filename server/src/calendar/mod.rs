//! Month-view computations shared by the calendar endpoint and client state.

pub mod grid;
pub mod time;
pub mod view;

pub use grid::MonthGrid;
pub use view::CalendarView;
