mod widgets;

pub use widgets::DashboardWidgets;
