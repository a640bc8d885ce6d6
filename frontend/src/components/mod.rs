mod admin_page;
mod app;
mod filter_panel;
mod icons;
mod layout;
mod payment_dialog;
mod payment_list;
mod stat_card;
mod toast_host;

pub use admin_page::AdminDashboardPage;
pub use app::{App, AppProps};
pub use filter_panel::FilterPanel;
pub use layout::DashboardLayout;
pub use payment_dialog::PaymentDialog;
pub use payment_list::{PaymentList, PaymentRow};
pub use stat_card::{StatCard, StatIcon};
pub use toast_host::ToastHost;
