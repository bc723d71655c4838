mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod login;
pub use login::LoginView;

mod register;
pub use register::RegisterView;

mod dashboard;
pub use dashboard::DashboardView;

mod ticket_receipt;
pub use ticket_receipt::TicketReceipt;
