pub mod event;
pub mod notification;
pub mod user;

pub use event::{DiscountCode, Event, Feedback, TicketType};
pub use notification::Notification;
pub use user::{Role, SessionUser, User};
