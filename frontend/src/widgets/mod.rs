mod activity_log;
mod appbar;
mod balance;
mod bottom_warning;
mod button;
mod card;
mod heading;
mod input_box;
mod page;
mod sub_heading;
mod theme_toggle;
mod transaction_history;
mod user_profile;
mod users;

pub use activity_log::ActivityLog;
pub use appbar::Appbar;
pub use balance::Balance;
pub use bottom_warning::BottomWarning;
pub use button::Button;
pub use card::Card;
pub use heading::Heading;
pub use input_box::InputBox;
pub use page::Page;
pub use sub_heading::SubHeading;
pub use theme_toggle::ThemeToggle;
pub use transaction_history::TransactionHistory;
pub use user_profile::UserProfile;
pub use users::Users;
