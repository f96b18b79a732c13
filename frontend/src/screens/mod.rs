mod dashboard;
mod send_money;
mod signin;
mod signup;

pub use dashboard::DashboardScreen;
pub use send_money::SendMoneyScreen;
pub use signin::SigninScreen;
pub use signup::SignupScreen;
