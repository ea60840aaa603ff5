mod assistant;
mod dashboard;
mod error;
mod login;
mod signup;
mod tasks;

pub use assistant::AssistantPage;
pub use dashboard::DashboardPage;
pub use error::ErrorPage;
pub use login::LoginPage;
pub use signup::SignupPage;
pub use tasks::TasksPage;
