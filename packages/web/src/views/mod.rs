mod layout;
pub use layout::SiteLayout;

mod home;
pub use home::Home;

mod tools;
pub use tools::Tools;

mod pricing;
pub use pricing::Pricing;

mod auth;
pub use auth::Auth;

mod admin_login;
pub use admin_login::AdminLogin;

mod admin_dashboard;
pub use admin_dashboard::AdminDashboard;
