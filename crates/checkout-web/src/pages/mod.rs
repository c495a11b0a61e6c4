//! Page Components

mod account;
mod checkout;
mod home;

pub use account::AccountPage;
pub use checkout::CheckoutRoute;
pub use home::HomePage;
