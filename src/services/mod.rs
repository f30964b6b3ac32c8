pub mod user_generator;
pub mod user_store;

pub use user_generator::UserGenerator;
pub use user_store::UserStore;
