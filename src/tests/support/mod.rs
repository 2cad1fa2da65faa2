pub mod app_state_builder;
pub mod auth_helper;
pub mod fakes;
pub mod mocks;
pub mod stubs;

/// Loads `.env.test` for adapter tests that talk to live services.
pub fn load_test_env() {
    dotenvy::from_filename(".env.test").ok();
}
