pub mod api;
pub mod config;
pub mod models;
pub mod services;
pub mod session;

/// Opt-in bootstrap for binaries embedding the client: load `.env` and
/// initialize logging the same way across tools
pub fn init_env() {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
}
