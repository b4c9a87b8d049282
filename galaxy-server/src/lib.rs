//! Galaxy Server - pizza restaurant storefront backend
//!
//! Serves the customer storefront and the back-office dashboard: menu,
//! promotional offers, checkout, feedback, contact intake and admin login,
//! backed by SQLite with images on local disk.
//!
//! # Module structure
//!
//! ```text
//! galaxy-server/src/
//! ├── core/          # config, state, server lifecycle
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # pool setup, migrations, repositories
//! ├── services/      # image storage
//! └── utils/         # errors, logging, password hashing
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export public types
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env`, build the config and wire up logging. Call once at
/// startup, before anything logs.
pub fn setup_environment() -> anyhow::Result<Config> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger_with_file(&config.log_level, config.log_json, config.log_dir.as_deref())?;
    utils::set_production(config.is_production());

    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
    ____  _
   / __ \(_)_______  ____ _
  / /_/ / /_  /_  / / __ `/
 / ____/ / / /_/ /_/ /_/ /
/_/   /_/ /___/___/\__,_/
   ______      __
  / ____/___ _/ /___ __  ______  __
 / / __/ __ `/ / __ `/ |/_/ / / /
/ /_/ / /_/ / / /_/ />  </ /_/ /
\____/\__,_/_/\__,_/_/|_|\__, /
                        /____/
    "#
    );
}
