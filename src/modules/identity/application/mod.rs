pub mod domain;
pub mod identity_use_cases;
pub mod ports;
pub mod services;
