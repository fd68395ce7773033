mod config;
mod memory;
mod redis;
mod types;

pub(crate) use config::GENERIC_CACHE_STORE;
