pub mod cleanup_task;
pub mod game_registry;
pub mod server_config;
pub mod web_server;
