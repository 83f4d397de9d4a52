pub mod active_client;
