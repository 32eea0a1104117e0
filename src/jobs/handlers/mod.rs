pub mod memory_handler;
