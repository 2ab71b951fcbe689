pub mod client;
pub mod foot_router;
pub mod instructions;
pub mod response;
