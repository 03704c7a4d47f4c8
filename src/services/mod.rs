pub mod itn_recorder;
pub mod payfast_service;
