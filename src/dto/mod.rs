pub mod admin_dto;
pub mod payment_dto;
