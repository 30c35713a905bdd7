pub mod position_dto;
pub mod static_dto;
