pub mod character_dto;
