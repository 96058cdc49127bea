pub mod http_armory_repository;
