pub mod db;
pub mod pagination;
pub mod quiz;
pub mod trivia;
pub mod web;
