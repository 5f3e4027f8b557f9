#![allow(dead_code)]

pub mod fixtures;
pub mod redis_container;
pub mod repository_contract;
