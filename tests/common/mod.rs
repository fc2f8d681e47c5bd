#![allow(dead_code)]

pub mod asserts;
pub mod builders;
pub mod upstream_server;
