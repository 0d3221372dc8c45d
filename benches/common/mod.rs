#![allow(dead_code)]

pub mod load;
