#![allow(dead_code)]

pub mod fields;
