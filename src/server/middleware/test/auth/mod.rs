use super::*;

mod optional;
mod require;
