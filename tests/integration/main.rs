//! Integration tests for colortap

mod cli_test;
mod config_test;
mod game_test;
mod helpers;
