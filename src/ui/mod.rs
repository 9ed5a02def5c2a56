// UI Module
// Command line front-end for the toy RSA routines

pub mod cli;

pub use cli::{Cli, Command};
