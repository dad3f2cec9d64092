mod archive;
mod codec;
mod config;
mod error;
