//! SSD1306 I2C Protocol
//!
//! This crate defines how bytes reach an SSD1306 controller over I2C.
//! Every transaction starts with a control byte that tells the controller
//! how to interpret the rest of it.
//!
//! # Transaction Overview
//!
//! ```text
//! ┌───────┬────────────┬─────────┬──────────────────────┬──────┐
//! │ START │ ADDR<<1|W  │ CONTROL │ PAYLOAD              │ STOP │
//! │       │ 1B         │ 1B      │ commands or pixels   │      │
//! └───────┴────────────┴─────────┴──────────────────────┴──────┘
//! ```
//!
//! - `0x00` command stream: configuration (one command and its arguments
//!   per transaction)
//! - `0x40` data stream: the whole 1024-byte framebuffer in one go
//! - `0x80` single command: defined by the controller, never sent here
//!
//! In horizontal addressing mode the controller advances its column and
//! page pointers after each data byte, so a frame must go out as one
//! uninterrupted data stream.

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod control;
pub mod transfer;

pub use command::{ADDRESSING_SEQUENCE, INIT_SEQUENCE, POWER_ON_DELAY_MS};
pub use control::ControlByte;
pub use transfer::{send_command, send_commands, send_frame, CommandError};
