//! A chess position model with interchangeable board storage engines.
//!
//! Boards are immutable values: [`PieceStorage::apply_move`] returns a new
//! board. [`ArrayBoard`], [`MapBoard`] and [`BitBoard`] store the same
//! positions in different ways and give identical answers through the
//! [`Board`] contract; [`movegen`] builds move lists and perft counts on top of
//! it.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    reason = "every error type documents its variants"
)]

pub mod any_board;
pub mod array_board;
pub mod bit_board;
pub mod bitset;
pub mod board;
pub mod board_display;
pub mod color;
pub mod coord;
pub mod error;
pub mod legality;
pub mod map_board;
pub mod movegen;
pub mod piece;

pub use crate::{
    any_board::{AnyBoard, StorageKind},
    array_board::ArrayBoard,
    bit_board::{BitBoard, PieceFactory},
    board::{Board, Complete, PieceStorage},
    board_display::BoardDisplay,
    color::Color,
    coord::{Move, Position, Size},
    error::{InvalidBoard, KingCapture, MoveError},
    legality::check_move,
    map_board::MapBoard,
    movegen::{moves_for_color, moves_for_position, perft, perft_divide, perft_with},
    piece::{Piece, PieceKind},
};
