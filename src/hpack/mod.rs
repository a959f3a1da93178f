//! HPACK header compression, decoding side.
mod decoder;
mod header;
mod table;

pub mod huffman;

pub use self::decoder::{decode_int, Decoder, DecoderError};
pub use self::header::Header;
pub use self::table::{entry_size, Table, ENTRY_OVERHEAD, STATIC_TABLE, STATIC_TABLE_LEN};
