pub mod constants;
pub mod container;
pub mod packing;
pub mod tokens;

pub use constants::*;
pub use container::{encode_container, Container, TokenStream, Tokens};
pub use packing::{pack, try_pack, unpack};
pub use tokens::Token;
