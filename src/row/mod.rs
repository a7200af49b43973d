//! Row Module
//!
//! Schema-laid-out row buffers and the two roles over them.
//!
//! ## Responsibilities
//! - Encode/decode column values at their schema offsets
//! - Own string payloads so dropping a row frees everything it holds
//! - Builder role (`Row`): fill columns sequentially or by number
//! - Read role (`RowView`): borrowed, typed column access
//! - Composite (index, primary) ordering between rows

mod buffer;
mod builder;
mod compare;
mod value;
mod view;

pub use buffer::RowBuffer;
pub use builder::Row;
pub use compare::{compare_key, compare_rows};
pub use value::{Value, ValueRef};
pub use view::RowView;
