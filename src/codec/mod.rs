//! 编解码：日期容错解析与响应体解码。
//!
//! Wire codecs: tolerant timestamp parsing and response body decoding.

pub mod date;
pub mod decode;

pub use date::{format_date, parse_date};
pub use decode::{decode, ResponseWrapper};
