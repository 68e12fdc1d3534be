//! Image preparation. All decoding happens up front; renderers only read
//! prepared premultiplied pixels.

pub(crate) mod decode;
pub(crate) mod store;
