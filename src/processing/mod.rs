mod pipeline;

pub use pipeline::convert;
