pub mod image_io;
pub mod task_host;

pub use image_io::{
    decode_png, decode_png_limited, encode_png, read_png, read_png_limited, write_png,
};
pub use task_host::{CoreRunner, OperationRunner, TaskHost, TaskState, DEFAULT_TASK_TIMEOUT};
