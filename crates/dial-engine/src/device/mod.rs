//! GPU device + surface management.
//!
//! - `context`: wgpu Instance/Adapter/Device/Queue and the window surface
//! - `surface`: format/alpha selection, resize and error recovery
//! - `frame`: a single acquired swapchain frame

mod context;
mod error;
mod frame;
mod init;
mod surface;

pub use context::Gpu;
pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use init::GpuInit;
