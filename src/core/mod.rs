pub mod raster;

mod color;
mod events;
mod input_adapter;
mod presenter;
mod surface;

pub use color::{ColorError, PackedColor};
pub use events::{DispatcherState, EventDispatcher, InputEvent, Key, LoopSignal, MouseButton};
pub use input_adapter::WinitEventMapper;
pub use presenter::SurfacePresenter;
pub use raster::RasterError;
pub use surface::{ByteOrder, PixelSurface, SurfaceError, SurfaceLayout, BYTES_PER_PIXEL};
