pub mod impl_ffmpeg;
pub mod interface;
