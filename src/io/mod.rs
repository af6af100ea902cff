// Purpose - external interfaces: the microphone and the output file

pub mod capture;
pub mod wav;

pub use capture::{CpalInput, InputBackend, Recorder, RecorderState};
pub use wav::{load_wav, save_wav};
