pub mod display;
pub mod errors;
pub mod logging;
pub mod rusage;
pub mod timer;
pub mod types;
