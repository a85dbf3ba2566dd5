mod contrast;

pub use contrast::ContrastCommand;
