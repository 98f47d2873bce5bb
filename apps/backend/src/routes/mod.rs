pub mod audio;
pub mod game;
pub mod status;
pub mod vocabulary;
