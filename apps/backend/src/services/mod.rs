pub mod ingest;
pub mod tts;
