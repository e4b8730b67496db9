#[path = "utils/text.rs"]
mod text;
